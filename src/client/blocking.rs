//! Blocking client for TheCocktailDB.
//!
//! Same operations and contract as the async [`crate::CocktailClient`], built
//! on `reqwest::blocking`. Each call blocks the current thread for one
//! request. Do not call it from inside an async runtime.

use anyhow::{Context, Result};
use reqwest::blocking::Client;

use crate::client::{
    request::{self, Envelope, ListEntry, Request, DEFAULT_BASE_URL},
    types::*,
};

/// Blocking client for TheCocktailDB.
#[derive(Debug, Clone)]
pub struct CocktailClient {
    base_url: String,
    client: Client,
}

impl CocktailClient {
    /// Make a client against the public service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Make a client against another base URL, e.g. a mirror or a test server.
    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        Self::from_client(Client::new(), base_url)
    }

    /// Make a client from a preconfigured blocking reqwest client.
    pub fn from_client(client: Client, base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: request::normalize_base_url(base_url.as_ref()),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search cocktails by name.
    pub fn search(&self, name: &str) -> Option<Vec<Cocktail>> {
        self.fetch_all::<Cocktails>(Request::SearchByName(name))
    }

    /// Search cocktails by first letter.
    pub fn search_by_letter(&self, letter: char) -> Option<Vec<Cocktail>> {
        self.fetch_all::<Cocktails>(Request::SearchByLetter(letter))
    }

    /// Look up a cocktail's full details by id.
    pub fn lookup(&self, id: u64) -> Option<Cocktail> {
        self.fetch_first::<Cocktails>(Request::LookupCocktail(id))
    }

    /// Get a random cocktail.
    pub fn random(&self) -> Option<Cocktail> {
        self.fetch_first::<Cocktails>(Request::Random)
    }

    /// Search an ingredient by name. Only the first match is returned.
    pub fn search_ingredient(&self, name: &str) -> Option<Ingredient> {
        self.fetch_first::<Ingredients>(Request::SearchIngredient(name))
    }

    /// Look up an ingredient by id.
    pub fn lookup_ingredient(&self, id: u64) -> Option<Ingredient> {
        self.fetch_first::<Ingredients>(Request::LookupIngredient(id))
    }

    /// Drinks made with an ingredient.
    pub fn filter_by_ingredient(&self, ingredient: &str) -> Option<Vec<Filter>> {
        self.fetch_all::<FilterDrinks>(Request::FilterByIngredient(ingredient))
    }

    /// Drinks with an alcoholic classification, e.g. "Non alcoholic".
    pub fn filter_by_alcoholic(&self, alcoholic: &str) -> Option<Vec<Filter>> {
        self.fetch_all::<FilterDrinks>(Request::FilterByAlcoholic(alcoholic))
    }

    /// Drinks in a category.
    pub fn filter_by_category(&self, category: &str) -> Option<Vec<Filter>> {
        self.fetch_all::<FilterDrinks>(Request::FilterByCategory(category))
    }

    /// Drinks served in a glass.
    pub fn filter_by_glass(&self, glass: &str) -> Option<Vec<Filter>> {
        self.fetch_all::<FilterDrinks>(Request::FilterByGlass(glass))
    }

    /// List every drink category. Null entries are dropped.
    pub fn list_categories(&self) -> Option<Vec<String>> {
        self.fetch_values::<CategoryEntry>(Request::ListCategories)
    }

    /// List every glass. Null entries are dropped.
    pub fn list_glasses(&self) -> Option<Vec<String>> {
        self.fetch_values::<GlassEntry>(Request::ListGlasses)
    }

    /// List every ingredient name. Null entries are dropped.
    pub fn list_ingredients(&self) -> Option<Vec<String>> {
        self.fetch_values::<IngredientEntry>(Request::ListIngredients)
    }

    /// List every alcoholic classification. Null entries are dropped.
    pub fn list_alcoholic(&self) -> Option<Vec<String>> {
        self.fetch_values::<AlcoholicEntry>(Request::ListAlcoholic)
    }

    fn fetch_all<E: Envelope>(&self, request: Request<'_>) -> Option<Vec<E::Item>> {
        let result = self
            .get(&request)
            .and_then(|body| request::parse_body::<E>(&body));
        request::collapse(&request, result)
    }

    fn fetch_first<E: Envelope>(&self, request: Request<'_>) -> Option<E::Item> {
        self.fetch_all::<E>(request)
            .and_then(|items| items.into_iter().next())
    }

    fn fetch_values<T: ListEntry>(&self, request: Request<'_>) -> Option<Vec<String>> {
        self.fetch_all::<DrinkList<T>>(request)
            .and_then(request::entry_values)
    }

    fn get(&self, request: &Request<'_>) -> Result<String> {
        let url = request.url(&self.base_url);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("failed to connect to {}", url))?;
        tracing::debug!("{} responded with {}", request.path(), response.status());

        response
            .error_for_status()?
            .text()
            .context("failed to read response body")
    }
}

impl Default for CocktailClient {
    fn default() -> Self {
        Self::new()
    }
}
