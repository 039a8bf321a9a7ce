use anyhow::{Context, Result};
use reqwest::Client;

use crate::client::{
    request::{self, Envelope, ListEntry, Request, DEFAULT_BASE_URL},
    types::*,
};

/// Async client for TheCocktailDB.
///
/// Every method issues exactly one GET request. Any failure (transport,
/// non-2xx status, empty body, malformed JSON, no results) is reported as
/// `None`.
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

    /// Make a client from a preconfigured reqwest client.
    ///
    /// Use this to set timeouts, proxies or a user agent.
    pub fn from_client(client: Client, base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: request::normalize_base_url(base_url.as_ref()),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Cocktail operations

    /// Search cocktails by name.
    pub async fn search(&self, name: &str) -> Option<Vec<Cocktail>> {
        self.fetch_all::<Cocktails>(Request::SearchByName(name)).await
    }

    /// Search cocktails by first letter.
    pub async fn search_by_letter(&self, letter: char) -> Option<Vec<Cocktail>> {
        self.fetch_all::<Cocktails>(Request::SearchByLetter(letter)).await
    }

    /// Look up a cocktail's full details by id.
    pub async fn lookup(&self, id: u64) -> Option<Cocktail> {
        self.fetch_first::<Cocktails>(Request::LookupCocktail(id)).await
    }

    /// Get a random cocktail.
    pub async fn random(&self) -> Option<Cocktail> {
        self.fetch_first::<Cocktails>(Request::Random).await
    }

    // Ingredient operations

    /// Search an ingredient by name. Only the first match is returned.
    pub async fn search_ingredient(&self, name: &str) -> Option<Ingredient> {
        self.fetch_first::<Ingredients>(Request::SearchIngredient(name))
            .await
    }

    /// Look up an ingredient by id.
    pub async fn lookup_ingredient(&self, id: u64) -> Option<Ingredient> {
        self.fetch_first::<Ingredients>(Request::LookupIngredient(id))
            .await
    }

    // Filter operations

    /// Drinks made with an ingredient.
    pub async fn filter_by_ingredient(&self, ingredient: &str) -> Option<Vec<Filter>> {
        self.fetch_all::<FilterDrinks>(Request::FilterByIngredient(ingredient))
            .await
    }

    /// Drinks with an alcoholic classification, e.g. "Non alcoholic".
    pub async fn filter_by_alcoholic(&self, alcoholic: &str) -> Option<Vec<Filter>> {
        self.fetch_all::<FilterDrinks>(Request::FilterByAlcoholic(alcoholic))
            .await
    }

    /// Drinks in a category.
    pub async fn filter_by_category(&self, category: &str) -> Option<Vec<Filter>> {
        self.fetch_all::<FilterDrinks>(Request::FilterByCategory(category))
            .await
    }

    /// Drinks served in a glass.
    pub async fn filter_by_glass(&self, glass: &str) -> Option<Vec<Filter>> {
        self.fetch_all::<FilterDrinks>(Request::FilterByGlass(glass))
            .await
    }

    // List operations

    /// List every drink category. Null entries are dropped.
    pub async fn list_categories(&self) -> Option<Vec<String>> {
        self.fetch_values::<CategoryEntry>(Request::ListCategories)
            .await
    }

    /// List every glass. Null entries are dropped.
    pub async fn list_glasses(&self) -> Option<Vec<String>> {
        self.fetch_values::<GlassEntry>(Request::ListGlasses).await
    }

    /// List every ingredient name. Null entries are dropped.
    pub async fn list_ingredients(&self) -> Option<Vec<String>> {
        self.fetch_values::<IngredientEntry>(Request::ListIngredients)
            .await
    }

    /// List every alcoholic classification. Null entries are dropped.
    pub async fn list_alcoholic(&self) -> Option<Vec<String>> {
        self.fetch_values::<AlcoholicEntry>(Request::ListAlcoholic)
            .await
    }

    async fn fetch_all<E: Envelope>(&self, request: Request<'_>) -> Option<Vec<E::Item>> {
        let result = self.try_fetch::<E>(&request).await;
        request::collapse(&request, result)
    }

    async fn fetch_first<E: Envelope>(&self, request: Request<'_>) -> Option<E::Item> {
        self.fetch_all::<E>(request)
            .await
            .and_then(|items| items.into_iter().next())
    }

    async fn fetch_values<T: ListEntry>(&self, request: Request<'_>) -> Option<Vec<String>> {
        self.fetch_all::<DrinkList<T>>(request)
            .await
            .and_then(request::entry_values)
    }

    async fn try_fetch<E: Envelope>(&self, request: &Request<'_>) -> Result<Option<Vec<E::Item>>> {
        let body = self.get(request).await?;
        request::parse_body::<E>(&body)
    }

    /// Perform one GET and read the whole body.
    async fn get(&self, request: &Request<'_>) -> Result<String> {
        let url = request.url(&self.base_url);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("failed to connect to {}", url))?;

        let status = response.status();
        tracing::debug!("{} responded with {}", request.path(), status);

        let body = response
            .error_for_status()?
            .text()
            .await
            .context("failed to read response body")?;
        Ok(body)
    }
}

impl Default for CocktailClient {
    fn default() -> Self {
        Self::new()
    }
}
