//! Endpoint construction and response unwrapping shared by the async and
//! blocking clients.
//!
//! Every operation is a [`Request`] (which endpoint, which parameter, how it
//! is encoded) paired with an [`Envelope`] (where the list lives in the
//! response). The clients only differ in how they move bytes.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::borrow::Cow;

use crate::client::types::{
    AlcoholicEntry, CategoryEntry, DrinkList, GlassEntry, IngredientEntry, Ingredients,
};

/// Public endpoint of TheCocktailDB, using the shared test key `1`.
pub const DEFAULT_BASE_URL: &str = "https://thecocktaildb.com/api/json/v1/1";

/// One call against the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Request<'a> {
    SearchByName(&'a str),
    SearchByLetter(char),
    SearchIngredient(&'a str),
    LookupCocktail(u64),
    LookupIngredient(u64),
    Random,
    FilterByIngredient(&'a str),
    FilterByAlcoholic(&'a str),
    FilterByCategory(&'a str),
    FilterByGlass(&'a str),
    ListCategories,
    ListGlasses,
    ListIngredients,
    ListAlcoholic,
}

impl Request<'_> {
    /// The path and query, relative to the base URL.
    pub(crate) fn path(&self) -> String {
        match *self {
            Request::SearchByName(name) => format!("search.php?s={}", encode(name)),
            Request::SearchByLetter(letter) => format!("search.php?f={}", letter),
            Request::SearchIngredient(name) => format!("search.php?i={}", encode(name)),
            Request::LookupCocktail(id) => format!("lookup.php?i={}", id),
            Request::LookupIngredient(id) => format!("lookup.php?iid={}", id),
            Request::Random => "random.php".to_string(),
            Request::FilterByIngredient(name) => format!("filter.php?i={}", encode(name)),
            Request::FilterByAlcoholic(name) => format!("filter.php?a={}", encode(name)),
            Request::FilterByCategory(name) => format!("filter.php?c={}", encode(name)),
            Request::FilterByGlass(name) => format!("filter.php?g={}", encode(name)),
            Request::ListCategories => "list.php?c=list".to_string(),
            Request::ListGlasses => "list.php?g=list".to_string(),
            Request::ListIngredients => "list.php?i=list".to_string(),
            Request::ListAlcoholic => "list.php?a=list".to_string(),
        }
    }

    /// The full URL under `base_url`.
    pub(crate) fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url, self.path())
    }
}

/// Percent-encode a free text parameter. Only unreserved characters pass.
fn encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Trim trailing slashes so paths can be joined with a single `/`.
pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// A response body wrapping a single list of interest.
pub(crate) trait Envelope: DeserializeOwned {
    type Item;

    fn into_items(self) -> Option<Vec<Self::Item>>;
}

impl<T: DeserializeOwned> Envelope for DrinkList<T> {
    type Item = T;

    fn into_items(self) -> Option<Vec<T>> {
        self.drinks
    }
}

impl Envelope for Ingredients {
    type Item = crate::client::types::Ingredient;

    fn into_items(self) -> Option<Vec<Self::Item>> {
        self.ingredients
    }
}

/// Single-field element of a `list.php` response.
pub(crate) trait ListEntry: DeserializeOwned {
    fn into_value(self) -> Option<String>;
}

impl ListEntry for CategoryEntry {
    fn into_value(self) -> Option<String> {
        self.category
    }
}

impl ListEntry for GlassEntry {
    fn into_value(self) -> Option<String> {
        self.glass
    }
}

impl ListEntry for IngredientEntry {
    fn into_value(self) -> Option<String> {
        self.ingredient
    }
}

impl ListEntry for AlcoholicEntry {
    fn into_value(self) -> Option<String> {
        self.alcoholic
    }
}

/// Parse a response body into the envelope's items.
///
/// `Ok(None)` means the service answered but had nothing: an empty body, a
/// missing or null list, or an empty list. `Ok(Some(_))` is never empty.
pub(crate) fn parse_body<E: Envelope>(body: &str) -> Result<Option<Vec<E::Item>>> {
    if body.is_empty() {
        return Ok(None);
    }

    let envelope: E = serde_json::from_str(body).context("failed to parse response body")?;
    let items = envelope.into_items().filter(|items| !items.is_empty());

    tracing::trace!(
        "parsed {} item(s)",
        items.as_ref().map_or(0, |items| items.len())
    );
    Ok(items)
}

/// Project `list.php` entries onto their single field, skipping null entries.
pub(crate) fn entry_values<T: ListEntry>(entries: Vec<T>) -> Option<Vec<String>> {
    let values: Vec<String> = entries.into_iter().filter_map(ListEntry::into_value).collect();
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Collapse an internal failure into the not-found sentinel.
pub(crate) fn collapse<T>(request: &Request<'_>, result: Result<Option<T>>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("{} failed: {:#}", request.path(), e);
            None
        }
    }
}
