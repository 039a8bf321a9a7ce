//! Type definitions for TheCocktailDB API.
//!
//! Every record mirrors the wire schema field-for-field. The service types
//! nothing beyond string-or-null, so every field is an `Option<String>` and
//! a missing key simply deserializes to `None`.
//!
//! ## Key Types
//!
//! - [`Cocktail`] - Full drink record returned by search, lookup and random
//! - [`Ingredient`] - Ingredient record returned by ingredient search/lookup
//! - [`Filter`] - Reduced drink record returned by the filter endpoints
//! - [`DrinkList`] - The `{"drinks": [...]}` envelope shared by most endpoints
//! - [`Ingredients`] - The `{"ingredients": [...]}` envelope
//!
//! ## API Compatibility
//!
//! The simplified and traditional Chinese instructions use hyphenated wire
//! names (`strInstructionsZH-HANS` / `strInstructionsZH-HANT`); they are
//! mapped with explicit renames like every other field.

use serde::{Deserialize, Serialize};

/// A complete drink record.
///
/// Ingredients and measures are positional: `ingredient3` pairs with
/// `measure3`. Unused slots are `None` (or occasionally an empty string,
/// exactly as the service sent them).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cocktail {
    /// Drink identifier
    #[serde(rename = "idDrink")]
    pub id: Option<String>,
    /// Drink name
    #[serde(rename = "strDrink")]
    pub name: Option<String>,
    /// Alternate drink name
    #[serde(rename = "strDrinkAlternate")]
    pub alternate_name: Option<String>,
    /// Comma separated tags
    #[serde(rename = "strTags")]
    pub tags: Option<String>,
    /// Video URL
    #[serde(rename = "strVideo")]
    pub video: Option<String>,
    /// Category, e.g. "Ordinary Drink"
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    /// International Bartenders Association classification
    #[serde(rename = "strIBA")]
    pub iba: Option<String>,
    /// "Alcoholic", "Non alcoholic" or "Optional alcohol"
    #[serde(rename = "strAlcoholic")]
    pub alcoholic: Option<String>,
    /// Serving glass
    #[serde(rename = "strGlass")]
    pub glass: Option<String>,

    /// Instructions in English
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    /// Instructions in Spanish
    #[serde(rename = "strInstructionsES")]
    pub instructions_es: Option<String>,
    /// Instructions in German
    #[serde(rename = "strInstructionsDE")]
    pub instructions_de: Option<String>,
    /// Instructions in French
    #[serde(rename = "strInstructionsFR")]
    pub instructions_fr: Option<String>,
    /// Instructions in Italian
    #[serde(rename = "strInstructionsIT")]
    pub instructions_it: Option<String>,
    /// Instructions in simplified Chinese
    #[serde(rename = "strInstructionsZH-HANS")]
    pub instructions_zh_hans: Option<String>,
    /// Instructions in traditional Chinese
    #[serde(rename = "strInstructionsZH-HANT")]
    pub instructions_zh_hant: Option<String>,

    /// Thumbnail image URL
    #[serde(rename = "strDrinkThumb")]
    pub thumbnail: Option<String>,

    #[serde(rename = "strIngredient1")]
    pub ingredient1: Option<String>,
    #[serde(rename = "strIngredient2")]
    pub ingredient2: Option<String>,
    #[serde(rename = "strIngredient3")]
    pub ingredient3: Option<String>,
    #[serde(rename = "strIngredient4")]
    pub ingredient4: Option<String>,
    #[serde(rename = "strIngredient5")]
    pub ingredient5: Option<String>,
    #[serde(rename = "strIngredient6")]
    pub ingredient6: Option<String>,
    #[serde(rename = "strIngredient7")]
    pub ingredient7: Option<String>,
    #[serde(rename = "strIngredient8")]
    pub ingredient8: Option<String>,
    #[serde(rename = "strIngredient9")]
    pub ingredient9: Option<String>,
    #[serde(rename = "strIngredient10")]
    pub ingredient10: Option<String>,
    #[serde(rename = "strIngredient11")]
    pub ingredient11: Option<String>,
    #[serde(rename = "strIngredient12")]
    pub ingredient12: Option<String>,
    #[serde(rename = "strIngredient13")]
    pub ingredient13: Option<String>,
    #[serde(rename = "strIngredient14")]
    pub ingredient14: Option<String>,
    #[serde(rename = "strIngredient15")]
    pub ingredient15: Option<String>,

    #[serde(rename = "strMeasure1")]
    pub measure1: Option<String>,
    #[serde(rename = "strMeasure2")]
    pub measure2: Option<String>,
    #[serde(rename = "strMeasure3")]
    pub measure3: Option<String>,
    #[serde(rename = "strMeasure4")]
    pub measure4: Option<String>,
    #[serde(rename = "strMeasure5")]
    pub measure5: Option<String>,
    #[serde(rename = "strMeasure6")]
    pub measure6: Option<String>,
    #[serde(rename = "strMeasure7")]
    pub measure7: Option<String>,
    #[serde(rename = "strMeasure8")]
    pub measure8: Option<String>,
    #[serde(rename = "strMeasure9")]
    pub measure9: Option<String>,
    #[serde(rename = "strMeasure10")]
    pub measure10: Option<String>,
    #[serde(rename = "strMeasure11")]
    pub measure11: Option<String>,
    #[serde(rename = "strMeasure12")]
    pub measure12: Option<String>,
    #[serde(rename = "strMeasure13")]
    pub measure13: Option<String>,
    #[serde(rename = "strMeasure14")]
    pub measure14: Option<String>,
    #[serde(rename = "strMeasure15")]
    pub measure15: Option<String>,

    /// Where the image came from
    #[serde(rename = "strImageSource")]
    pub image_source: Option<String>,
    /// Image attribution text
    #[serde(rename = "strImageAttribution")]
    pub image_attribution: Option<String>,
    /// "Yes" or "No"
    #[serde(rename = "strCreativeCommonsConfirmed")]
    pub creative_commons_confirmed: Option<String>,
    /// Last modification, "YYYY-MM-DD hh:mm:ss"
    #[serde(rename = "dateModified")]
    pub date_modified: Option<String>,
}

/// An ingredient record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient identifier
    #[serde(rename = "idIngredient")]
    pub id: Option<String>,
    /// Ingredient name
    #[serde(rename = "strIngredient")]
    pub name: Option<String>,
    /// Long form description
    #[serde(rename = "strDescription")]
    pub description: Option<String>,
    /// Kind of ingredient, e.g. "Vodka" or "Liqueur"
    #[serde(rename = "strType")]
    pub kind: Option<String>,
    /// "Yes" or "No"
    #[serde(rename = "strAlcohol")]
    pub alcohol: Option<String>,
    /// Alcohol by volume, in percent
    #[serde(rename = "strABV")]
    pub abv: Option<String>,
}

/// Reduced drink record returned by `filter.php`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(rename = "strDrink")]
    pub name: Option<String>,
    #[serde(rename = "strDrinkThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "idDrink")]
    pub id: Option<String>,
}

/// The `{"drinks": [...]}` envelope.
///
/// The service answers `{"drinks": null}` when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkList<T> {
    pub drinks: Option<Vec<T>>,
}

/// The `{"ingredients": [...]}` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredients {
    pub ingredients: Option<Vec<Ingredient>>,
}

/// Envelope for search, lookup and random.
pub type Cocktails = DrinkList<Cocktail>;

/// Envelope for the filter endpoints.
pub type FilterDrinks = DrinkList<Filter>;

/// Envelope for `list.php?c=list`.
pub type CategoriesFilter = DrinkList<CategoryEntry>;

/// Envelope for `list.php?g=list`.
pub type GlassesFilter = DrinkList<GlassEntry>;

/// Envelope for `list.php?i=list`.
pub type IngredientsFilter = DrinkList<IngredientEntry>;

/// Envelope for `list.php?a=list`.
pub type AlcoholicFilter = DrinkList<AlcoholicEntry>;

/// Single-field element of the category list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
}

/// Single-field element of the glass list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlassEntry {
    #[serde(rename = "strGlass")]
    pub glass: Option<String>,
}

/// Single-field element of the ingredient list.
///
/// The list endpoint reuses the drink schema, so the name lives in the first
/// ingredient slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientEntry {
    #[serde(rename = "strIngredient1")]
    pub ingredient: Option<String>,
}

/// Single-field element of the alcoholic classification list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlcoholicEntry {
    #[serde(rename = "strAlcoholic")]
    pub alcoholic: Option<String>,
}
