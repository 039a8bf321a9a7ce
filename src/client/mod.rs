//! # TheCocktailDB HTTP Client
//!
//! This module provides typed access to the TheCocktailDB JSON API: cocktail
//! and ingredient search, id lookups, random drinks, filters and the lists
//! of categories, glasses, ingredients and alcoholic classifications.
//!
//! ## Modules
//!
//! - [`client`] - Async client with all API methods
//! - [`blocking`] - The same methods on a blocking HTTP client
//! - [`types`] - Records and response envelopes
//!
//! ## Quick Start
//!
//! ```no_run
//! use cocktaildb::client::CocktailClient;
//!
//! # async fn example() {
//! let client = CocktailClient::new();
//!
//! if let Some(drinks) = client.search("margarita").await {
//!     println!("Found {} drinks", drinks.len());
//! }
//! # }
//! ```

pub mod blocking;
#[allow(clippy::module_inception)]
pub mod client;
mod request;
pub mod types;

pub use client::CocktailClient;
pub use request::DEFAULT_BASE_URL;
pub use types::*;
