//! # TheCocktailDB Client Library
//!
//! Typed access to [TheCocktailDB](https://www.thecocktaildb.com), an open,
//! crowd-sourced database of drinks and cocktails.
//!
//! ## Client Module
//!
//! The [`client`] module holds an async [`CocktailClient`] and a blocking
//! [`client::blocking::CocktailClient`] with identical methods, plus the
//! record types they return.
//!
//! ## Failure Model
//!
//! Each method performs exactly one GET request and never retries or
//! caches. Every failure (network error, bad status, empty body, malformed
//! JSON or simply no results) is reported as `None`. Failures are logged
//! through `tracing` at debug level; the library never installs a subscriber.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cocktaildb::CocktailClient;
//!
//! # async fn example() {
//! let client = CocktailClient::new();
//!
//! if let Some(cocktail) = client.random().await {
//!     println!("{:?}: {:?}", cocktail.name, cocktail.instructions);
//! }
//!
//! let categories = client.list_categories().await.unwrap_or_default();
//! # }
//! ```

pub mod client;

pub use client::{Cocktail, CocktailClient, Filter, Ingredient, DEFAULT_BASE_URL};
