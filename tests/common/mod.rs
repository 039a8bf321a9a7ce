#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    Router,
};
use cocktaildb::{client::blocking, CocktailClient};
use tracing_subscriber::EnvFilter;

/// Path under which the mock serves the API, same as the real service.
pub const API_PREFIX: &str = "/api/json/v1/1";

pub const SEARCH_MARGARITA: &str = include_str!("../fixtures/search_margarita.json");
pub const LOOKUP_MARGARITA: &str = include_str!("../fixtures/lookup_margarita.json");
pub const RANDOM_PAIR: &str = include_str!("../fixtures/random_pair.json");
pub const SEARCH_INGREDIENT_VODKA: &str = include_str!("../fixtures/search_ingredient_vodka.json");
pub const FILTER_GIN: &str = include_str!("../fixtures/filter_gin.json");
pub const LIST_CATEGORIES: &str = include_str!("../fixtures/list_categories.json");
pub const LIST_GLASSES: &str = include_str!("../fixtures/list_glasses.json");
pub const LIST_INGREDIENTS: &str = include_str!("../fixtures/list_ingredients.json");
pub const LIST_ALCOHOLIC: &str = include_str!("../fixtures/list_alcoholic.json");

/// The request path each operation issues when called by [`operations_with_data`].
pub const OPERATION_PATHS: [&str; 14] = [
    "search.php?s=margarita",
    "search.php?f=m",
    "search.php?i=vodka",
    "lookup.php?i=11007",
    "lookup.php?iid=552",
    "random.php",
    "filter.php?i=Gin",
    "filter.php?a=Alcoholic",
    "filter.php?c=Cocktail",
    "filter.php?g=Cocktail%20glass",
    "list.php?c=list",
    "list.php?g=list",
    "list.php?i=list",
    "list.php?a=list",
];

/// Canned responses keyed by raw (still percent-encoded) path and query.
#[derive(Debug, Default, Clone)]
pub struct Fixtures {
    routes: HashMap<String, (StatusCode, String)>,
}

impl Fixtures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with a 200 and `body`.
    pub fn ok(self, path: &str, body: &str) -> Self {
        self.respond(path, StatusCode::OK, body)
    }

    pub fn respond(mut self, path: &str, status: StatusCode, body: &str) -> Self {
        self.routes
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Answer every operation path with the same status and body.
    pub fn every_operation(status: StatusCode, body: &str) -> Self {
        OPERATION_PATHS
            .iter()
            .fold(Self::new(), |fixtures, path| fixtures.respond(path, status, body))
    }

    /// Answer every operation with its envelope and a `null` list, which is
    /// how the service reports no matches.
    pub fn every_operation_unmatched() -> Self {
        OPERATION_PATHS.iter().fold(Self::new(), |fixtures, path| {
            let body = if path.starts_with("search.php?i=") || path.starts_with("lookup.php?iid=") {
                r#"{"ingredients":null}"#
            } else {
                r#"{"drinks":null}"#
            };
            fixtures.ok(path, body)
        })
    }
}

struct MockState {
    routes: HashMap<String, (StatusCode, String)>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// In-process stand-in for TheCocktailDB.
///
/// Runs on its own thread and runtime so it serves both the async and the
/// blocking client. Unknown paths get a 404 with an empty body.
pub struct MockCocktailDb {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockCocktailDb {
    pub fn start(fixtures: Fixtures) -> Self {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind mock server");
        let addr = listener.local_addr().expect("missing local addr");
        listener
            .set_nonblocking(true)
            .expect("failed to set nonblocking");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = Arc::new(MockState {
            routes: fixtures.routes,
            requests: requests.clone(),
        });

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build mock runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("failed to register mock listener");
                let app = Router::new().fallback(respond).with_state(state);
                axum::serve(listener, app).await
            })
            .expect("mock server failed");
        });

        Self {
            base_url: format!("http://{addr}{API_PREFIX}"),
            requests,
        }
    }

    /// Every path and query received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(State(state): State<Arc<MockState>>, uri: Uri) -> (StatusCode, String) {
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let key = path_and_query
        .strip_prefix(API_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path_and_query);

    state.requests.lock().unwrap().push(key.to_string());

    match state.routes.get(key) {
        Some((status, body)) => (*status, body.clone()),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}

/// A mock server plus an async client pointed at it.
pub struct TestEnvironment {
    pub server: MockCocktailDb,
    pub client: CocktailClient,
}

impl TestEnvironment {
    pub fn new(fixtures: Fixtures) -> Self {
        init_test_logging();
        let server = MockCocktailDb::start(fixtures);
        let client = CocktailClient::with_base_url(&server.base_url);
        Self { server, client }
    }

    pub fn blocking_client(&self) -> blocking::CocktailClient {
        blocking::CocktailClient::with_base_url(&self.server.base_url)
    }
}

/// A base URL with nothing listening on it.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let addr = listener.local_addr().expect("missing local addr");
    drop(listener);
    format!("http://{addr}{API_PREFIX}")
}

/// Call every operation with the parameters in [`OPERATION_PATHS`] and
/// return the names of those that produced data.
pub async fn operations_with_data(client: &CocktailClient) -> Vec<&'static str> {
    let results = [
        ("search", client.search("margarita").await.is_some()),
        ("search_by_letter", client.search_by_letter('m').await.is_some()),
        ("search_ingredient", client.search_ingredient("vodka").await.is_some()),
        ("lookup", client.lookup(11007).await.is_some()),
        ("lookup_ingredient", client.lookup_ingredient(552).await.is_some()),
        ("random", client.random().await.is_some()),
        ("filter_by_ingredient", client.filter_by_ingredient("Gin").await.is_some()),
        ("filter_by_alcoholic", client.filter_by_alcoholic("Alcoholic").await.is_some()),
        ("filter_by_category", client.filter_by_category("Cocktail").await.is_some()),
        ("filter_by_glass", client.filter_by_glass("Cocktail glass").await.is_some()),
        ("list_categories", client.list_categories().await.is_some()),
        ("list_glasses", client.list_glasses().await.is_some()),
        ("list_ingredients", client.list_ingredients().await.is_some()),
        ("list_alcoholic", client.list_alcoholic().await.is_some()),
    ];
    results
        .into_iter()
        .filter(|(_, has_data)| *has_data)
        .map(|(name, _)| name)
        .collect()
}

/// Blocking counterpart of [`operations_with_data`].
pub fn blocking_operations_with_data(client: &blocking::CocktailClient) -> Vec<&'static str> {
    let results = [
        ("search", client.search("margarita").is_some()),
        ("search_by_letter", client.search_by_letter('m').is_some()),
        ("search_ingredient", client.search_ingredient("vodka").is_some()),
        ("lookup", client.lookup(11007).is_some()),
        ("lookup_ingredient", client.lookup_ingredient(552).is_some()),
        ("random", client.random().is_some()),
        ("filter_by_ingredient", client.filter_by_ingredient("Gin").is_some()),
        ("filter_by_alcoholic", client.filter_by_alcoholic("Alcoholic").is_some()),
        ("filter_by_category", client.filter_by_category("Cocktail").is_some()),
        ("filter_by_glass", client.filter_by_glass("Cocktail glass").is_some()),
        ("list_categories", client.list_categories().is_some()),
        ("list_glasses", client.list_glasses().is_some()),
        ("list_ingredients", client.list_ingredients().is_some()),
        ("list_alcoholic", client.list_alcoholic().is_some()),
    ];
    results
        .into_iter()
        .filter(|(_, has_data)| *has_data)
        .map(|(name, _)| name)
        .collect()
}

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cocktaildb=debug")),
        )
        .with_test_writer()
        .try_init();
}
