//! Integration test harness for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! Nothing external is needed: [`CatalogStub`] serves the three catalog
//! operations from in-memory fixtures on a loopback port, and
//! [`spawn_storefront`] runs the real storefront router against it.
//!
//! # Test Categories
//!
//! - `catalog_client` - `CatalogClient` against the stub upstream
//! - `storefront_routes` - pages, redirects and the cart over HTTP

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router, ServiceExt};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use url::Url;
use vitrine_storefront::config::{CatalogConfig, StorefrontConfig};
use vitrine_storefront::state::AppState;

/// How the stub answers every operation.
#[derive(Debug, Clone)]
pub enum StubMode {
    /// Serve the fixtures.
    Serve,
    /// Answer with this status and body.
    Fail { status: StatusCode, body: String },
    /// Answer 200 with a GraphQL `errors` array.
    GraphQLErrors(String),
    /// Wait this long before serving the fixtures.
    Delay(Duration),
}

/// A request received by the stub.
#[derive(Debug, Clone)]
pub struct StubRequest {
    pub operation: String,
    pub variables: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphQLBody {
    #[serde(default)]
    operation_name: Option<String>,
    #[serde(default)]
    variables: Value,
}

struct StubState {
    categories: Vec<Value>,
    products: Vec<Value>,
    mode: Mutex<StubMode>,
    requests: Mutex<Vec<StubRequest>>,
}

/// Handle for the stub catalog GraphQL server. Shuts the server down on drop.
pub struct CatalogStub {
    url: Url,
    state: Arc<StubState>,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl CatalogStub {
    /// Spawn a stub serving the given collection and product nodes.
    ///
    /// # Panics
    ///
    /// Panics if the loopback listener cannot be bound.
    pub async fn spawn(categories: Vec<Value>, products: Vec<Value>) -> Self {
        let state = Arc::new(StubState {
            categories,
            products,
            mode: Mutex::new(StubMode::Serve),
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/shop-api", post(handle_graphql))
            .with_state(Arc::clone(&state));

        let (addr, shutdown, join) = serve(app).await;
        let url = Url::parse(&format!("http://{addr}/shop-api"))
            .unwrap_or_else(|e| panic!("stub url: {e}"));

        Self {
            url,
            state,
            shutdown: Some(shutdown),
            join: Some(join),
        }
    }

    /// Spawn a stub with [`sample_categories`] and [`sample_products`].
    pub async fn spawn_sample() -> Self {
        Self::spawn(sample_categories(), sample_products()).await
    }

    /// The GraphQL endpoint.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Catalog settings pointing at this stub.
    #[must_use]
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            graphql_url: Some(self.url.clone()),
            timeout: Duration::from_secs(2),
            ..CatalogConfig::default()
        }
    }

    /// Change how subsequent requests are answered.
    pub fn set_mode(&self, mode: StubMode) {
        if let Ok(mut current) = self.state.mode.lock() {
            *current = mode;
        }
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<StubRequest> {
        self.state
            .requests
            .lock()
            .map_or_else(|_| Vec::new(), |requests| requests.clone())
    }

    /// Number of requests received for one operation.
    #[must_use]
    pub fn count(&self, operation: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.operation == operation)
            .count()
    }
}

impl Drop for CatalogStub {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            join.abort();
        }
    }
}

async fn handle_graphql(
    State(state): State<Arc<StubState>>,
    Json(body): Json<GraphQLBody>,
) -> Response {
    let operation = body.operation_name.unwrap_or_default();
    if let Ok(mut requests) = state.requests.lock() {
        requests.push(StubRequest {
            operation: operation.clone(),
            variables: body.variables.clone(),
        });
    }

    let mode = state
        .mode
        .lock()
        .map_or(StubMode::Serve, |mode| mode.clone());
    match mode {
        StubMode::Serve => {}
        StubMode::Fail { status, body } => return (status, body).into_response(),
        StubMode::GraphQLErrors(message) => {
            return Json(json!({ "errors": [{ "message": message }] })).into_response();
        }
        StubMode::Delay(delay) => tokio::time::sleep(delay).await,
    }

    let data = match operation.as_str() {
        "GetCategories" => json!({ "collections": { "items": state.categories } }),
        "GetProducts" => {
            let skip = variable_usize(&body.variables, "skip").unwrap_or(0);
            let take = variable_usize(&body.variables, "take").unwrap_or(state.products.len());
            let page: Vec<&Value> = state.products.iter().skip(skip).take(take).collect();
            json!({ "products": { "items": page, "totalItems": state.products.len() } })
        }
        "GetProductBySlug" => {
            let slug = body.variables.get("slug").and_then(Value::as_str);
            let product = state
                .products
                .iter()
                .find(|p| p.get("slug").and_then(Value::as_str) == slug);
            json!({ "product": product })
        }
        other => {
            return Json(json!({
                "errors": [{ "message": format!("Unknown operation {other:?}") }]
            }))
            .into_response();
        }
    };
    Json(json!({ "data": data })).into_response()
}

fn variable_usize(variables: &Value, name: &str) -> Option<usize> {
    variables
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
}

/// Handle for an in-process storefront. Shuts the server down on drop.
pub struct StorefrontHandle {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl StorefrontHandle {
    /// Absolute URL for a storefront path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A client that keeps the session cookie and does not follow redirects.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_else(|e| panic!("http client: {e}"))
    }
}

impl Drop for StorefrontHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            join.abort();
        }
    }
}

/// Run the storefront against `catalog` (or no upstream at all).
///
/// # Panics
///
/// Panics if the listener cannot be bound or the state cannot be built.
pub async fn spawn_storefront(catalog: Option<CatalogConfig>) -> StorefrontHandle {
    let mut config = StorefrontConfig::default();
    if let Some(catalog) = catalog {
        config.catalog = catalog;
    }
    let state = AppState::new(config).unwrap_or_else(|e| panic!("storefront state: {e}"));

    let app = NormalizePathLayer::trim_trailing_slash().layer(vitrine_storefront::app(state));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap_or_else(|e| panic!("storefront bind: {e}"));
    let addr = listener
        .local_addr()
        .unwrap_or_else(|e| panic!("storefront addr: {e}"));
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let join = tokio::spawn(async move {
        let _ = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
    });

    StorefrontHandle {
        base_url: format!("http://{addr}"),
        shutdown: Some(shutdown_tx),
        join: Some(join),
    }
}

async fn serve(app: Router) -> (SocketAddr, oneshot::Sender<()>, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap_or_else(|e| panic!("stub bind: {e}"));
    let addr = listener
        .local_addr()
        .unwrap_or_else(|e| panic!("stub addr: {e}"));
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let join = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
    });
    (addr, shutdown_tx, join)
}

// =============================================================================
// Fixtures
// =============================================================================

/// A collection node as the upstream returns it.
#[must_use]
pub fn collection_node(id: &str, name: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "slug": slug,
        "description": "",
        "featuredAsset": { "preview": format!("https://assets.example/{slug}.jpg") }
    })
}

/// A product node with a single variant.
#[must_use]
pub fn product_node(
    id: &str,
    slug: &str,
    name: &str,
    price_with_tax: i64,
    currency_code: &str,
    collections: &[(&str, &str, &str)],
) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "name": name,
        "description": format!("<p>The {name}.</p>"),
        "featuredAsset": { "preview": format!("https://assets.example/{slug}.jpg") },
        "assets": [{ "preview": format!("https://assets.example/{slug}.jpg") }],
        "collections": collections
            .iter()
            .map(|(id, name, slug)| json!({ "id": id, "name": name, "slug": slug }))
            .collect::<Vec<_>>(),
        "variants": [{
            "id": format!("{id}-v1"),
            "sku": format!("SKU-{id}"),
            "priceWithTax": price_with_tax,
            "currencyCode": currency_code
        }]
    })
}

/// Two collections.
#[must_use]
pub fn sample_categories() -> Vec<Value> {
    vec![
        collection_node("2", "Electronics", "electronics"),
        collection_node("3", "Computers", "computers"),
    ]
}

/// Three products priced in EUR: 10.00, 25.00 and 5.50.
#[must_use]
pub fn sample_products() -> Vec<Value> {
    let electronics = ("2", "Electronics", "electronics");
    let computers = ("3", "Computers", "computers");
    vec![
        product_node("1", "laptop", "Laptop", 1000, "EUR", &[electronics, computers]),
        product_node("2", "tablet", "Tablet", 2500, "EUR", &[electronics]),
        product_node("3", "cord", "Charging Cord", 550, "EUR", &[electronics]),
    ]
}
