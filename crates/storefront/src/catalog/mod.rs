//! Client for the upstream commerce GraphQL API.
//!
//! # Failure policy
//!
//! - No endpoint configured: every call degrades to an empty result
//!   (categories and products) or `None` (detail), with a single warning.
//! - Categories never fail. Any upstream, network, timeout or parse error
//!   is logged and an empty list is returned so pages still render.
//! - Products and product detail surface a classified [`CatalogError`]
//!   so the page can offer a retry. A missing product (HTTP 404 or a
//!   `null` result) is `Ok(None)`, not an error.
//!
//! Successful responses are kept in a short-lived `moka` cache; failures
//! are never cached.

mod cache;
mod conversions;
pub mod queries;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::http::StatusCode;
use graphql_client::{GraphQLQuery, Response};
use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;
use vitrine_core::types::{Category, Locale, Product, ProductDetail};

use crate::config::CatalogConfig;

use cache::{CacheKey, CacheValue};
use conversions::{convert_category, convert_product, convert_product_detail};
use queries::{
    GetCategories, GetProductBySlug, GetProducts, get_categories, get_product_by_slug,
    get_products,
};

/// Products requested per page. The upstream caps `take` at 100.
pub const PAGE_SIZE: i64 = 50;

/// Characters of an upstream error body kept in logs and errors.
const BODY_EXCERPT_CHARS: usize = 200;

// =============================================================================
// Errors
// =============================================================================

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Non-success HTTP status.
    #[error("upstream returned HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The response carried GraphQL errors (or neither data nor errors).
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// Transport failure: DNS, connection refused, reset.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }
}

impl CatalogError {
    /// HTTP status the storefront answers with when this error reaches a page.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::GraphQL(_) | Self::Parse(_) => StatusCode::BAD_GATEWAY,
            Self::Network(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Message shown to shoppers. Never includes upstream details.
    #[must_use]
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Upstream { status: 404, .. }, Locale::Fr) => {
                "La ressource demandée est introuvable."
            }
            (Self::Upstream { status: 404, .. }, Locale::En) => {
                "The requested resource could not be found."
            }
            (Self::Upstream { status: 503, .. }, Locale::Fr) => {
                "Le service est temporairement indisponible. Veuillez réessayer plus tard."
            }
            (Self::Upstream { status: 503, .. }, Locale::En) => {
                "The service is temporarily unavailable. Please try again later."
            }
            (Self::Upstream { .. }, Locale::Fr) => {
                "Une erreur serveur est survenue. Veuillez réessayer plus tard."
            }
            (Self::Upstream { .. }, Locale::En) => {
                "A server error occurred. Please try again later."
            }
            (Self::GraphQL(_) | Self::Parse(_), Locale::Fr) => {
                "Une erreur est survenue lors de la récupération des données."
            }
            (Self::GraphQL(_) | Self::Parse(_), Locale::En) => {
                "Something went wrong while loading the catalog."
            }
            (Self::Network(_), Locale::Fr) => {
                "Impossible de se connecter au serveur. Vérifiez votre connexion internet."
            }
            (Self::Network(_), Locale::En) => {
                "Unable to reach the server. Check your internet connection."
            }
            (Self::Timeout, Locale::Fr) => "La requête a expiré. Veuillez réessayer.",
            (Self::Timeout, Locale::En) => "The request expired. Please try again.",
        }
    }

    /// Whether this is a "not found" answer rather than a failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Upstream { status: 404, .. })
    }
}

/// A GraphQL error returned by the upstream API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    pub message: String,
    /// Path to the failing field, e.g. `products.items.0`.
    pub path: Vec<String>,
}

impl From<graphql_client::Error> for GraphQLError {
    fn from(err: graphql_client::Error) -> Self {
        Self {
            message: err.message,
            path: err
                .path
                .unwrap_or_default()
                .into_iter()
                .map(|fragment| match fragment {
                    graphql_client::PathFragment::Key(key) => key,
                    graphql_client::PathFragment::Index(index) => index.to_string(),
                })
                .collect(),
        }
    }
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();
            if !e.message.is_empty() {
                parts.push(e.message.clone());
            }
            if !e.path.is_empty() {
                parts.push(format!("path: {}", e.path.join(".")));
            }
            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the catalog GraphQL API.
///
/// Cheap to clone; clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: Option<Url>,
    cache: Cache<CacheKey, CacheValue>,
    warned_unconfigured: AtomicBool,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                endpoint: config.graphql_url.clone(),
                cache,
                warned_unconfigured: AtomicBool::new(false),
            }),
        })
    }

    /// Whether an upstream endpoint is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.inner.endpoint.is_some()
    }

    /// The endpoint, or `None` after logging the misconfiguration once.
    fn endpoint(&self) -> Option<&Url> {
        let endpoint = self.inner.endpoint.as_ref();
        if endpoint.is_none() && !self.inner.warned_unconfigured.swap(true, Ordering::Relaxed) {
            warn!("CATALOG_GRAPHQL_URL is not set; serving an empty catalog");
        }
        endpoint
    }

    /// Execute a GraphQL operation.
    async fn execute<Q: GraphQLQuery>(
        &self,
        endpoint: &Url,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, CatalogError> {
        let request_body = Q::build_query(variables);

        let response = self
            .inner
            .client
            .post(endpoint.clone())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            if status != reqwest::StatusCode::NOT_FOUND {
                warn!(
                    status = %status,
                    body = %excerpt(&response_text),
                    operation = request_body.operation_name,
                    "Catalog API returned non-success status"
                );
            }
            return Err(CatalogError::Upstream {
                status: status.as_u16(),
                message: excerpt(&response_text),
            });
        }

        let response: Response<Q::ResponseData> = serde_json::from_str(&response_text)
            .map_err(|e| {
                warn!(
                    error = %e,
                    body = %excerpt(&response_text),
                    "Failed to parse catalog GraphQL response"
                );
                CatalogError::Parse(e)
            })?;

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            debug!(errors = ?errors, "GraphQL errors in response");
            return Err(CatalogError::GraphQL(
                errors.into_iter().map(GraphQLError::from).collect(),
            ));
        }

        response.data.ok_or_else(|| {
            CatalogError::GraphQL(vec![GraphQLError {
                message: "No data in response".to_string(),
                path: Vec::new(),
            }])
        })
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Fetch all categories. Never fails: any error yields an empty list.
    #[instrument(skip(self))]
    pub async fn fetch_categories(&self) -> Vec<Category> {
        let Some(endpoint) = self.endpoint() else {
            return Vec::new();
        };

        if let Some(CacheValue::Categories(categories)) =
            self.inner.cache.get(&CacheKey::Categories).await
        {
            debug!("Cache hit for categories");
            return categories;
        }

        match self
            .execute::<GetCategories>(endpoint, get_categories::Variables)
            .await
        {
            Ok(data) => {
                let categories: Vec<Category> = data
                    .collections
                    .items
                    .into_iter()
                    .map(convert_category)
                    .collect();
                self.inner
                    .cache
                    .insert(
                        CacheKey::Categories,
                        CacheValue::Categories(categories.clone()),
                    )
                    .await;
                categories
            }
            Err(e) => {
                warn!(error = %e, "Category fetch failed; rendering without categories");
                Vec::new()
            }
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Fetch the whole catalog, page by page.
    ///
    /// Pages are requested sequentially with `skip`/`take` until the
    /// reported total is reached or a page comes back empty.
    ///
    /// # Errors
    ///
    /// Returns the first page failure; partial results are discarded.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let Some(endpoint) = self.endpoint() else {
            return Ok(Vec::new());
        };

        if let Some(CacheValue::Products(products)) =
            self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let mut products = Vec::new();
        let mut skip: i64 = 0;
        loop {
            let variables = get_products::Variables {
                skip,
                take: PAGE_SIZE,
            };
            let page = self
                .execute::<GetProducts>(endpoint, variables)
                .await?
                .products;

            let received = page.items.len();
            products.extend(page.items.into_iter().map(convert_product));
            skip = skip.saturating_add(i64::try_from(received).unwrap_or(i64::MAX));

            debug!(received, skip, total = page.total_items, "Fetched product page");
            if received == 0 || skip >= page.total_items {
                break;
            }
        }

        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Fetch a single product by slug.
    ///
    /// Returns `Ok(None)` when the product does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than "not found".
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn fetch_product_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ProductDetail>, CatalogError> {
        let Some(endpoint) = self.endpoint() else {
            return Ok(None);
        };

        let cache_key = CacheKey::Product(slug.to_string());
        if let Some(CacheValue::Product(detail)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(detail.map(|d| *d));
        }

        let variables = get_product_by_slug::Variables {
            slug: slug.to_string(),
        };
        let detail = match self.execute::<GetProductBySlug>(endpoint, variables).await {
            Ok(data) => data.product.map(convert_product_detail),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };

        self.inner
            .cache
            .insert(
                cache_key,
                CacheValue::Product(detail.clone().map(Box::new)),
            )
            .await;

        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_error_formatting() {
        let err = CatalogError::GraphQL(vec![
            GraphQLError {
                message: "Field not found".to_string(),
                path: Vec::new(),
            },
            GraphQLError {
                message: "Invalid ID".to_string(),
                path: vec!["product".to_string()],
            },
        ]);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Field not found; Invalid ID path: product"
        );
    }

    #[test]
    fn test_graphql_error_no_details() {
        let err = CatalogError::GraphQL(vec![GraphQLError {
            message: String::new(),
            path: Vec::new(),
        }]);
        assert_eq!(err.to_string(), "GraphQL errors: [error 1]: (no details)");
        assert_eq!(
            CatalogError::GraphQL(Vec::new()).to_string(),
            "GraphQL errors: (no error details provided)"
        );
    }

    #[test]
    fn test_status_codes() {
        let upstream = CatalogError::Upstream {
            status: 500,
            message: String::new(),
        };
        assert_eq!(upstream.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(CatalogError::Timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            CatalogError::GraphQL(Vec::new()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_user_messages_hide_details() {
        let err = CatalogError::Upstream {
            status: 500,
            message: "stack trace here".to_string(),
        };
        assert!(!err.user_message(Locale::En).contains("stack trace"));
        assert!(CatalogError::Timeout.user_message(Locale::En).contains("expired"));
        assert!(CatalogError::Timeout.user_message(Locale::Fr).contains("expiré"));
    }

    #[test]
    fn test_is_not_found() {
        let err = CatalogError::Upstream {
            status: 404,
            message: String::new(),
        };
        assert!(err.is_not_found());
        assert!(!CatalogError::Timeout.is_not_found());
    }

    #[tokio::test]
    async fn test_unconfigured_client_degrades() {
        let client = CatalogClient::new(&CatalogConfig::default());
        let Ok(client) = client else {
            panic!("client should build");
        };
        assert!(!client.is_configured());
        assert!(client.fetch_categories().await.is_empty());
        assert!(matches!(client.fetch_products().await, Ok(products) if products.is_empty()));
        assert!(matches!(client.fetch_product_by_slug("laptop").await, Ok(None)));
    }
}
