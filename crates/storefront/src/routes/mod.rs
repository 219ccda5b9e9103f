//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Health check
//! GET  /sitemap.xml                - Sitemap
//! GET  /                           - Redirect to /fr
//!
//! # Legacy unprefixed paths (redirect to the default locale)
//! GET  /catalogue
//! GET  /cart
//! GET  /product/{slug}
//!
//! # Pages
//! GET  /{locale}                   - Home: categories and product grid
//! GET  /{locale}/catalogue         - Product grid with filters
//! GET  /{locale}/product/{slug}    - Product detail
//!
//! # Cart (form POSTs, answered with 303)
//! GET  /{locale}/cart              - Cart page
//! POST /{locale}/cart/add          - slug, quantity, return_to
//! POST /{locale}/cart/update       - product_id, quantity
//! POST /{locale}/cart/remove       - product_id
//! POST /{locale}/cart/clear
//! ```

pub mod cart;
pub mod catalog;
pub mod products;
pub mod sitemap;

use axum::{
    Router,
    extract::Path,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use vitrine_core::Locale;

use crate::error::NotFoundPage;
use crate::i18n;
use crate::middleware::locale_from_path;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/{locale}/cart", get(cart::show))
        .route("/{locale}/cart/add", post(cart::add))
        .route("/{locale}/cart/update", post(cart::update))
        .route("/{locale}/cart/remove", post(cart::remove))
        .route("/{locale}/cart/clear", post(cart::clear))
}

/// Redirects from paths that predate the locale prefix.
pub fn legacy_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(redirect_to_default_locale))
        .route("/catalogue", get(redirect_to_default_locale))
        .route("/cart", get(redirect_to_default_locale))
        .route("/product/{slug}", get(legacy_product))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sitemap.xml", get(sitemap::sitemap))
        .merge(legacy_routes())
        .route("/{locale}", get(catalog::home))
        .route("/{locale}/catalogue", get(catalog::catalogue))
        .route("/{locale}/product/{slug}", get(products::show))
        .merge(cart_routes())
        .fallback(not_found)
}

/// Same path and query under the default locale.
async fn redirect_to_default_locale(uri: Uri) -> Redirect {
    let mut target = i18n::localized_path(Locale::default(), uri.path());
    if let Some(query) = uri.query().filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    Redirect::permanent(&target)
}

async fn legacy_product(Path(slug): Path<String>, uri: Uri) -> Redirect {
    let mut target = i18n::localized_path(Locale::default(), &format!("/product/{slug}"));
    if let Some(query) = uri.query().filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    Redirect::permanent(&target)
}

/// 404 page in the locale suggested by the path.
async fn not_found(uri: Uri) -> Response {
    let locale = locale_from_path(uri.path());
    (
        axum::http::StatusCode::NOT_FOUND,
        NotFoundPage::page(locale, &uri),
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[tokio::test]
    async fn test_redirect_keeps_query() {
        let uri: Uri = "/catalogue?sort=asc".parse().unwrap();
        let response = redirect_to_default_locale(uri).await.into_response();
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()["location"], "/fr/catalogue?sort=asc");
    }

    #[tokio::test]
    async fn test_root_redirects_to_default_locale() {
        let uri: Uri = "/".parse().unwrap();
        let response = redirect_to_default_locale(uri).await.into_response();
        assert_eq!(response.headers()["location"], "/fr");
    }
}
