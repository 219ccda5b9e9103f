//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{instrument, warn};
use vitrine_core::translation::localize_product_detail;
use vitrine_core::{CatalogQuery, Locale, ProductDetail, convert_and_format_price};

use crate::error::{ErrorPage, NotFoundPage};
use crate::filters;
use crate::i18n::{self, Messages};
use crate::layout::PageContext;
use crate::middleware::{RequestLocale, SessionCart};
use crate::state::AppState;

/// `/{locale}/product/{slug}` path parameters.
#[derive(Debug, Deserialize)]
pub struct ProductPath {
    pub slug: String,
}

/// Category link on the detail page.
#[derive(Debug, Clone)]
pub struct CategoryLinkView {
    pub name: String,
    pub href: String,
}

/// Product detail display data for templates.
#[derive(Debug, Clone)]
pub struct ProductDetailView {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub sku: String,
    pub average_rating: f64,
    pub rating_label: String,
    pub review_count: u32,
    pub gallery: Vec<String>,
    pub categories: Vec<CategoryLinkView>,
}

impl ProductDetailView {
    /// View of a detail already localized for `locale`.
    ///
    /// The description is shown as plain text in every locale.
    #[must_use]
    pub fn new(detail: &ProductDetail, locale: Locale) -> Self {
        let product = &detail.product;
        let catalogue = i18n::localized_path(locale, "/catalogue");
        Self {
            id: product.id.clone(),
            slug: product.slug.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: convert_and_format_price(product.price, &product.currency_code),
            sku: product.sku.clone(),
            average_rating: product.average_rating,
            rating_label: format!("{:.1}", product.average_rating),
            review_count: product.review_count,
            gallery: detail.gallery.clone(),
            categories: product
                .categories
                .iter()
                .map(|c| CategoryLinkView {
                    name: c.name.clone(),
                    href: CatalogQuery::default().with_category(&c.slug).href(&catalogue),
                })
                .collect(),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub page: PageContext,
    pub product: ProductDetailView,
    pub in_cart: u32,
    pub add_action: String,
    pub return_to: String,
    pub back_href: String,
}

/// Display product detail page.
///
/// The query string carries the catalogue filters the shopper came from;
/// the back link restores them.
#[instrument(skip_all, fields(locale = %locale, slug = %path.slug))]
pub async fn show(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Path(path): Path<ProductPath>,
    SessionCart(store): SessionCart,
    uri: Uri,
) -> Response {
    let t = Messages::for_locale(locale);
    let page = PageContext::new(locale, &uri, t.nav_catalogue)
        .with_cart_count(store.cart().total_items())
        .with_analytics(&state.config().analytics);

    let detail = match state.catalog().fetch_product_by_slug(&path.slug).await {
        Ok(Some(detail)) => detail,
        Ok(None) => {
            return (StatusCode::NOT_FOUND, NotFoundPage::product(page)).into_response();
        }
        Err(e) if e.is_not_found() => {
            return (StatusCode::NOT_FOUND, NotFoundPage::product(page)).into_response();
        }
        Err(e) => {
            warn!(error = %e, "Product detail unavailable");
            let error_page = ErrorPage {
                page,
                message: e.user_message(locale).to_string(),
                retry_href: Some(uri.to_string()),
            };
            return (e.status_code(), error_page).into_response();
        }
    };

    let detail = if locale.translates_catalog() {
        localize_product_detail(&detail)
    } else {
        detail
    };

    let filters_state = CatalogQuery::from_query_string(uri.query().unwrap_or_default());
    let mut page = page;
    page.title.clone_from(&detail.product.name);

    let template = ProductTemplate {
        in_cart: store.cart().quantity_of(&detail.product.id),
        add_action: i18n::localized_path(locale, "/cart/add"),
        return_to: uri.to_string(),
        back_href: filters_state.href(&i18n::localized_path(locale, "/catalogue")),
        product: ProductDetailView::new(&detail, locale),
        page,
    };
    template.into_response()
}

#[cfg(test)]
mod tests {
    use vitrine_core::{CategoryRef, Product};

    use super::*;

    fn detail() -> ProductDetail {
        ProductDetail {
            product: Product {
                id: "7".to_string(),
                slug: "tripod".to_string(),
                name: "Tripod".to_string(),
                description: "A sturdy tripod.".to_string(),
                price: 1798,
                currency_code: "USD".to_string(),
                thumbnail: "https://cdn.example/t.jpg".to_string(),
                average_rating: 3.8,
                review_count: 12,
                sku: "TRI-1".to_string(),
                categories: vec![CategoryRef {
                    id: "3".to_string(),
                    name: "Camera & Photo".to_string(),
                    slug: "camera-photo".to_string(),
                }],
            },
            gallery: vec!["https://cdn.example/t.jpg".to_string()],
            description_html: "<p>A sturdy tripod.</p>".to_string(),
        }
    }

    #[test]
    fn test_detail_view_converts_price_to_eur() {
        let view = ProductDetailView::new(&detail(), Locale::En);
        // 1798 USD cents * 0.92
        assert_eq!(view.price, "16.54 €");
        assert_eq!(view.rating_label, "3.8");
        assert_eq!(view.description, "A sturdy tripod.");
    }

    #[test]
    fn test_detail_view_category_links() {
        let view = ProductDetailView::new(&detail(), Locale::Fr);
        assert_eq!(view.categories[0].href, "/fr/catalogue?category=camera-photo");
    }
}
