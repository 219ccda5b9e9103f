//! Home and catalogue route handlers.
//!
//! Filter state lives in the query string. The filter form submits with
//! GET; a submitted (non-canonical) query is answered with a 303 to its
//! canonical URL so every view has exactly one address.

use std::collections::BTreeMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use tracing::{instrument, warn};
use vitrine_core::translation::{localize_category, localize_product, translate_category};
use vitrine_core::{
    Cart, CatalogQuery, Category, Locale, Product, SortOrder, compute_view,
    convert_and_format_price,
};

use crate::catalog::CatalogError;
use crate::filters;
use crate::i18n::{self, Messages};
use crate::layout::PageContext;
use crate::middleware::{RequestLocale, SessionCart};
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub href: String,
    pub name: String,
    pub thumbnail: String,
    pub price: String,
    pub average_rating: f64,
    pub rating_label: String,
    pub review_count: u32,
    pub in_cart: u32,
}

impl ProductCardView {
    /// Card for a product already localized for `locale`. The link keeps
    /// the current filters so the detail page can link back to them.
    #[must_use]
    pub fn new(product: &Product, locale: Locale, query: &CatalogQuery, cart: &Cart) -> Self {
        let path = i18n::localized_path(locale, &format!("/product/{}", product.slug));
        Self {
            href: query.href(&path),
            name: product.name.clone(),
            thumbnail: product.thumbnail.clone(),
            price: convert_and_format_price(product.price, &product.currency_code),
            average_rating: product.average_rating,
            rating_label: format!("{:.1}", product.average_rating),
            review_count: product.review_count,
            in_cart: cart.quantity_of(&product.id),
        }
    }
}

/// Category tile display data for templates.
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub name: String,
    pub description: Option<String>,
    pub preview: Option<String>,
    pub href: String,
}

impl CategoryView {
    #[must_use]
    pub fn new(category: &Category, locale: Locale) -> Self {
        let catalogue = i18n::localized_path(locale, "/catalogue");
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            preview: category.preview.clone(),
            href: CatalogQuery::default()
                .with_category(&category.slug)
                .href(&catalogue),
        }
    }
}

/// `<option>` of a filter `<select>`.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Filter form state.
#[derive(Debug, Clone)]
pub struct FilterView {
    pub action: String,
    pub search: String,
    pub category_options: Vec<OptionView>,
    pub sort_options: Vec<OptionView>,
    pub is_filtered: bool,
}

/// Error panel shown in place of the product grid.
#[derive(Debug, Clone)]
pub struct ErrorPanel {
    pub message: &'static str,
    pub retry_href: String,
}

/// Filter form, result count and product grid.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub filters: FilterView,
    pub products: Vec<ProductCardView>,
    pub result_count: String,
    pub error: Option<ErrorPanel>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    pub categories: Vec<CategoryView>,
    pub listing: ListingView,
}

/// Catalogue page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalogue.html")]
pub struct CatalogueTemplate {
    pub page: PageContext,
    pub listing: ListingView,
}

/// Redirect target for a non-canonical filter query, if any.
#[must_use]
pub fn canonical_redirect(uri: &Uri) -> Option<Response> {
    let raw = uri.query()?;
    if CatalogQuery::is_canonical(raw) {
        return None;
    }
    let target = CatalogQuery::from_query_string(raw).href(uri.path());
    Some(Redirect::to(&target).into_response())
}

/// Apply the translation overlay when the locale calls for it.
#[must_use]
pub fn localize_products(products: Vec<Product>, locale: Locale) -> Vec<Product> {
    if locale.translates_catalog() {
        products.iter().map(localize_product).collect()
    } else {
        products
    }
}

fn localize_categories(categories: &[Category], locale: Locale) -> Vec<CategoryView> {
    categories
        .iter()
        .map(|c| {
            if locale.translates_catalog() {
                CategoryView::new(&localize_category(c), locale)
            } else {
                CategoryView::new(c, locale)
            }
        })
        .collect()
}

/// Category choices found on the upstream products, sorted by the label
/// shown for `locale`.
fn category_options(
    products: &[Product],
    query: &CatalogQuery,
    locale: Locale,
    t: &Messages,
) -> Vec<OptionView> {
    let mut by_slug: BTreeMap<&str, &str> = BTreeMap::new();
    for category in products.iter().flat_map(|p| &p.categories) {
        by_slug
            .entry(category.slug.as_str())
            .or_insert(category.name.as_str());
    }
    if let Some(selected) = query.category.as_deref() {
        by_slug.entry(selected).or_insert(selected);
    }

    let mut named: Vec<(&str, String)> = by_slug
        .into_iter()
        .map(|(slug, name)| {
            let label = if locale.translates_catalog() {
                translate_category(name)
            } else {
                name.to_string()
            };
            (slug, label)
        })
        .collect();
    named.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    let selected = query.category_value();
    let mut options = vec![OptionView {
        value: vitrine_core::filter::ALL_CATEGORIES.to_string(),
        label: t.all_categories.to_string(),
        selected: selected == vitrine_core::filter::ALL_CATEGORIES,
    }];
    options.extend(named.into_iter().map(|(slug, label)| OptionView {
        value: slug.to_string(),
        label,
        selected: selected == slug,
    }));
    options
}

fn sort_options(query: &CatalogQuery, t: &Messages) -> Vec<OptionView> {
    [
        (SortOrder::None, t.sort_none),
        (SortOrder::Asc, t.sort_asc),
        (SortOrder::Desc, t.sort_desc),
    ]
    .into_iter()
    .map(|(order, label)| OptionView {
        value: order.as_str().to_string(),
        label: label.to_string(),
        selected: query.sort == order,
    })
    .collect()
}

/// Build the listing for a fetched product list.
///
/// Search and category filters run on the upstream text; only the visible
/// cards are translated. Returns the status the page should carry: the upstream error's status
/// when products could not be loaded.
pub fn build_listing(
    locale: Locale,
    uri: &Uri,
    query: &CatalogQuery,
    products: Result<Vec<Product>, CatalogError>,
    cart: &Cart,
) -> (StatusCode, ListingView) {
    let t = Messages::for_locale(locale);
    let (status, products, error) = match products {
        Ok(products) => (StatusCode::OK, products, None),
        Err(e) => {
            warn!(error = %e, "Product listing unavailable");
            let panel = ErrorPanel {
                message: e.user_message(locale),
                retry_href: uri.to_string(),
            };
            (e.status_code(), Vec::new(), Some(panel))
        }
    };

    let visible = localize_products(compute_view(&products, query), locale);
    let filters = FilterView {
        action: uri.path().to_string(),
        search: query.search.clone(),
        category_options: category_options(&products, query, locale, t),
        sort_options: sort_options(query, t),
        is_filtered: *query != CatalogQuery::default(),
    };

    let listing = ListingView {
        filters,
        result_count: t.product_count(visible.len()),
        products: visible
            .iter()
            .map(|p| ProductCardView::new(p, locale, query, cart))
            .collect(),
        error,
    };
    (status, listing)
}

/// Display the home page: category tiles and the filtered product grid.
#[instrument(skip_all, fields(locale = %locale))]
pub async fn home(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    SessionCart(store): SessionCart,
    uri: Uri,
) -> Response {
    if let Some(redirect) = canonical_redirect(&uri) {
        return redirect;
    }
    let query = CatalogQuery::from_query_string(uri.query().unwrap_or_default());

    let catalog = state.catalog();
    let (categories, products) =
        tokio::join!(catalog.fetch_categories(), catalog.fetch_products());

    let t = Messages::for_locale(locale);
    let page = PageContext::new(locale, &uri, t.nav_home)
        .with_cart_count(store.cart().total_items())
        .with_analytics(&state.config().analytics);
    let (status, listing) = build_listing(locale, &uri, &query, products, store.cart());

    let template = HomeTemplate {
        page,
        categories: localize_categories(&categories, locale),
        listing,
    };
    (status, template).into_response()
}

/// Display the catalogue page: the filtered product grid only.
#[instrument(skip_all, fields(locale = %locale))]
pub async fn catalogue(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    SessionCart(store): SessionCart,
    uri: Uri,
) -> Response {
    if let Some(redirect) = canonical_redirect(&uri) {
        return redirect;
    }
    let query = CatalogQuery::from_query_string(uri.query().unwrap_or_default());

    let products = state.catalog().fetch_products().await;

    let t = Messages::for_locale(locale);
    let page = PageContext::new(locale, &uri, t.catalogue_title)
        .with_cart_count(store.cart().total_items())
        .with_analytics(&state.config().analytics);
    let (status, listing) = build_listing(locale, &uri, &query, products, store.cart());

    (status, CatalogueTemplate { page, listing }).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use vitrine_core::CategoryRef;

    use super::*;

    fn product(id: &str, name: &str, price: i64, category: &str) -> Product {
        Product {
            id: id.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            description: String::new(),
            price,
            currency_code: "EUR".to_string(),
            thumbnail: "/static/placeholder.svg".to_string(),
            average_rating: 4.2,
            review_count: 12,
            sku: String::new(),
            categories: vec![CategoryRef {
                id: category.to_string(),
                name: category.to_uppercase(),
                slug: category.to_string(),
            }],
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Laptop", 120_000, "computers"),
            product("2", "Tablet", 50_000, "electronics"),
            product("3", "Wireless Mouse", 2_500, "computers"),
        ]
    }

    #[test]
    fn test_canonical_redirect() {
        let uri: Uri = "/fr/catalogue?search=&category=all&sort=none".parse().unwrap();
        let response = canonical_redirect(&uri).unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/fr/catalogue");

        let uri: Uri = "/fr/catalogue?sort=asc&search=lap".parse().unwrap();
        let response = canonical_redirect(&uri).unwrap();
        assert_eq!(response.headers()["location"], "/fr/catalogue?search=lap&sort=asc");
    }

    #[test]
    fn test_canonical_query_is_served() {
        let uri: Uri = "/fr/catalogue?search=lap&sort=asc".parse().unwrap();
        assert!(canonical_redirect(&uri).is_none());

        let uri: Uri = "/fr/catalogue".parse().unwrap();
        assert!(canonical_redirect(&uri).is_none());
    }

    #[test]
    fn test_build_listing_filters_and_counts() {
        let uri: Uri = "/en/catalogue?category=computers&sort=asc".parse().unwrap();
        let query = CatalogQuery::from_query_string(uri.query().unwrap());
        let (status, listing) =
            build_listing(Locale::En, &uri, &query, Ok(catalog()), &Cart::new());

        assert_eq!(status, StatusCode::OK);
        assert_eq!(listing.result_count, "2 products");
        let names: Vec<&str> = listing.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Wireless Mouse", "Laptop"]);
        assert_eq!(
            listing.products[0].href,
            "/en/product/wireless-mouse?category=computers&sort=asc"
        );
        assert!(listing.filters.is_filtered);
    }

    #[test]
    fn test_build_listing_options() {
        let uri: Uri = "/en/catalogue?category=electronics".parse().unwrap();
        let query = CatalogQuery::from_query_string(uri.query().unwrap());
        let (_, listing) = build_listing(Locale::En, &uri, &query, Ok(catalog()), &Cart::new());

        let values: Vec<&str> = listing
            .filters
            .category_options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["all", "computers", "electronics"]);
        let selected: Vec<&str> = listing
            .filters
            .category_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["electronics"]);
        assert!(listing.filters.sort_options[0].selected);
    }

    #[test]
    fn test_build_listing_error_panel() {
        let uri: Uri = "/fr/catalogue".parse().unwrap();
        let (status, listing) = build_listing(
            Locale::Fr,
            &uri,
            &CatalogQuery::default(),
            Err(CatalogError::Timeout),
            &Cart::new(),
        );

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert!(listing.products.is_empty());
        let panel = listing.error.unwrap();
        assert_eq!(panel.retry_href, "/fr/catalogue");
    }

    #[test]
    fn test_french_listing_translates_names() {
        let uri: Uri = "/fr".parse().unwrap();
        let products = vec![product("1", "Laptop", 120_000, "computers")];
        let (_, listing) = build_listing(
            Locale::Fr,
            &uri,
            &CatalogQuery::default(),
            Ok(products),
            &Cart::new(),
        );
        assert_eq!(
            listing.products[0].name,
            vitrine_core::translation::translate_product("Laptop")
        );
    }

    #[test]
    fn test_french_search_matches_upstream_name() {
        let uri: Uri = "/fr?search=laptop".parse().unwrap();
        let query = CatalogQuery::from_query_string(uri.query().unwrap());
        let products = vec![
            product("1", "Laptop", 120_000, "computers"),
            product("2", "Tablet", 50_000, "electronics"),
        ];
        let (_, listing) = build_listing(Locale::Fr, &uri, &query, Ok(products), &Cart::new());

        assert_eq!(listing.products.len(), 1);
        assert_eq!(
            listing.products[0].name,
            vitrine_core::translation::translate_product("Laptop")
        );
        assert_eq!(listing.result_count, Messages::for_locale(Locale::Fr).product_count(1));
    }

    #[test]
    fn test_french_category_options_are_translated() {
        let uri: Uri = "/fr/catalogue".parse().unwrap();
        let mut laptop = product("1", "Laptop", 120_000, "computers");
        laptop.categories[0].name = "Computers".to_string();
        let (_, listing) = build_listing(
            Locale::Fr,
            &uri,
            &CatalogQuery::default(),
            Ok(vec![laptop]),
            &Cart::new(),
        );

        let labels: Vec<&str> = listing
            .filters
            .category_options
            .iter()
            .skip(1)
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Ordinateurs"]);
    }

    #[test]
    fn test_card_shows_cart_quantity_and_price() {
        let mut cart = Cart::new();
        let laptop = product("1", "Laptop", 120_000, "computers");
        cart.add_product(&laptop, 2).unwrap();

        let card = ProductCardView::new(&laptop, Locale::En, &CatalogQuery::default(), &cart);
        assert_eq!(card.in_cart, 2);
        assert_eq!(card.price, "1200.00 €");
        assert_eq!(card.rating_label, "4.2");
        assert_eq!(card.href, "/en/product/laptop");
    }

    #[test]
    fn test_category_view_links_to_filtered_catalogue() {
        let category = Category {
            id: "2".to_string(),
            name: "Electronics".to_string(),
            slug: "electronics".to_string(),
            description: None,
            preview: None,
        };
        let view = CategoryView::new(&category, Locale::Fr);
        assert_eq!(view.href, "/fr/catalogue?category=electronics");
    }
}
