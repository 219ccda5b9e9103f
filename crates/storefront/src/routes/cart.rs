//! Cart route handlers.
//!
//! The cart is stored in the visitor's session (see [`crate::cart`]).
//! Mutations are plain form POSTs answered with a 303 back to the page the
//! form came from, so a refresh never repeats them.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{instrument, warn};
use vitrine_core::translation::translate_product;
use vitrine_core::{Cart, CartItem, Locale, format_price_eur};

use crate::filters;
use crate::i18n::{self, Messages};
use crate::layout::PageContext;
use crate::middleware::{RequestLocale, SessionCart};
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    pub href: String,
    pub thumbnail: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
}

impl CartLineView {
    #[must_use]
    pub fn new(item: &CartItem, locale: Locale) -> Self {
        let name = if locale.translates_catalog() {
            translate_product(&item.product.name)
        } else {
            item.product.name.clone()
        };
        Self {
            product_id: item.product_id.clone(),
            name,
            href: i18n::localized_path(locale, &format!("/product/{}", item.product.slug)),
            thumbnail: item.product.thumbnail.clone(),
            quantity: item.quantity,
            unit_price: format_price_eur(item.unit_price()),
            line_price: format_price_eur(item.line_total()),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub item_count: u64,
}

impl CartView {
    #[must_use]
    pub fn new(cart: &Cart, locale: Locale) -> Self {
        let summary = cart.summary();
        Self {
            lines: cart
                .items()
                .iter()
                .map(|item| CartLineView::new(item, locale))
                .collect(),
            total: summary.total_display(),
            item_count: summary.total_items,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Form actions posted from the cart page.
#[derive(Debug, Clone)]
pub struct CartActions {
    pub update: String,
    pub remove: String,
    pub clear: String,
}

impl CartActions {
    fn new(locale: Locale) -> Self {
        Self {
            update: i18n::localized_path(locale, "/cart/update"),
            remove: i18n::localized_path(locale, "/cart/remove"),
            clear: i18n::localized_path(locale, "/cart/clear"),
        }
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartShowTemplate {
    pub page: PageContext,
    pub cart: CartView,
    pub actions: CartActions,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub slug: String,
    /// Raw field; validated by the cart.
    pub quantity: Option<String>,
    /// Page to return to after adding.
    pub return_to: Option<String>,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Parse a quantity field. `None` for anything that is not an integer.
fn parse_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Local path to redirect to, falling back to the cart page.
///
/// Only same-site paths under the current locale are accepted.
fn return_target(return_to: Option<&str>, locale: Locale) -> String {
    let prefix = i18n::localized_path(locale, "/");
    return_to
        .filter(|target| {
            !target.starts_with("//")
                && (*target == prefix
                    || target.starts_with(&format!("{prefix}/"))
                    || target.starts_with(&format!("{prefix}?")))
        })
        .map_or_else(|| i18n::localized_path(locale, "/cart"), String::from)
}

fn cart_page(locale: Locale) -> Redirect {
    Redirect::to(&i18n::localized_path(locale, "/cart"))
}

/// Display cart page.
#[instrument(skip_all, fields(locale = %locale))]
pub async fn show(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    SessionCart(store): SessionCart,
    uri: Uri,
) -> impl IntoResponse {
    let t = Messages::for_locale(locale);
    let page = PageContext::new(locale, &uri, t.cart_title)
        .with_cart_count(store.cart().total_items())
        .with_analytics(&state.config().analytics);

    CartShowTemplate {
        page,
        cart: CartView::new(store.cart(), locale),
        actions: CartActions::new(locale),
    }
}

/// Add a product to the cart by slug.
///
/// The product is looked up upstream so the cart stores a full snapshot.
/// An unknown product or invalid quantity leaves the cart unchanged.
#[instrument(skip_all, fields(locale = %locale, slug = %form.slug))]
pub async fn add(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    SessionCart(mut store): SessionCart,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let target = return_target(form.return_to.as_deref(), locale);

    let Some(quantity) = form.quantity.as_deref().map_or(Some(1), parse_quantity) else {
        warn!(quantity = ?form.quantity, "Rejected add to cart: quantity is not an integer");
        return Redirect::to(&target).into_response();
    };

    match state.catalog().fetch_product_by_slug(&form.slug).await {
        Ok(Some(detail)) => {
            // Validation failures are logged by the store.
            let _ = store.add_product(&detail.product, quantity).await;
        }
        Ok(None) => warn!("Rejected add to cart: unknown product"),
        Err(e) => warn!(error = %e, "Rejected add to cart: product lookup failed"),
    }

    Redirect::to(&target).into_response()
}

/// Set a line's quantity. A non-positive or non-numeric quantity removes
/// the line.
#[instrument(skip_all, fields(locale = %locale, product_id = %form.product_id))]
pub async fn update(
    RequestLocale(locale): RequestLocale,
    SessionCart(mut store): SessionCart,
    Form(form): Form<UpdateCartForm>,
) -> Redirect {
    let quantity = parse_quantity(&form.quantity).unwrap_or(0);
    store.set_quantity(&form.product_id, quantity).await;
    cart_page(locale)
}

/// Remove a line from the cart.
#[instrument(skip_all, fields(locale = %locale, product_id = %form.product_id))]
pub async fn remove(
    RequestLocale(locale): RequestLocale,
    SessionCart(mut store): SessionCart,
    Form(form): Form<RemoveFromCartForm>,
) -> Redirect {
    store.remove_product(&form.product_id).await;
    cart_page(locale)
}

/// Empty the cart.
#[instrument(skip_all, fields(locale = %locale))]
pub async fn clear(
    RequestLocale(locale): RequestLocale,
    SessionCart(mut store): SessionCart,
) -> Redirect {
    store.clear().await;
    cart_page(locale)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use vitrine_core::Product;

    use super::*;

    fn product(id: &str, price: i64, currency: &str) -> Product {
        Product {
            id: id.to_string(),
            slug: format!("product-{id}"),
            name: "Laptop".to_string(),
            description: String::new(),
            price,
            currency_code: currency.to_string(),
            thumbnail: String::new(),
            average_rating: 4.0,
            review_count: 5,
            sku: String::new(),
            categories: Vec::new(),
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity(" 2 "), Some(2));
        assert_eq!(parse_quantity("-1"), Some(-1));
        assert_eq!(parse_quantity("1.5"), None);
        assert_eq!(parse_quantity("abc"), None);
    }

    #[test]
    fn test_return_target_accepts_local_paths() {
        assert_eq!(
            return_target(Some("/fr/product/laptop?sort=asc"), Locale::Fr),
            "/fr/product/laptop?sort=asc"
        );
        assert_eq!(return_target(Some("/fr"), Locale::Fr), "/fr");
    }

    #[test]
    fn test_return_target_rejects_foreign_targets() {
        assert_eq!(return_target(Some("https://evil.example"), Locale::Fr), "/fr/cart");
        assert_eq!(return_target(Some("//evil.example"), Locale::Fr), "/fr/cart");
        assert_eq!(return_target(Some("/en/cart"), Locale::Fr), "/fr/cart");
        assert_eq!(return_target(Some("/french"), Locale::Fr), "/fr/cart");
        assert_eq!(return_target(None, Locale::En), "/en/cart");
    }

    #[test]
    fn test_cart_view_totals_in_eur() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 100_000, "USD"), 2).unwrap();
        cart.add_product(&product("2", 1_000, "EUR"), 1).unwrap();

        let view = CartView::new(&cart, Locale::En);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.total, "1850.00 €");
        assert_eq!(view.lines[0].unit_price, "920.00 €");
        assert_eq!(view.lines[0].line_price, "1840.00 €");
        assert_eq!(view.lines[0].href, "/en/product/product-1");
        assert!(!view.is_empty());
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::new(&Cart::new(), Locale::Fr);
        assert!(view.is_empty());
        assert_eq!(view.total, "0.00 €");
    }
}
