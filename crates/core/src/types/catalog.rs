//! Catalog entities as the storefront sees them.
//!
//! These are normalized shapes built from upstream GraphQL responses. They
//! are immutable once fetched; identity is the upstream `id`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::price::Price;

/// Thumbnail used when a product has no asset.
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

static HTML_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new("<[^>]*>").ok());

/// Remove HTML tags (`<...>`) from a string. Entities are left as-is.
#[must_use]
pub fn strip_html(text: &str) -> String {
    match HTML_TAG.as_ref() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

/// A product category (upstream "collection").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Preview URL of the featured asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Denormalized category reference embedded in a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// A product in the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    /// Price of the first variant, tax included, in minor units.
    pub price: i64,
    pub currency_code: String,
    pub thumbnail: String,
    pub average_rating: f64,
    pub review_count: u32,
    pub sku: String,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
}

impl Product {
    /// The product price with its currency.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::new(self.price, self.currency_code.clone())
    }

    /// Price converted to EUR minor units.
    #[must_use]
    pub fn price_eur(&self) -> i64 {
        self.price().to_eur()
    }

    /// Whether the product belongs to the category with this slug.
    #[must_use]
    pub fn in_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| c.slug == slug)
    }
}

/// A product with the extra data shown on its detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    /// Asset preview URLs; never empty (falls back to the thumbnail).
    pub gallery: Vec<String>,
    pub description_html: String,
}

/// Review summary shown on product cards.
///
/// The upstream API has no review data, so these values are derived from
/// the numeric product id. They are placeholders: the same id always yields
/// the same rating, on listing and detail pages alike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    /// Between 3.5 and 4.9, one decimal.
    pub average: f64,
    /// Between 5 and 204.
    pub count: u32,
}

impl Rating {
    /// Derive the placeholder rating for a product id.
    #[must_use]
    pub fn synthesize(product_id: &str) -> Self {
        let seed = numeric_seed(product_id);
        // Both moduli keep the values well inside u32 / f64 precision.
        let count = u32::try_from(seed % 200 + 5).unwrap_or(5);
        let tenths = u32::try_from(seed % 15).unwrap_or(0);
        let average = f64::from(35 + tenths) / 10.0;
        Self { average, count }
    }
}

/// Leading ASCII digits of an id as an integer, 0 when there are none.
fn numeric_seed(id: &str) -> u64 {
    let digits: String = id
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return 0;
    }
    // Ids longer than u64 saturate rather than fall back to 0.
    digits.parse().unwrap_or(u64::MAX)
}
