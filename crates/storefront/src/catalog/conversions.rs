//! Conversions from upstream GraphQL shapes to catalog entities.

use vitrine_core::types::{
    Category, CategoryRef, PLACEHOLDER_IMAGE, Product, ProductDetail, Rating, strip_html,
};

use super::queries::{CollectionRefNode, ProductNode, get_categories::CollectionNode};

/// Currency assumed when a product has no variant.
const DEFAULT_CURRENCY: &str = "EUR";

pub fn convert_category(node: CollectionNode) -> Category {
    Category {
        id: node.id,
        name: node.name,
        slug: node.slug,
        description: node.description.filter(|d| !d.trim().is_empty()),
        preview: node.featured_asset.map(|a| a.preview),
    }
}

fn convert_category_ref(node: CollectionRefNode) -> CategoryRef {
    CategoryRef {
        id: node.id,
        name: node.name,
        slug: node.slug,
    }
}

/// Build a listing product. Price, currency and SKU come from the first
/// variant; the rating is synthesized from the id.
pub fn convert_product(node: ProductNode) -> Product {
    let thumbnail = node
        .featured_asset
        .as_ref()
        .or_else(|| node.assets.first())
        .map_or_else(|| PLACEHOLDER_IMAGE.to_string(), |a| a.preview.clone());
    build_product(node, thumbnail).0
}

/// Build a detail product. The gallery falls back to the thumbnail so it
/// is never empty.
pub fn convert_product_detail(node: ProductNode) -> ProductDetail {
    let mut gallery: Vec<String> = node.assets.iter().map(|a| a.preview.clone()).collect();
    let thumbnail = node
        .featured_asset
        .as_ref()
        .map(|a| a.preview.clone())
        .or_else(|| gallery.first().cloned())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    if gallery.is_empty() {
        gallery.push(thumbnail.clone());
    }

    let (product, description_html) = build_product(node, thumbnail);
    ProductDetail {
        product,
        gallery,
        description_html,
    }
}

/// Shared product construction; also returns the raw HTML description.
fn build_product(node: ProductNode, thumbnail: String) -> (Product, String) {
    let rating = Rating::synthesize(&node.id);
    let description_html = node.description.unwrap_or_default();
    let first_variant = node.variants.into_iter().next();

    let (price, currency_code, sku) = first_variant.map_or_else(
        || (0, DEFAULT_CURRENCY.to_string(), String::new()),
        |v| (v.price_with_tax, v.currency_code, v.sku),
    );

    let product = Product {
        id: node.id,
        slug: node.slug,
        name: node.name,
        description: strip_html(&description_html),
        price,
        currency_code,
        thumbnail,
        average_rating: rating.average,
        review_count: rating.count,
        sku,
        categories: node
            .collections
            .into_iter()
            .map(convert_category_ref)
            .collect(),
    };
    (product, description_html)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn node(json: serde_json::Value) -> ProductNode {
        serde_json::from_value(json).unwrap()
    }

    fn full_node() -> ProductNode {
        node(serde_json::json!({
            "id": "14",
            "slug": "tripod",
            "name": "Tripod",
            "description": "<p>Capture <b>vivid</b> photographs.</p>",
            "featuredAsset": {"preview": "https://cdn.example/tripod.jpg"},
            "assets": [
                {"preview": "https://cdn.example/tripod.jpg"},
                {"preview": "https://cdn.example/tripod-2.jpg"}
            ],
            "collections": [{"id": "3", "name": "Camera & Photo", "slug": "camera-photo"}],
            "variants": [
                {"id": "v1", "sku": "B00XI87KV8", "priceWithTax": 1798, "currencyCode": "USD"},
                {"id": "v2", "sku": "OTHER", "priceWithTax": 9999, "currencyCode": "GBP"}
            ]
        }))
    }

    #[test]
    fn test_convert_product_uses_first_variant() {
        let product = convert_product(full_node());
        assert_eq!(product.price, 1798);
        assert_eq!(product.currency_code, "USD");
        assert_eq!(product.sku, "B00XI87KV8");
        assert_eq!(product.thumbnail, "https://cdn.example/tripod.jpg");
        assert_eq!(product.categories[0].slug, "camera-photo");
    }

    #[test]
    fn test_convert_product_strips_html_description() {
        let product = convert_product(full_node());
        assert_eq!(product.description, "Capture vivid photographs.");
    }

    #[test]
    fn test_convert_product_synthesizes_rating() {
        let product = convert_product(full_node());
        let rating = Rating::synthesize("14");
        assert_eq!(product.review_count, rating.count);
        assert!((product.average_rating - rating.average).abs() < f64::EPSILON);
    }

    #[test]
    fn test_convert_product_without_variant_or_asset() {
        let product = convert_product(node(serde_json::json!({
            "id": "9",
            "slug": "bare",
            "name": "Bare"
        })));
        assert_eq!(product.price, 0);
        assert_eq!(product.currency_code, "EUR");
        assert_eq!(product.sku, "");
        assert_eq!(product.thumbnail, PLACEHOLDER_IMAGE);
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_convert_product_detail() {
        let detail = convert_product_detail(full_node());
        assert_eq!(detail.gallery.len(), 2);
        assert_eq!(detail.description_html, "<p>Capture <b>vivid</b> photographs.</p>");
        assert_eq!(detail.product.description, "Capture vivid photographs.");
    }

    #[test]
    fn test_detail_and_listing_agree_on_rating() {
        let listing = convert_product(full_node());
        let detail = convert_product_detail(full_node());
        assert_eq!(listing.review_count, detail.product.review_count);
    }

    #[test]
    fn test_detail_gallery_falls_back_to_thumbnail() {
        let detail = convert_product_detail(node(serde_json::json!({
            "id": "2",
            "slug": "x",
            "name": "X",
            "featuredAsset": {"preview": "https://cdn.example/x.jpg"}
        })));
        assert_eq!(detail.gallery, vec!["https://cdn.example/x.jpg".to_string()]);
    }

    #[test]
    fn test_detail_thumbnail_falls_back_to_first_asset() {
        let detail = convert_product_detail(node(serde_json::json!({
            "id": "2",
            "slug": "x",
            "name": "X",
            "assets": [{"preview": "https://cdn.example/a.jpg"}]
        })));
        assert_eq!(detail.product.thumbnail, "https://cdn.example/a.jpg");
    }

    #[test]
    fn test_detail_without_any_asset_uses_placeholder() {
        let detail = convert_product_detail(node(serde_json::json!({
            "id": "2",
            "slug": "x",
            "name": "X"
        })));
        assert_eq!(detail.product.thumbnail, PLACEHOLDER_IMAGE);
        assert_eq!(detail.gallery, vec![PLACEHOLDER_IMAGE.to_string()]);
    }

    #[test]
    fn test_convert_category() {
        let node: CollectionNode = serde_json::from_value(serde_json::json!({
            "id": "2",
            "name": "Electronics",
            "slug": "electronics",
            "description": "  ",
            "featuredAsset": {"preview": "https://cdn.example/e.jpg"}
        }))
        .unwrap();
        let category = convert_category(node);
        assert_eq!(category.slug, "electronics");
        assert!(category.description.is_none());
        assert_eq!(category.preview.as_deref(), Some("https://cdn.example/e.jpg"));
    }
}
