//! Cart state machine.
//!
//! A [`Cart`] is an ordered list of [`CartItem`]s with at most one item per
//! product id and every quantity at least 1. Totals are derived on read and
//! never stored. The whole item list round-trips through a JSON snapshot
//! ([`Cart::to_snapshot`] / [`Cart::from_snapshot`]) so a storage layer can
//! persist it after every mutation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::types::{Product, convert_to_eur, format_price_eur};

/// Errors raised by cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("product has no valid id")]
    InvalidProduct,

    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("corrupt cart snapshot: {0}")]
    CorruptSnapshot(String),
}

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    /// Copy of the product taken when it was first added.
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Line total in EUR minor units.
    #[must_use]
    pub fn line_total(&self) -> i64 {
        convert_to_eur(self.product.price, &self.product.currency_code)
            .saturating_mul(i64::from(self.quantity))
    }

    /// Unit price in EUR minor units.
    #[must_use]
    pub fn unit_price(&self) -> i64 {
        self.product.price_eur()
    }
}

/// Derived cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Number of distinct products.
    pub lines: usize,
    /// Sum of quantities.
    pub total_items: u64,
    /// Sum of line totals in EUR minor units.
    pub total_price: i64,
}

impl CartSummary {
    /// Total formatted for display.
    #[must_use]
    pub fn total_display(&self) -> String {
        format_price_eur(self.total_price)
    }
}

/// The cart. See the module docs for its invariants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add `quantity` units of a product.
    ///
    /// An existing line is incremented; otherwise a new line is appended
    /// with a copy of the product.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidProduct`] for a blank id and
    /// [`CartError::InvalidQuantity`] for a quantity below 1. The cart is
    /// left unchanged in both cases.
    pub fn add_product(&mut self, product: &Product, quantity: i64) -> Result<(), CartError> {
        if product.id.trim().is_empty() {
            return Err(CartError::InvalidProduct);
        }
        let quantity = positive_quantity(quantity)?;

        match self.position(&product.id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(quantity);
            }
            None => self.items.push(CartItem {
                product_id: product.id.clone(),
                product: product.clone(),
                quantity,
            }),
        }
        Ok(())
    }

    /// Remove a product's line. Returns whether a line was removed.
    pub fn remove_product(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        self.items.len() != before
    }

    /// Replace a line's quantity. A quantity below 1 removes the line.
    ///
    /// Returns whether the cart changed. Unknown ids are ignored.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove_product(product_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.position(product_id) {
            Some(index) if self.items[index].quantity != quantity => {
                self.items[index].quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of line totals, each converted to EUR before summing.
    #[must_use]
    pub fn total_price(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.line_total()))
    }

    /// Quantity of a product, 0 when absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.position(product_id)
            .map_or(0, |index| self.items[index].quantity)
    }

    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.position(product_id).is_some()
    }

    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.items.len(),
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }

    /// Serialize the item list as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CorruptSnapshot`] if serialization fails, which
    /// only happens for non-finite ratings.
    pub fn to_snapshot(&self) -> Result<String, CartError> {
        serde_json::to_string(&self.items).map_err(|e| CartError::CorruptSnapshot(e.to_string()))
    }

    /// Rebuild a cart from a snapshot.
    ///
    /// Each entry is validated on its own: entries without a `productId`,
    /// without a well-formed `product` matching that id, or with a quantity
    /// that is not a positive integer are dropped. Entries sharing an id
    /// are merged by adding their quantities.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CorruptSnapshot`] when the input is not JSON or
    /// not an array.
    pub fn from_snapshot(snapshot: &str) -> Result<Self, CartError> {
        let value: Value =
            serde_json::from_str(snapshot).map_err(|e| CartError::CorruptSnapshot(e.to_string()))?;
        let Value::Array(entries) = value else {
            return Err(CartError::CorruptSnapshot("expected a JSON array".to_string()));
        };

        let mut cart = Self::new();
        for entry in entries {
            let Some(item) = validate_entry(entry) else {
                continue;
            };
            match cart.position(&item.product_id) {
                Some(index) => {
                    let existing = &mut cart.items[index];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        Ok(cart)
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.product_id == product_id)
    }
}

fn positive_quantity(quantity: i64) -> Result<u32, CartError> {
    if quantity < 1 {
        return Err(CartError::InvalidQuantity(quantity));
    }
    u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity(quantity))
}

fn validate_entry(entry: Value) -> Option<CartItem> {
    let Value::Object(mut fields) = entry else {
        return None;
    };

    let product_id = match fields.get("productId") {
        Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
        _ => return None,
    };

    let quantity = fields
        .get("quantity")
        .and_then(Value::as_u64)
        .filter(|q| *q >= 1)
        .and_then(|q| u32::try_from(q).ok())?;

    let product: Product = serde_json::from_value(fields.remove("product")?).ok()?;
    if product.id != product_id {
        return None;
    }

    Some(CartItem {
        product_id,
        product,
        quantity,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::PLACEHOLDER_IMAGE;

    fn product(id: &str, price: i64, currency: &str) -> Product {
        Product {
            id: id.to_string(),
            slug: format!("product-{id}"),
            name: format!("Product {id}"),
            description: String::new(),
            price,
            currency_code: currency.to_string(),
            thumbnail: PLACEHOLDER_IMAGE.to_string(),
            average_rating: 4.2,
            review_count: 12,
            sku: format!("SKU{id}"),
            categories: Vec::new(),
        }
    }

    #[test]
    fn test_add_new_product() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 1000, "EUR"), 1).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of("1"), 1);
        assert!(cart.contains("1"));
    }

    #[test]
    fn test_add_same_product_is_additive() {
        let mut cart = Cart::new();
        let p = product("1", 1000, "EUR");
        cart.add_product(&p, 2).unwrap();
        cart.add_product(&p, 3).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of("1"), 5);
    }

    #[test]
    fn test_add_keeps_first_snapshot() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 1000, "EUR"), 1).unwrap();
        cart.add_product(&product("1", 5000, "EUR"), 1).unwrap();
        assert_eq!(cart.items()[0].product.price, 1000);
    }

    #[test]
    fn test_add_rejects_blank_id() {
        let mut cart = Cart::new();
        let result = cart.add_product(&product("  ", 1000, "EUR"), 1);
        assert!(matches!(result, Err(CartError::InvalidProduct)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let p = product("1", 1000, "EUR");
        assert!(matches!(
            cart.add_product(&p, 0),
            Err(CartError::InvalidQuantity(0))
        ));
        assert!(matches!(
            cart.add_product(&p, -3),
            Err(CartError::InvalidQuantity(-3))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_product() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 1000, "EUR"), 1).unwrap();
        cart.add_product(&product("2", 1000, "EUR"), 1).unwrap();
        assert!(cart.remove_product("1"));
        assert!(!cart.contains("1"));
        assert!(cart.contains("2"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 1000, "EUR"), 1).unwrap();
        assert!(!cart.remove_product("missing"));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 1000, "EUR"), 4).unwrap();
        assert!(cart.set_quantity("1", 2));
        assert_eq!(cart.quantity_of("1"), 2);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 1000, "EUR"), 4).unwrap();
        assert!(cart.set_quantity("1", 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 1000, "EUR"), 4).unwrap();
        assert!(cart.set_quantity("1", -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity("nope", 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 1000, "USD"), 3).unwrap();
        cart.clear();
        assert!(cart.items().is_empty());
        assert_eq!(cart.total_price(), 0);
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_total_price_in_eur() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 100_000, "USD"), 2).unwrap();
        assert_eq!(cart.total_price(), 184_000);
    }

    #[test]
    fn test_total_price_mixed_currencies() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 10_000, "USD"), 1).unwrap();
        cart.add_product(&product("2", 10_000, "GBP"), 1).unwrap();
        cart.add_product(&product("3", 10_000, "EUR"), 2).unwrap();
        assert_eq!(cart.total_price(), 9_200 + 11_700 + 20_000);
    }

    #[test]
    fn test_total_items_tracks_mutations() {
        let mut cart = Cart::new();
        let a = product("a", 100, "EUR");
        let b = product("b", 100, "EUR");
        cart.add_product(&a, 2).unwrap();
        cart.add_product(&b, 5).unwrap();
        cart.set_quantity("a", 7);
        cart.remove_product("b");
        let _ = cart.add_product(&b, -1);
        let sum: u64 = cart.items().iter().map(|i| u64::from(i.quantity)).sum();
        assert_eq!(cart.total_items(), sum);
        assert_eq!(cart.total_items(), 7);
    }

    #[test]
    fn test_summary() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 1234, "EUR"), 2).unwrap();
        let summary = cart.summary();
        assert_eq!(summary.lines, 1);
        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.total_price, 2468);
        assert_eq!(summary.total_display(), "24.68 €");
    }

    #[test]
    fn test_snapshot_shape() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 1000, "EUR"), 2).unwrap();
        let json: Value = serde_json::from_str(&cart.to_snapshot().unwrap()).unwrap();
        assert_eq!(json[0]["productId"], "1");
        assert_eq!(json[0]["quantity"], 2);
        assert_eq!(json[0]["product"]["currencyCode"], "EUR");
    }

    #[test]
    fn test_snapshot_restores_cart() {
        let mut cart = Cart::new();
        cart.add_product(&product("1", 1000, "EUR"), 2).unwrap();
        cart.add_product(&product("2", 500, "USD"), 1).unwrap();
        let restored = Cart::from_snapshot(&cart.to_snapshot().unwrap()).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_snapshot_not_json_is_error() {
        assert!(matches!(
            Cart::from_snapshot("{not json"),
            Err(CartError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn test_snapshot_not_array_is_error() {
        assert!(matches!(
            Cart::from_snapshot(r#"{"items": []}"#),
            Err(CartError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn test_snapshot_drops_invalid_entries() {
        let good = serde_json::to_value(product("1", 1000, "EUR")).unwrap();
        let other = serde_json::to_value(product("2", 1000, "EUR")).unwrap();
        let snapshot = serde_json::json!([
            {"productId": "1", "product": good, "quantity": 2},
            {"product": good, "quantity": 1},
            {"productId": "1", "quantity": 1},
            {"productId": "1", "product": good, "quantity": 0},
            {"productId": "1", "product": good, "quantity": -4},
            {"productId": "1", "product": good, "quantity": 1.5},
            {"productId": "1", "product": {"id": "1"}, "quantity": 1},
            {"productId": "3", "product": other, "quantity": 1},
            "garbage",
            null
        ]);
        let cart = Cart::from_snapshot(&snapshot.to_string()).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of("1"), 2);
    }

    #[test]
    fn test_snapshot_merges_duplicate_ids() {
        let p = serde_json::to_value(product("1", 1000, "EUR")).unwrap();
        let snapshot = serde_json::json!([
            {"productId": "1", "product": p, "quantity": 2},
            {"productId": "1", "product": p, "quantity": 3}
        ]);
        let cart = Cart::from_snapshot(&snapshot.to_string()).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of("1"), 5);
    }

    #[test]
    fn test_empty_snapshot() {
        let cart = Cart::from_snapshot("[]").unwrap();
        assert!(cart.is_empty());
    }
}
