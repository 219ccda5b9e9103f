//! Cache types for catalog responses.

use vitrine_core::types::{Category, Product, ProductDetail};

/// Cache key for catalog responses.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Categories,
    Products,
    Product(String),
}

/// Cached value types. Only successful responses are stored.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Categories(Vec<Category>),
    Products(Vec<Product>),
    Product(Option<Box<ProductDetail>>),
}
