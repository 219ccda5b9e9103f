//! Core types for Vitrine.
//!
//! This module provides the catalog entities, price conversion and the
//! supported locales.

pub mod catalog;
pub mod locale;
pub mod price;

pub use catalog::{
    Category, CategoryRef, PLACEHOLDER_IMAGE, Product, ProductDetail, Rating, strip_html,
};
pub use locale::Locale;
pub use price::{Price, convert_and_format_price, convert_to_eur, format_price_eur};
