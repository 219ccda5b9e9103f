//! Vitrine Core - storefront domain logic.
//!
//! This crate holds everything the storefront computes without touching the
//! network:
//! - [`types`] - catalog entities, prices and the EUR converter, locales
//! - [`filter`] - catalog search/category/sort with URL-state round-tripping
//! - [`cart`] - the cart state machine and its persisted snapshot format
//! - [`translation`] - the English to French catalog overlay
//!
//! # Architecture
//!
//! No I/O, no HTTP clients, no async. The `vitrine-storefront` crate wires
//! these pieces to the upstream GraphQL API, the session store and the
//! rendered pages; the `vitrine` CLI reuses them for offline tooling.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod filter;
pub mod translation;
pub mod types;

pub use cart::{Cart, CartError, CartItem, CartSummary};
pub use filter::{CatalogQuery, SortOrder, compute_view};
pub use types::*;
