//! Catalog filtering and sorting, with the filter state kept in the URL.
//!
//! A [`CatalogQuery`] is reconstructible from the query string alone and
//! serializes back to it with neutral values omitted, so any view can be
//! bookmarked or shared and browser history works without hidden state.
//!
//! # Example
//!
//! ```rust
//! use vitrine_core::filter::{CatalogQuery, SortOrder};
//!
//! let query = CatalogQuery::from_query_string("search=lap&sort=asc");
//! assert_eq!(query.sort, SortOrder::Asc);
//!
//! let next = query.with_sort(SortOrder::None);
//! assert_eq!(next.to_query_string(), "search=lap");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::types::Product;

/// Query-string key for the free-text search.
pub const SEARCH_KEY: &str = "search";
/// Query-string key for the category slug.
pub const CATEGORY_KEY: &str = "category";
/// Query-string key for the price sort.
pub const SORT_KEY: &str = "sort";
/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Price ordering of the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Keep upstream order.
    #[default]
    None,
    /// Cheapest first.
    Asc,
    /// Most expensive first.
    Desc,
}

impl SortOrder {
    /// Parse a query value; anything unrecognized is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "asc" => Self::Asc,
            "desc" => Self::Desc,
            _ => Self::None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter state of the catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    /// Free text matched against product names.
    pub search: String,
    /// Category slug, `None` for all categories.
    pub category: Option<String>,
    pub sort: SortOrder,
}

impl CatalogQuery {
    /// Build the state from a raw query string (without the leading `?`).
    ///
    /// Unknown keys are ignored; for repeated keys the last value wins.
    #[must_use]
    pub fn from_query_string(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut query = Self::default();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                SEARCH_KEY => query.search = value.into_owned(),
                CATEGORY_KEY => query.category = normalize_category(&value),
                SORT_KEY => query.sort = SortOrder::parse(&value),
                _ => {}
            }
        }
        query
    }

    /// Serialize to a query string, omitting neutral values.
    ///
    /// Returns an empty string for the default state.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_KEY, &self.search);
        }
        if let Some(category) = &self.category {
            serializer.append_pair(CATEGORY_KEY, category);
        }
        if self.sort != SortOrder::None {
            serializer.append_pair(SORT_KEY, self.sort.as_str());
        }
        serializer.finish()
    }

    /// URL of this view under `base_path`.
    #[must_use]
    pub fn href(&self, base_path: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            base_path.to_string()
        } else {
            format!("{base_path}?{query}")
        }
    }

    /// Whether `raw` is exactly the canonical serialization of its state.
    ///
    /// A submitted filter form carries neutral values (`category=all`,
    /// empty `search`); the HTTP layer redirects such requests to the
    /// canonical URL.
    #[must_use]
    pub fn is_canonical(raw: &str) -> bool {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        Self::from_query_string(raw).to_query_string() == raw
    }

    /// Next state with a new search term.
    #[must_use]
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    /// Next state with a new category (`"all"` clears the filter).
    #[must_use]
    pub fn with_category(&self, category: &str) -> Self {
        Self {
            category: normalize_category(category),
            ..self.clone()
        }
    }

    /// Next state with a new sort order.
    #[must_use]
    pub fn with_sort(&self, sort: SortOrder) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// Category value as shown in the filter form.
    #[must_use]
    pub fn category_value(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }
}

fn normalize_category(value: &str) -> Option<String> {
    if value.is_empty() || value == ALL_CATEGORIES {
        None
    } else {
        Some(value.to_string())
    }
}

/// Apply a query to a product list: search, then category, then sort.
///
/// The input is never modified; the result holds copies in view order.
#[must_use]
pub fn compute_view(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let term = query.search.trim().to_lowercase();

    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
        .filter(|p| query.category.as_deref().is_none_or(|slug| p.in_category(slug)))
        .cloned()
        .collect();

    // `sort_by` is stable, so equal prices keep upstream order.
    match query.sort {
        SortOrder::Asc => view.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::Desc => view.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::None => {}
    }

    view
}
