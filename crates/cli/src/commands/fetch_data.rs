//! Catalog snapshot command.
//!
//! # Usage
//!
//! ```bash
//! vitrine fetch-data --out data
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_GRAPHQL_URL` - Upstream GraphQL endpoint (required here)
//! - `CATALOG_TIMEOUT_SECS` - Per-request timeout
//!
//! # Output
//!
//! - `categories.json` - every category
//! - `products.json` - the whole listing
//! - `product-details.json` - one detail per product that could be fetched
//! - `summary.json` - fetch metadata and a price range per product

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use vitrine_core::{Category, Product, ProductDetail};
use vitrine_storefront::catalog::{CatalogClient, CatalogError};
use vitrine_storefront::config::{CatalogConfig, ConfigError};

/// Pause between product detail requests.
const DETAIL_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Errors that can occur while taking a snapshot.
#[derive(Debug, Error)]
pub enum FetchDataError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("CATALOG_GRAPHQL_URL must be set to fetch the catalog")]
    NotConfigured,

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Snapshot metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryMetadata {
    fetched_at: DateTime<Utc>,
    api_url: String,
    total_categories: usize,
    total_products: usize,
    total_product_details: usize,
}

#[derive(Debug, Serialize)]
struct CategorySummary {
    id: String,
    name: String,
    slug: String,
}

/// Lowest and highest known price, in the product's own currency.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct PriceRange {
    min: i64,
    max: i64,
    currency: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductSummary {
    id: String,
    name: String,
    slug: String,
    categories: Vec<String>,
    price_range: PriceRange,
}

#[derive(Debug, Serialize)]
struct Summary {
    metadata: SummaryMetadata,
    categories: Vec<CategorySummary>,
    products: Vec<ProductSummary>,
}

/// Fetch the catalog and write the snapshot files into `out`.
///
/// A product whose detail request fails is logged and left out of
/// `product-details.json`; any listing failure aborts the command.
///
/// # Errors
///
/// Returns an error if the endpoint is not configured, the listing cannot
/// be fetched, or a file cannot be written.
pub async fn run(out: &Path) -> Result<(), FetchDataError> {
    let _ = dotenvy::dotenv();

    let config = CatalogConfig::from_env()?;
    let api_url = config
        .graphql_url
        .as_ref()
        .map(ToString::to_string)
        .ok_or(FetchDataError::NotConfigured)?;
    let client = CatalogClient::new(&config)?;

    tracing::info!("API URL: {}", api_url);
    tracing::info!("Output directory: {}", out.display());
    std::fs::create_dir_all(out).map_err(|source| FetchDataError::Io {
        path: out.to_path_buf(),
        source,
    })?;

    tracing::info!("Fetching categories...");
    let categories = client.fetch_categories().await;
    write_json(&out.join("categories.json"), &categories)?;
    tracing::info!("{} categories saved", categories.len());

    tracing::info!("Fetching products...");
    let products = client.fetch_products().await?;
    write_json(&out.join("products.json"), &products)?;
    tracing::info!("{} products saved", products.len());

    tracing::info!("Fetching product details...");
    let details = fetch_details(&client, &products).await;
    write_json(&out.join("product-details.json"), &details)?;
    tracing::info!("{} product details saved", details.len());

    let summary = build_summary(api_url, Utc::now(), &categories, &products, &details);
    write_json(&out.join("summary.json"), &summary)?;

    tracing::info!("Snapshot complete!");
    tracing::info!("  Categories: {}", summary.metadata.total_categories);
    tracing::info!("  Products: {}", summary.metadata.total_products);
    tracing::info!("  Product details: {}", summary.metadata.total_product_details);
    Ok(())
}

async fn fetch_details(client: &CatalogClient, products: &[Product]) -> Vec<ProductDetail> {
    let mut details = Vec::with_capacity(products.len());
    for (i, product) in products.iter().enumerate() {
        match client.fetch_product_by_slug(&product.slug).await {
            Ok(Some(detail)) => details.push(detail),
            Ok(None) => tracing::warn!(slug = %product.slug, "Product disappeared upstream"),
            Err(e) => tracing::warn!(slug = %product.slug, error = %e, "Product detail failed"),
        }

        let done = i + 1;
        if done % 10 == 0 || done == products.len() {
            tracing::info!("  {}/{} products processed", done, products.len());
        }
        tokio::time::sleep(DETAIL_REQUEST_DELAY).await;
    }
    details
}

/// Price range of a product across its listing and detail entries.
fn price_range(product: &Product, details: &[ProductDetail]) -> PriceRange {
    let prices = std::iter::once(product.price).chain(
        details
            .iter()
            .filter(|d| d.product.id == product.id && d.product.currency_code == product.currency_code)
            .map(|d| d.product.price),
    );
    let (min, max) = prices.fold((product.price, product.price), |(lo, hi), p| {
        (lo.min(p), hi.max(p))
    });
    PriceRange {
        min,
        max,
        currency: product.currency_code.clone(),
    }
}

fn build_summary(
    api_url: String,
    fetched_at: DateTime<Utc>,
    categories: &[Category],
    products: &[Product],
    details: &[ProductDetail],
) -> Summary {
    Summary {
        metadata: SummaryMetadata {
            fetched_at,
            api_url,
            total_categories: categories.len(),
            total_products: products.len(),
            total_product_details: details.len(),
        },
        categories: categories
            .iter()
            .map(|c| CategorySummary {
                id: c.id.clone(),
                name: c.name.clone(),
                slug: c.slug.clone(),
            })
            .collect(),
        products: products
            .iter()
            .map(|p| ProductSummary {
                id: p.id.clone(),
                name: p.name.clone(),
                slug: p.slug.clone(),
                categories: p.categories.iter().map(|c| c.name.clone()).collect(),
                price_range: price_range(p, details),
            })
            .collect(),
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), FetchDataError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| FetchDataError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| FetchDataError::Io {
        path: path.to_path_buf(),
        source,
    })
}
