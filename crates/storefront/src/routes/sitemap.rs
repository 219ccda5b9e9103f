//! `sitemap.xml`: static pages plus one entry per product, in every locale.

use std::fmt::Write as _;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{instrument, warn};
use vitrine_core::{Locale, Product};

use crate::i18n;
use crate::state::AppState;

/// A `<url>` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub change_frequency: &'static str,
    pub priority: f32,
}

/// Static pages in every locale.
fn static_entries(base_url: &str) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    Locale::ALL
        .iter()
        .flat_map(|&locale| {
            [
                ("/", "daily", 1.0),
                ("/catalogue", "daily", 0.9),
                ("/cart", "weekly", 0.7),
            ]
            .into_iter()
            .map(move |(path, change_frequency, priority)| SitemapEntry {
                loc: format!("{base}{}", i18n::localized_path(locale, path)),
                change_frequency,
                priority,
            })
        })
        .collect()
}

fn product_entries(base_url: &str, products: &[Product]) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    products
        .iter()
        .flat_map(|product| {
            Locale::ALL.iter().map(move |&locale| SitemapEntry {
                loc: format!(
                    "{base}{}",
                    i18n::localized_path(locale, &format!("/product/{}", product.slug))
                ),
                change_frequency: "weekly",
                priority: 0.8,
            })
        })
        .collect()
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render entries as a sitemap document.
#[must_use]
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            xml_escape(&entry.loc),
            entry.change_frequency,
            entry.priority
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Serve the sitemap. Product pages are omitted when the catalog is down.
#[instrument(skip_all)]
pub async fn sitemap(State(state): State<AppState>) -> Response {
    let base_url = &state.config().base_url;
    let mut entries = static_entries(base_url);

    match state.catalog().fetch_products().await {
        Ok(products) => entries.extend(product_entries(base_url, &products)),
        Err(e) => warn!(error = %e, "Sitemap generated without product pages"),
    }

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&entries),
    )
        .into_response()
}
