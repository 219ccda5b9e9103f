//! French message catalog commands.
//!
//! # Usage
//!
//! ```bash
//! # Add missing category, product and description entries
//! vitrine translations generate --data data --file locales/fr.json
//!
//! # Machine-translate entries that still hold their English source
//! vitrine translations translate --data data --file locales/fr.json
//! ```
//!
//! # Environment Variables
//!
//! - `DEEPL_API_KEY` - `DeepL` API key (translate only)
//! - `DEEPL_API_URL` - `DeepL` endpoint, defaults to the free API
//!
//! # File format
//!
//! A JSON object of sections. `categories`, `products` and `descriptions`
//! map an encoded English source (see [`encode_key`]) to its French text.
//! Other sections are carried through untouched.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::{Map, Value};
use thiserror::Error;
use vitrine_core::translation::{clean_description, encode_key};
use vitrine_core::{Category, Product};
use vitrine_storefront::config::{ConfigError, DeeplConfig};
use vitrine_storefront::services::{
    DeeplClient, DeeplError, RetryPolicy, TargetLanguage, with_retry,
};

/// Sections created alongside the catalog ones in a new file.
const EXTRA_SECTIONS: [&str; 3] = ["common", "errors", "terms"];

/// Errors that can occur while managing the message catalog.
#[derive(Debug, Error)]
pub enum TranslationsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("DeepL error: {0}")]
    Deepl(#[from] DeeplError),

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{path}: expected a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("{path}: section `{section}` must be a JSON object")]
    SectionNotAnObject {
        path: PathBuf,
        section: &'static str,
    },
}

/// Catalog sections fed from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Categories,
    Products,
    Descriptions,
}

impl Section {
    const ALL: [Self; 3] = [Self::Categories, Self::Products, Self::Descriptions];

    const fn key(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Products => "products",
            Self::Descriptions => "descriptions",
        }
    }

    /// Pause after each `DeepL` request.
    const fn delay(self) -> Duration {
        match self {
            Self::Categories | Self::Products => Duration::from_millis(100),
            Self::Descriptions => Duration::from_millis(200),
        }
    }
}

/// Distinct English texts found in a snapshot.
#[derive(Debug, Default)]
struct SourceTexts {
    categories: BTreeSet<String>,
    products: BTreeSet<String>,
    descriptions: BTreeSet<String>,
}

impl SourceTexts {
    fn collect(categories: &[Category], products: &[Product]) -> Self {
        let non_empty = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        Self {
            categories: categories.iter().filter_map(|c| non_empty(&c.name)).collect(),
            products: products.iter().filter_map(|p| non_empty(&p.name)).collect(),
            descriptions: products
                .iter()
                .map(|p| clean_description(&p.description))
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    const fn get(&self, section: Section) -> &BTreeSet<String> {
        match section {
            Section::Categories => &self.categories,
            Section::Products => &self.products,
            Section::Descriptions => &self.descriptions,
        }
    }
}

/// Per-section outcome of `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionCount {
    section: Section,
    total: usize,
    added: usize,
}

/// An entry waiting for a machine translation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingEntry {
    section: Section,
    key: String,
    source: String,
}

/// Add every snapshot text missing from the message catalog.
///
/// New entries hold the English source; existing entries are kept.
///
/// # Errors
///
/// Returns an error if the snapshot or the catalog cannot be read, or the
/// catalog cannot be written back.
pub fn generate(data: &Path, file: &Path) -> Result<(), TranslationsError> {
    let sources = load_sources(data)?;
    let mut catalog = load_catalog(file)?;

    let counts = add_missing(&mut catalog, &sources, file)?;
    save_catalog(file, &catalog)?;

    tracing::info!("Message catalog written to {}", file.display());
    for count in &counts {
        tracing::info!(
            "  {}: {} total, {} new",
            count.section.key(),
            count.total,
            count.added
        );
    }
    let added: usize = counts.iter().map(|c| c.added).sum();
    if added > 0 {
        tracing::info!("{} new entries; run `vitrine translations translate` to fill them", added);
    } else {
        tracing::info!("Every snapshot text is already present");
    }
    Ok(())
}

/// Machine-translate every entry still equal to (or missing) its source.
///
/// A failed entry keeps its English source and the run continues. The file
/// is written once, after the last entry.
///
/// # Errors
///
/// Returns an error if `DEEPL_API_KEY` is missing, or if the snapshot or
/// the catalog cannot be read or written.
pub async fn translate(data: &Path, file: &Path) -> Result<(), TranslationsError> {
    let config = DeeplConfig::from_env()?;
    let client = DeeplClient::new(&config)?;

    let sources = load_sources(data)?;
    let mut catalog = load_catalog(file)?;

    let pending = pending_entries(&catalog, &sources, file)?;
    if pending.is_empty() {
        tracing::info!("Nothing to translate");
        return Ok(());
    }
    for section in Section::ALL {
        let n = pending.iter().filter(|e| e.section == section).count();
        tracing::info!("  {}: {} to translate", section.key(), n);
    }

    let policy = RetryPolicy::default();
    let total = pending.len();
    let mut failed = 0_usize;
    for (i, entry) in pending.into_iter().enumerate() {
        let french = match with_retry(&policy, || client.translate(&entry.source, TargetLanguage::Fr))
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    section = entry.section.key(),
                    error = %e,
                    "Translation failed; keeping the English text"
                );
                failed += 1;
                entry.source.clone()
            }
        };

        section_mut(&mut catalog, entry.section.key(), file)?
            .insert(entry.key, Value::String(french));

        let done = i + 1;
        if done % 10 == 0 || done == total {
            tracing::info!("  {}/{} entries processed", done, total);
        }
        tokio::time::sleep(entry.section.delay()).await;
    }

    save_catalog(file, &catalog)?;
    tracing::info!(
        "Message catalog written to {} ({} translated, {} kept in English)",
        file.display(),
        total - failed,
        failed
    );
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, TranslationsError> {
    let text = std::fs::read_to_string(path).map_err(|source| TranslationsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| TranslationsError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn load_sources(data: &Path) -> Result<SourceTexts, TranslationsError> {
    let categories: Vec<Category> = read_json(&data.join("categories.json"))?;
    let products: Vec<Product> = read_json(&data.join("products.json"))?;
    Ok(SourceTexts::collect(&categories, &products))
}

/// Read the message catalog, or start an empty one when the file is absent.
fn load_catalog(file: &Path) -> Result<Map<String, Value>, TranslationsError> {
    if !file.exists() {
        let mut catalog = Map::new();
        for key in EXTRA_SECTIONS
            .into_iter()
            .chain(Section::ALL.map(Section::key))
        {
            catalog.insert(key.to_string(), Value::Object(Map::new()));
        }
        return Ok(catalog);
    }

    match read_json::<Value>(file)? {
        Value::Object(catalog) => Ok(catalog),
        _ => Err(TranslationsError::NotAnObject {
            path: file.to_path_buf(),
        }),
    }
}

fn save_catalog(file: &Path, catalog: &Map<String, Value>) -> Result<(), TranslationsError> {
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| TranslationsError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let mut json =
        serde_json::to_string_pretty(catalog).map_err(|source| TranslationsError::Json {
            path: file.to_path_buf(),
            source,
        })?;
    json.push('\n');
    std::fs::write(file, json).map_err(|source| TranslationsError::Io {
        path: file.to_path_buf(),
        source,
    })
}

/// A catalog section as a mutable object, created when absent.
fn section_mut<'a>(
    catalog: &'a mut Map<String, Value>,
    section: &'static str,
    file: &Path,
) -> Result<&'a mut Map<String, Value>, TranslationsError> {
    catalog
        .entry(section)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| TranslationsError::SectionNotAnObject {
            path: file.to_path_buf(),
            section,
        })
}

/// Value of an entry, `None` when absent, empty or not a string.
fn entry_text<'a>(section: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    section
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn add_missing(
    catalog: &mut Map<String, Value>,
    sources: &SourceTexts,
    file: &Path,
) -> Result<Vec<SectionCount>, TranslationsError> {
    let mut counts = Vec::with_capacity(Section::ALL.len());
    for section in Section::ALL {
        let texts = sources.get(section);
        let entries = section_mut(catalog, section.key(), file)?;
        let mut added = 0;
        for text in texts {
            let key = encode_key(text);
            if entry_text(entries, &key).is_none() {
                entries.insert(key, Value::String(text.clone()));
                added += 1;
            }
        }
        counts.push(SectionCount {
            section,
            total: texts.len(),
            added,
        });
    }
    Ok(counts)
}

fn pending_entries(
    catalog: &Map<String, Value>,
    sources: &SourceTexts,
    file: &Path,
) -> Result<Vec<PendingEntry>, TranslationsError> {
    let empty = Map::new();
    let mut pending = Vec::new();
    for section in Section::ALL {
        let entries = match catalog.get(section.key()) {
            None => &empty,
            Some(value) => value
                .as_object()
                .ok_or_else(|| TranslationsError::SectionNotAnObject {
                    path: file.to_path_buf(),
                    section: section.key(),
                })?,
        };
        for text in sources.get(section) {
            let key = encode_key(text);
            let untranslated = entry_text(entries, &key).is_none_or(|current| current == text.as_str());
            if untranslated {
                pending.push(PendingEntry {
                    section,
                    key,
                    source: text.clone(),
                });
            }
        }
    }
    Ok(pending)
}
