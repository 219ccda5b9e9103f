//! English to French overlay for catalog text.
//!
//! Names are translated by exact lookup. Descriptions go through a
//! longest-match-first pipeline: a whole-text match against known phrases,
//! then phrase-level substitution, then term-level substitution. Unknown
//! text comes back cleaned but otherwise untouched.
//!
//! Translating already-translated text is not guaranteed to be a no-op:
//! a French output may itself contain a known term.

pub mod dictionary;

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::{Category, Product, ProductDetail, strip_html};

/// Separator substituted for `.` in message-catalog keys.
pub const KEY_DOT: &str = "__DOT__";

/// Whole-text match threshold for a prefix match, in percent of the text.
const PREFIX_COVERAGE_PCT: usize = 95;

/// A phrase substitution covering this share of the text ends the phrase pass.
const PHRASE_STOP_PCT: usize = 90;

/// Terms longer than this are matched like phrases.
const TERM_WORD_MAX_CHARS: usize = 15;

struct Rule {
    /// Normalized source, lowercased.
    source_lower: String,
    source_chars: usize,
    pattern: Regex,
    target: &'static str,
}

impl Rule {
    fn phrase(source: &str, target: &'static str) -> Option<Self> {
        let normalized = collapse_whitespace(source);
        let pattern = Regex::new(&format!("(?i){}", whitespace_tolerant(&normalized))).ok()?;
        Some(Self::new(&normalized, pattern, target))
    }

    fn term(source: &str, target: &'static str) -> Option<Self> {
        let normalized = collapse_whitespace(source);
        let is_phrase =
            normalized.contains(' ') || normalized.chars().count() > TERM_WORD_MAX_CHARS;
        let body = if is_phrase {
            whitespace_tolerant(&normalized)
        } else {
            format!(r"\b{}\b", regex::escape(&normalized))
        };
        let pattern = Regex::new(&format!("(?i){body}")).ok()?;
        Some(Self::new(&normalized, pattern, target))
    }

    fn new(normalized: &str, pattern: Regex, target: &'static str) -> Self {
        Self {
            source_lower: normalized.to_lowercase(),
            source_chars: normalized.chars().count(),
            pattern,
            target,
        }
    }

    /// Replace every match, capitalizing the target when the match starts
    /// with an uppercase letter.
    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| match_case(&caps[0], self.target))
            .into_owned()
    }
}

fn compile(entries: &[(&str, &'static str)], build: fn(&str, &'static str) -> Option<Rule>) -> Vec<Rule> {
    let mut rules: Vec<Rule> = entries
        .iter()
        .filter_map(|&(source, target)| build(source, target))
        .collect();
    // Longest first; ties keep dictionary order.
    rules.sort_by(|a, b| b.source_chars.cmp(&a.source_chars));
    rules
}

static PHRASE_RULES: LazyLock<Vec<Rule>> =
    LazyLock::new(|| compile(dictionary::PHRASES, Rule::phrase));

static TERM_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| compile(dictionary::TERMS, Rule::term));

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(source, _)| *source == key)
        .map(|&(_, target)| target)
}

/// Translate a category name; unknown names are returned unchanged.
#[must_use]
pub fn translate_category(name: &str) -> String {
    lookup(dictionary::CATEGORIES, name).map_or_else(|| name.to_string(), str::to_string)
}

/// Translate a product name; unknown names are returned unchanged.
#[must_use]
pub fn translate_product(name: &str) -> String {
    lookup(dictionary::PRODUCTS, name).map_or_else(|| name.to_string(), str::to_string)
}

/// Strip HTML, collapse whitespace and straighten typographic quotes.
#[must_use]
pub fn clean_description(text: &str) -> String {
    collapse_whitespace(&strip_html(text))
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

/// Translate a product description.
///
/// ```rust
/// use vitrine_core::translation::translate_product_description;
///
/// assert_eq!(translate_product_description("<p>Plain   text</p>"), "Plain text");
/// assert_eq!(
///     translate_product_description("A mouse to be reckoned with!"),
///     "Une souris à ne pas négliger !"
/// );
/// ```
#[must_use]
pub fn translate_product_description(description: &str) -> String {
    let normalized = clean_description(description);
    if normalized.is_empty() {
        return normalized;
    }

    if let Some(whole) = whole_text_match(&normalized) {
        return whole.to_string();
    }

    let total_chars = normalized.chars().count();
    let mut translated = normalized;

    for rule in PHRASE_RULES.iter() {
        if !rule.pattern.is_match(&translated) {
            continue;
        }
        translated = rule.apply(&translated);
        if rule.source_chars * 100 >= total_chars * PHRASE_STOP_PCT {
            break;
        }
    }

    for rule in TERM_RULES.iter() {
        translated = rule.apply(&translated);
    }

    translated
}

fn whole_text_match(normalized: &str) -> Option<&'static str> {
    let lower = normalized.to_lowercase();
    let text_chars = lower.chars().count();
    PHRASE_RULES
        .iter()
        .find(|rule| {
            lower == rule.source_lower
                || (lower.starts_with(&rule.source_lower)
                    && rule.source_chars * 100 >= text_chars * PREFIX_COVERAGE_PCT)
        })
        .map(|rule| rule.target)
}

/// Category with its name translated.
#[must_use]
pub fn localize_category(category: &Category) -> Category {
    Category {
        name: translate_category(&category.name),
        ..category.clone()
    }
}

/// Product with its name, description and category names translated.
#[must_use]
pub fn localize_product(product: &Product) -> Product {
    let mut localized = product.clone();
    localized.name = translate_product(&product.name);
    localized.description = translate_product_description(&product.description);
    for category in &mut localized.categories {
        category.name = translate_category(&category.name);
    }
    localized
}

/// Product detail with its text translated. The HTML description is
/// replaced by the translated plain text.
#[must_use]
pub fn localize_product_detail(detail: &ProductDetail) -> ProductDetail {
    let product = localize_product(&detail.product);
    ProductDetail {
        description_html: product.description.clone(),
        product,
        gallery: detail.gallery.clone(),
    }
}

/// Encode a source string as a message-catalog key.
#[must_use]
pub fn encode_key(key: &str) -> String {
    key.replace('.', KEY_DOT)
}

/// Inverse of [`encode_key`].
#[must_use]
pub fn decode_key(key: &str) -> String {
    key.replace(KEY_DOT, ".")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn whitespace_tolerant(normalized: &str) -> String {
    normalized
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

fn match_case(matched: &str, target: &str) -> String {
    if !matched.chars().next().is_some_and(char::is_uppercase) {
        return target.to_string();
    }
    let mut chars = target.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
