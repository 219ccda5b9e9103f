//! Supported storefront locales.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A storefront locale. Every page is served under a `/{locale}` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// All supported locales, default first.
    pub const ALL: [Self; 2] = [Self::Fr, Self::En];

    /// Parse a locale code, `None` if unsupported.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "fr" => Some(Self::Fr),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Parse a path segment, falling back to the default locale.
    #[must_use]
    pub fn from_segment(segment: &str) -> Self {
        Self::parse(segment).unwrap_or_default()
    }

    /// Lowercase code used in URLs and `lang` attributes.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Whether catalog text must go through the French translation overlay.
    #[must_use]
    pub const fn translates_catalog(self) -> bool {
        matches!(self, Self::Fr)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported() {
        assert_eq!(Locale::parse("fr"), Some(Locale::Fr));
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse("de"), None);
    }

    #[test]
    fn test_unknown_segment_falls_back_to_default() {
        assert_eq!(Locale::from_segment("de"), Locale::Fr);
        assert_eq!(Locale::from_segment(""), Locale::Fr);
        assert_eq!(Locale::from_segment("en"), Locale::En);
    }

    #[test]
    fn test_display() {
        assert_eq!(Locale::En.to_string(), "en");
        assert_eq!(Locale::default().code(), "fr");
    }
}
