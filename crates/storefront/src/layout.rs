//! Data shared by every page through `base.html`.

use axum::http::Uri;
use vitrine_core::Locale;

use crate::config::AnalyticsConfig;
use crate::i18n::{self, Messages};

/// Layout context: locale, labels, navigation links and cart badge.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub lang: &'static str,
    pub t: &'static Messages,
    pub title: String,
    pub home_href: String,
    pub catalogue_href: String,
    pub cart_href: String,
    pub switch_href: String,
    pub cart_count: u64,
    pub ga4_measurement_id: Option<String>,
}

impl PageContext {
    #[must_use]
    pub fn new(locale: Locale, uri: &Uri, title: impl Into<String>) -> Self {
        Self {
            lang: locale.code(),
            t: Messages::for_locale(locale),
            title: title.into(),
            home_href: i18n::localized_path(locale, "/"),
            catalogue_href: i18n::localized_path(locale, "/catalogue"),
            cart_href: i18n::localized_path(locale, "/cart"),
            switch_href: i18n::switch_locale_href(uri.path(), uri.query(), i18n::alternate(locale)),
            cart_count: 0,
            ga4_measurement_id: None,
        }
    }

    #[must_use]
    pub const fn with_cart_count(mut self, count: u64) -> Self {
        self.cart_count = count;
        self
    }

    #[must_use]
    pub fn with_analytics(mut self, analytics: &AnalyticsConfig) -> Self {
        self.ga4_measurement_id.clone_from(&analytics.ga4_measurement_id);
        self
    }
}
