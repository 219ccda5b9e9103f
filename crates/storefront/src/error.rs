//! Unified error handling with Sentry integration.
//!
//! Handlers that cannot render a localized page themselves return
//! `Result<T, AppError>`; server-side failures are captured to Sentry before
//! the error page is sent.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use vitrine_core::Locale;

use crate::catalog::CatalogError;
use crate::filters;
use crate::layout::PageContext;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog upstream failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Catalog(err) => err.status_code(),
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn is_server_error(&self) -> bool {
        match self {
            Self::Catalog(err) => !err.is_not_found(),
            Self::Internal(_) => true,
            Self::NotFound(_) | Self::BadRequest(_) => false,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status_code();
        let locale = Locale::default();
        let uri = Uri::from_static("/");

        // Don't expose internal error details to clients
        match self {
            Self::NotFound(_) => (status, NotFoundPage::page(locale, &uri)).into_response(),
            Self::Catalog(err) => (
                status,
                ErrorPage::new(locale, &uri, err.user_message(locale), None),
            )
                .into_response(),
            Self::BadRequest(message) => {
                (status, ErrorPage::new(locale, &uri, message, None)).into_response()
            }
            Self::Internal(_) => (
                status,
                ErrorPage::new(locale, &uri, generic_message(locale), None),
            )
                .into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

const fn generic_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Fr => "Une erreur inattendue est survenue. Veuillez réessayer.",
        Locale::En => "An unexpected error occurred. Please try again.",
    }
}

/// Generic error page with an optional retry link.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub page: PageContext,
    pub message: String,
    pub retry_href: Option<String>,
}

impl ErrorPage {
    #[must_use]
    pub fn new(
        locale: Locale,
        uri: &Uri,
        message: impl Into<String>,
        retry_href: Option<String>,
    ) -> Self {
        let page = PageContext::new(locale, uri, page_title(locale));
        Self {
            page,
            message: message.into(),
            retry_href,
        }
    }

    /// Page rendered after a handler panicked.
    #[must_use]
    pub fn unexpected(locale: Locale) -> Self {
        Self::new(
            locale,
            &Uri::from_static("/"),
            generic_message(locale),
            None,
        )
    }
}

fn page_title(locale: Locale) -> &'static str {
    crate::i18n::Messages::for_locale(locale).error_title
}

/// 404 page for unknown paths and missing products.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub page: PageContext,
    pub heading: &'static str,
    pub message: &'static str,
    pub back_href: String,
    pub back_label: &'static str,
}

impl NotFoundPage {
    /// Unknown path.
    #[must_use]
    pub fn page(locale: Locale, uri: &Uri) -> Self {
        let page = PageContext::new(
            locale,
            uri,
            crate::i18n::Messages::for_locale(locale).page_not_found_title,
        );
        let t = page.t;
        Self {
            back_href: page.home_href.clone(),
            page,
            heading: t.page_not_found_title,
            message: t.page_not_found_message,
            back_label: t.go_home,
        }
    }

    /// Product slug that the catalog does not know.
    #[must_use]
    pub fn product(page: PageContext) -> Self {
        let t = page.t;
        Self {
            back_href: page.catalogue_href.clone(),
            page,
            heading: t.product_not_found_title,
            message: t.product_not_found_message,
            back_label: t.back_to_catalogue,
        }
    }
}
