//! Locale extraction from the `/{locale}` path prefix.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use vitrine_core::Locale;

use crate::error::AppError;

/// Locale taken from the `{locale}` route parameter.
///
/// An unsupported code is a 404: `/de/catalogue` is not a page.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequestLocale(locale): RequestLocale) -> impl IntoResponse {
///     locale.code()
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequestLocale(pub Locale);

impl<S> FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::NotFound(e.to_string()))?;

        let segment = params
            .get("locale")
            .ok_or_else(|| AppError::NotFound(parts.uri.path().to_string()))?;

        Locale::parse(segment)
            .map(Self)
            .ok_or_else(|| AppError::NotFound(format!("unsupported locale {segment}")))
    }
}

/// Best-effort locale for pages rendered outside a `{locale}` route,
/// such as the 404 fallback.
#[must_use]
pub fn locale_from_path(path: &str) -> Locale {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    Locale::from_segment(first)
}
