//! Cart extractor bound to the visitor's session.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::cart::CartStore;
use crate::error::AppError;

/// The visitor's cart, loaded from the session.
///
/// Requires the session layer; loading never fails once it is present.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(SessionCart(store): SessionCart) -> impl IntoResponse {
///     store.cart().total_items().to_string()
/// }
/// ```
pub struct SessionCart(pub CartStore<Session>);

impl<S> FromRequestParts<S> for SessionCart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        Ok(Self(CartStore::open(session).await))
    }
}
