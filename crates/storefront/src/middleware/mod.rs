//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `CatchPanicLayer` (error page on handler panic)
//! 3. `TraceLayer` (request tracing)
//! 4. Request ID (add unique ID to each request)
//! 5. Security headers
//! 6. Session layer (tower-sessions with in-memory store)

pub mod cart;
pub mod locale;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use cart::SessionCart;
pub use locale::{RequestLocale, locale_from_path};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
