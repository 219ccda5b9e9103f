//! Outbound services used by the offline tooling.
//!
//! - `retry` - bounded exponential backoff for idempotent calls
//! - `deepl` - `DeepL` machine translation client

pub mod deepl;
pub mod retry;

pub use deepl::{DeeplClient, DeeplError, TargetLanguage};
pub use retry::{RetryPolicy, with_retry};
