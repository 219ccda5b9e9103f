//! CLI command implementations.

pub mod fetch_data;
pub mod translations;
