//! Shared building blocks for the marketplace workspace: response types that
//! every crate agrees on and the tracing subscriber setup.

pub mod types;
pub mod utils;

/// Service name reported by the root endpoint and in startup logs.
pub const SERVICE_NAME: &str = "Artisan Marketplace API";
