//! Service layer for the marketplace.
//! - `storage` holds the process-local maps.
//! - `catalog` implements artisan/product operations on top of them: validation,
//!   referential checks, id generation.

pub mod errors;
pub mod storage;
pub mod catalog;

pub use catalog::{CatalogStore, InMemoryCatalog};
pub use errors::ServiceError;
