//! Artisan and product operations.

pub mod store;
pub mod in_memory;

pub use in_memory::InMemoryCatalog;
pub use store::CatalogStore;
