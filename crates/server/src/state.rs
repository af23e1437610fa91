use std::sync::Arc;

use service::{CatalogStore, InMemoryCatalog};

/// Shared handler state. The catalog is created once per server and injected
/// through axum `State`.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<dyn CatalogStore>,
}

impl ServerState {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Fresh, empty process-local catalog.
    pub fn in_memory() -> Self {
        Self::new(InMemoryCatalog::new())
    }
}
