use async_trait::async_trait;
use models::{Artisan, ArtisanInput, Product, ProductInput};

use crate::errors::ServiceError;

/// Trait abstraction for the marketplace catalog, so handlers can be driven by
/// any backing store.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Validate and insert an artisan. A client-supplied id that is already taken
    /// replaces the existing record.
    async fn create_artisan(&self, input: ArtisanInput) -> Result<Artisan, ServiceError>;
    async fn list_artisans(&self) -> Vec<Artisan>;
    async fn get_artisan(&self, id: &str) -> Result<Artisan, ServiceError>;
    /// Validate the payload, check the artisan exists, then insert the product
    /// under that artisan.
    async fn create_product(&self, artisan_id: &str, input: ProductInput) -> Result<Product, ServiceError>;
    async fn list_products(&self) -> Vec<Product>;
    async fn list_artisan_products(&self, artisan_id: &str) -> Result<Vec<Product>, ServiceError>;
}
