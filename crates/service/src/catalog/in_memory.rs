use std::sync::Arc;

use async_trait::async_trait;
use models::{Artisan, ArtisanInput, Product, ProductInput};
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::store::CatalogStore;
use crate::errors::ServiceError;
use crate::storage::MemoryMapStore;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Process-local catalog: one map per entity, each behind its own lock.
///
/// Lock order is artisans before products wherever both are held.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    artisans: MemoryMapStore<String, Artisan>,
    products: MemoryMapStore<String, Product>,
}

impl InMemoryCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn create_artisan(&self, input: ArtisanInput) -> Result<Artisan, ServiceError> {
        let artisan = input.validate()?.into_artisan(new_id);
        if self.artisans.insert(artisan.id.clone(), artisan.clone()).await.is_some() {
            warn!(artisan_id = %artisan.id, "artisan id reused; previous record replaced");
        }
        info!(artisan_id = %artisan.id, craft_type = %artisan.craft_type, "artisan created");
        Ok(artisan)
    }

    async fn list_artisans(&self) -> Vec<Artisan> {
        self.artisans.list().await
    }

    async fn get_artisan(&self, id: &str) -> Result<Artisan, ServiceError> {
        self.artisans
            .get(id)
            .await
            .ok_or_else(|| ServiceError::artisan_not_found(id))
    }

    async fn create_product(&self, artisan_id: &str, input: ProductInput) -> Result<Product, ServiceError> {
        let new = input.validate()?;

        // the artisan must not disappear between the check and the insert
        let artisans = self.artisans.read().await;
        if !artisans.contains_key(artisan_id) {
            return Err(ServiceError::artisan_not_found(artisan_id));
        }
        let product = new.into_product(new_id(), artisan_id.to_string());
        self.products.insert(product.id.clone(), product.clone()).await;
        drop(artisans);

        info!(product_id = %product.id, artisan_id = %product.artisan_id, "product created");
        Ok(product)
    }

    async fn list_products(&self) -> Vec<Product> {
        self.products.list().await
    }

    async fn list_artisan_products(&self, artisan_id: &str) -> Result<Vec<Product>, ServiceError> {
        let artisans = self.artisans.read().await;
        if !artisans.contains_key(artisan_id) {
            return Err(ServiceError::artisan_not_found(artisan_id));
        }
        let products = self.products.filter(|p| p.artisan_id == artisan_id).await;
        drop(artisans);
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artisan_input(name: &str, craft: &str) -> ArtisanInput {
        ArtisanInput { id: None, name: Some(name.into()), craft_type: Some(craft.into()) }
    }

    fn product_input(name: &str, price: f64, stock: i64) -> ProductInput {
        ProductInput {
            name: Some(name.into()),
            description: Some(format!("{name} description")),
            price: Some(price),
            stock_quantity: Some(stock.into()),
        }
    }

    #[tokio::test]
    async fn artisan_create_get_list() -> anyhow::Result<()> {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.list_artisans().await.is_empty());

        let created = catalog.create_artisan(artisan_input("Ana Costa", "Embroidery")).await?;
        assert!(!created.id.is_empty());

        let found = catalog.get_artisan(&created.id).await?;
        assert_eq!(found, created);
        assert_eq!(catalog.list_artisans().await, vec![created]);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_artisan_is_not_stored() {
        let catalog = InMemoryCatalog::new();
        let input: ArtisanInput = serde_json::from_value(json!({"name": "João"})).unwrap();
        let err = catalog.create_artisan(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        assert!(catalog.list_artisans().await.is_empty());
    }

    #[tokio::test]
    async fn unknown_artisan_is_not_found() {
        let catalog = InMemoryCatalog::new();
        let err = catalog.get_artisan("nonexistent-id").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m.contains("nonexistent-id")));
    }

    #[tokio::test]
    async fn colliding_client_id_overwrites() -> anyhow::Result<()> {
        let catalog = InMemoryCatalog::new();
        let mut first = artisan_input("First", "Wood");
        first.id = Some("fixed".into());
        let mut second = artisan_input("Second", "Metal");
        second.id = Some("fixed".into());

        catalog.create_artisan(first).await?;
        catalog.create_artisan(second).await?;

        let all = catalog.list_artisans().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Second");
        Ok(())
    }

    #[tokio::test]
    async fn products_are_scoped_to_their_artisan() -> anyhow::Result<()> {
        let catalog = InMemoryCatalog::new();
        let a = catalog.create_artisan(artisan_input("Pedro", "Wood")).await?;
        let b = catalog.create_artisan(artisan_input("Carlos", "Metal")).await?;

        let p1 = catalog.create_product(&a.id, product_input("Chair", 450.0, 5)).await?;
        let p2 = catalog.create_product(&a.id, product_input("Table", 900.0, 0)).await?;
        assert_eq!(p1.artisan_id, a.id);
        assert_ne!(p1.id, p2.id);

        assert_eq!(catalog.list_products().await, vec![p1.clone(), p2.clone()]);
        assert_eq!(catalog.list_artisan_products(&a.id).await?, vec![p1, p2]);
        assert!(catalog.list_artisan_products(&b.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn product_for_unknown_artisan_is_rejected() {
        let catalog = InMemoryCatalog::new();
        let err = catalog
            .create_product("ghost", product_input("Vase", 10.0, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(catalog.list_products().await.is_empty());
        assert!(matches!(
            catalog.list_artisan_products("ghost").await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn invalid_product_fails_validation_before_existence() {
        let catalog = InMemoryCatalog::new();
        // artisan does not exist, but the payload problem is reported first
        let err = catalog
            .create_product("ghost", product_input("Bad", -50.0, 5))
            .await
            .unwrap_err();
        match err {
            ServiceError::Model(e) => assert_eq!(e.violations()[0].field, "price"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn concurrent_product_creation_keeps_every_insert() -> anyhow::Result<()> {
        let catalog = InMemoryCatalog::new();
        let a = catalog.create_artisan(artisan_input("Rosa", "Lace")).await?;

        let mut handles = Vec::new();
        for i in 0..32 {
            let catalog = Arc::clone(&catalog);
            let artisan_id = a.id.clone();
            handles.push(tokio::spawn(async move {
                catalog
                    .create_product(&artisan_id, product_input(&format!("item-{i}"), 1.0 + i as f64, i))
                    .await
            }));
        }
        for h in handles {
            h.await??;
        }
        assert_eq!(catalog.list_artisan_products(&a.id).await?.len(), 32);
        Ok(())
    }
}
