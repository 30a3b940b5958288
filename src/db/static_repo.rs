//! In-memory registries for offline estimates and tests.

use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Hub, Product};

use super::{HubRepository, ProductCatalog};

#[derive(Default)]
pub struct StaticHubRepository {
    hubs: RwLock<Vec<Hub>>,
}

impl StaticHubRepository {
    pub fn new(hubs: Vec<Hub>) -> Self {
        Self {
            hubs: RwLock::new(hubs),
        }
    }
}

#[async_trait]
impl HubRepository for StaticHubRepository {
    async fn find_active(&self) -> Result<Vec<Hub>> {
        let hubs = self
            .hubs
            .read()
            .map_err(|_| AppError::HubRegistry("hub table lock poisoned".to_string()))?;
        Ok(hubs.iter().filter(|h| h.active).cloned().collect())
    }

    async fn insert(&self, hub: &Hub) -> Result<Uuid> {
        let mut hubs = self
            .hubs
            .write()
            .map_err(|_| AppError::HubRegistry("hub table lock poisoned".to_string()))?;
        hubs.push(hub.clone());
        Ok(hub.id)
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.find_active().await?.len() as i64)
    }
}

#[derive(Default)]
pub struct StaticProductCatalog {
    products: RwLock<Vec<Product>>,
}

impl StaticProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductCatalog for StaticProductCatalog {
    async fn find_by_name(&self, fragment: &str) -> Result<Option<Product>> {
        let products = self
            .products
            .read()
            .map_err(|_| AppError::Catalog("product table lock poisoned".to_string()))?;
        Ok(products.iter().find(|p| p.matches(fragment)).cloned())
    }

    async fn insert(&self, product: &Product) -> Result<Uuid> {
        let mut products = self
            .products
            .write()
            .map_err(|_| AppError::Catalog("product table lock poisoned".to_string()))?;
        products.push(product.clone());
        Ok(product.id)
    }
}
