use crate::error::Result;
use crate::models::Product;
use async_trait::async_trait;
use uuid::Uuid;

/// Product lookup used to turn an item count into a shipment weight.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// First product (in catalog order) whose name contains `fragment`,
    /// ignoring case.
    async fn find_by_name(&self, fragment: &str) -> Result<Option<Product>>;

    async fn insert(&self, product: &Product) -> Result<Uuid>;
}

pub struct PgProductCatalog {
    pool: sqlx::PgPool,
}

impl PgProductCatalog {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCatalog for PgProductCatalog {
    async fn find_by_name(&self, fragment: &str) -> Result<Option<Product>> {
        Ok(super::product_queries::find_product_by_name(&self.pool, fragment).await?)
    }

    async fn insert(&self, product: &Product) -> Result<Uuid> {
        Ok(super::product_queries::insert_product(&self.pool, product).await?)
    }
}
