use crate::constants::{DB_ACQUIRE_TIMEOUT_SECONDS, DB_MAX_CONNECTIONS};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub mod hub_repository;
mod hub_queries;
pub mod product_catalog;
mod product_queries;
#[cfg(feature = "sqlite")]
pub mod sqlite_repo;
pub mod static_repo;

pub use hub_repository::{HubRepository, PgHubRepository};
pub use product_catalog::{PgProductCatalog, ProductCatalog};
#[cfg(feature = "sqlite")]
pub use sqlite_repo::{SqliteHubRepository, SqliteProductCatalog};
pub use static_repo::{StaticHubRepository, StaticProductCatalog};

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DB_MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(DB_ACQUIRE_TIMEOUT_SECONDS))
        .connect(database_url)
        .await
}

/// Escape LIKE wildcards so a user-supplied fragment matches literally.
/// Pair with `ESCAPE '\'` in the query.
pub(crate) fn like_pattern(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for c in fragment.trim().chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
