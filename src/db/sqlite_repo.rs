use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Hub, Product};

use super::hub_repository::RawHubRow;
use super::{like_pattern, HubRepository, ProductCatalog};

// ---------------------------------------------------------------------------
// Row types (SQLite-specific)
// ---------------------------------------------------------------------------

#[derive(sqlx::FromRow)]
struct SqliteHubRow {
    id: String,
    name: String,
    kind: String,
    lat: f64,
    lng: f64,
    active: bool,
}

impl SqliteHubRow {
    fn into_hub(self) -> Option<Hub> {
        let id = parse_id(&self.id, &self.name);
        RawHubRow {
            id,
            name: self.name,
            kind: self.kind,
            lat: self.lat,
            lng: self.lng,
            active: self.active,
        }
        .into_hub()
    }
}

#[derive(sqlx::FromRow)]
struct SqliteProductRow {
    id: String,
    name: String,
    unit_weight_kg: Option<f64>,
}

fn parse_id(raw: &str, name: &str) -> Uuid {
    raw.parse::<Uuid>().unwrap_or_else(|_| {
        tracing::warn!("Invalid UUID '{}' for '{}', using nil", raw, name);
        Uuid::nil()
    })
}

/// Create the SQLite schema. Idempotent.
pub async fn create_schema(pool: &SqlitePool) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS hubs (
            rowid INTEGER PRIMARY KEY,
            id TEXT UNIQUE NOT NULL,
            name TEXT NOT NULL,
            kind TEXT NOT NULL,
            lat REAL NOT NULL,
            lng REAL NOT NULL,
            active INTEGER NOT NULL DEFAULT 1
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            rowid INTEGER PRIMARY KEY,
            id TEXT UNIQUE NOT NULL,
            name TEXT NOT NULL,
            unit_weight_kg REAL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Repositories
// ---------------------------------------------------------------------------

/// Hub registry in an embedded SQLite file. Registry order is insertion
/// order (rowid).
pub struct SqliteHubRepository {
    pool: SqlitePool,
}

impl SqliteHubRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HubRepository for SqliteHubRepository {
    async fn find_active(&self) -> Result<Vec<Hub>> {
        let rows = sqlx::query_as::<_, SqliteHubRow>(
            "SELECT id, name, kind, lat, lng, active FROM hubs WHERE active = 1 ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().filter_map(SqliteHubRow::into_hub).collect())
    }

    async fn insert(&self, hub: &Hub) -> Result<Uuid> {
        sqlx::query(
            "INSERT INTO hubs (id, name, kind, lat, lng, active) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(hub.id.to_string())
        .bind(&hub.name)
        .bind(hub.kind.to_string())
        .bind(hub.coordinates.lat)
        .bind(hub.coordinates.lng)
        .bind(hub.active)
        .execute(&self.pool)
        .await?;
        Ok(hub.id)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hubs WHERE active = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

pub struct SqliteProductCatalog {
    pool: SqlitePool,
}

impl SqliteProductCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCatalog for SqliteProductCatalog {
    async fn find_by_name(&self, fragment: &str) -> Result<Option<Product>> {
        if fragment.trim().is_empty() {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, SqliteProductRow>(
            "SELECT id, name, unit_weight_kg FROM products
             WHERE lower(name) LIKE lower(?1) ESCAPE '\\'
             ORDER BY rowid
             LIMIT 1",
        )
        .bind(like_pattern(fragment))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Product {
            id: parse_id(&row.id, &row.name),
            name: row.name,
            unit_weight_kg: row.unit_weight_kg,
        }))
    }

    async fn insert(&self, product: &Product) -> Result<Uuid> {
        sqlx::query("INSERT INTO products (id, name, unit_weight_kg) VALUES (?1, ?2, ?3)")
            .bind(product.id.to_string())
            .bind(&product.name)
            .bind(product.unit_weight_kg)
            .execute(&self.pool)
            .await?;
        Ok(product.id)
    }
}

#[cfg(test)]
#[path = "sqlite_repo_tests.rs"]
mod sqlite_repo_tests;
