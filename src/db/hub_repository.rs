use crate::error::Result;
use crate::models::{Coordinates, Hub, HubKind};
use async_trait::async_trait;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Shared row-to-Hub conversion (used by both Pg and SQLite repos)
// ---------------------------------------------------------------------------

/// Raw hub fields extracted from a database row, before validation.
pub(super) struct RawHubRow {
    pub id: Uuid,
    pub name: String,
    pub kind: String,
    pub lat: f64,
    pub lng: f64,
    pub active: bool,
}

impl RawHubRow {
    /// Rows with unusable coordinates are dropped: measuring freight from a
    /// made-up origin is worse than not offering that hub at all.
    pub fn into_hub(self) -> Option<Hub> {
        let coordinates = match Coordinates::new(self.lat, self.lng) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(
                    "Invalid coordinates for hub '{}' (id: {}): {}. Skipping.",
                    self.name,
                    self.id,
                    e
                );
                return None;
            }
        };

        let kind = self.kind.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid hub kind '{}' for hub '{}' (id: {}), defaulting to warehouse",
                self.kind,
                self.name,
                self.id
            );
            HubKind::Warehouse
        });

        Some(Hub {
            id: self.id,
            name: self.name,
            coordinates,
            kind,
            active: self.active,
        })
    }
}

/// Source of logistics hubs. Implementations return active hubs in a stable
/// registry order, which is what nearest-hub tie-breaking relies on.
#[async_trait]
pub trait HubRepository: Send + Sync {
    async fn find_active(&self) -> Result<Vec<Hub>>;

    async fn insert(&self, hub: &Hub) -> Result<Uuid>;

    async fn count(&self) -> Result<i64>;
}

pub struct PgHubRepository {
    pool: sqlx::PgPool,
}

impl PgHubRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HubRepository for PgHubRepository {
    async fn find_active(&self) -> Result<Vec<Hub>> {
        Ok(super::hub_queries::find_active_hubs(&self.pool).await?)
    }

    async fn insert(&self, hub: &Hub) -> Result<Uuid> {
        Ok(super::hub_queries::insert_hub(&self.pool, hub).await?)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hubs WHERE active")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
