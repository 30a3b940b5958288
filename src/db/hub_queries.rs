use crate::models::Hub;
use sqlx::PgPool;
use uuid::Uuid;

use super::hub_repository::RawHubRow;

#[derive(sqlx::FromRow)]
struct HubRow {
    id: Uuid,
    name: String,
    kind: String,
    lat: f64,
    lng: f64,
    active: bool,
}

impl HubRow {
    fn into_raw(self) -> RawHubRow {
        RawHubRow {
            id: self.id,
            name: self.name,
            kind: self.kind,
            lat: self.lat,
            lng: self.lng,
            active: self.active,
        }
    }
}

pub async fn find_active_hubs(pool: &PgPool) -> Result<Vec<Hub>, sqlx::Error> {
    let rows = sqlx::query_as::<_, HubRow>(
        "SELECT id, name, kind, lat, lng, active
         FROM hubs
         WHERE active
         ORDER BY sort_order, name",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .filter_map(|row| row.into_raw().into_hub())
        .collect())
}

/// Insert a hub at the end of the registry order.
pub async fn insert_hub(pool: &PgPool, hub: &Hub) -> Result<Uuid, sqlx::Error> {
    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO hubs (id, name, kind, lat, lng, active, sort_order)
        VALUES ($1, $2, $3, $4, $5, $6,
                (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM hubs))
        RETURNING id
        "#,
    )
    .bind(hub.id)
    .bind(&hub.name)
    .bind(hub.kind.to_string())
    .bind(hub.coordinates.lat)
    .bind(hub.coordinates.lng)
    .bind(hub.active)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
