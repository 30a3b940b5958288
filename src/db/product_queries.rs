use crate::models::Product;
use sqlx::PgPool;
use uuid::Uuid;

use super::like_pattern;

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    unit_weight_kg: Option<f64>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            unit_weight_kg: row.unit_weight_kg,
        }
    }
}

pub async fn find_product_by_name(
    pool: &PgPool,
    fragment: &str,
) -> Result<Option<Product>, sqlx::Error> {
    if fragment.trim().is_empty() {
        return Ok(None);
    }

    let row = sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, name, unit_weight_kg
        FROM products
        WHERE name ILIKE $1 ESCAPE '\'
        ORDER BY created_at, id
        LIMIT 1
        "#,
    )
    .bind(like_pattern(fragment))
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Product::from))
}

pub async fn insert_product(pool: &PgPool, product: &Product) -> Result<Uuid, sqlx::Error> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO products (id, name, unit_weight_kg) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(product.unit_weight_kg)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
