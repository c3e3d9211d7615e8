use chrono::Utc;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{Product, ProductFields, Stats};

/// All rows, newest first.
pub async fn fetch_all_products(pool: &PgPool) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, category, quantity, price, description, created_at, updated_at
         FROM products
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn fetch_product_by_id(pool: &PgPool, id: i32) -> AppResult<Product> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, category, quantity, price, description, created_at, updated_at
         FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
}

/// Inserts a row and returns the server-assigned id. Both timestamp columns
/// default to the same transaction timestamp, so created_at == updated_at.
pub async fn insert_product(pool: &PgPool, fields: &ProductFields) -> AppResult<i32> {
    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO products (name, category, quantity, price, description)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(&fields.name)
    .bind(&fields.category)
    .bind(fields.quantity)
    .bind(fields.price)
    .bind(&fields.description)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Full replacement of all mutable fields; refreshes updated_at.
pub async fn update_product(pool: &PgPool, id: i32, fields: &ProductFields) -> AppResult<()> {
    let result = sqlx::query(
        "UPDATE products
         SET name        = $1,
             category    = $2,
             quantity    = $3,
             price       = $4,
             description = $5,
             updated_at  = $6
         WHERE id = $7",
    )
    .bind(&fields.name)
    .bind(&fields.category)
    .bind(fields.quantity)
    .bind(fields.price)
    .bind(&fields.description)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Product {} not found", id)));
    }
    Ok(())
}

pub async fn delete_product(pool: &PgPool, id: i32) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Product {} not found", id)));
    }
    Ok(())
}

pub async fn fetch_stats(pool: &PgPool) -> AppResult<Stats> {
    let stats = sqlx::query_as::<_, Stats>(
        "SELECT COUNT(*)                              AS total_products,
                COALESCE(SUM(quantity), 0)::bigint    AS total_items,
                COUNT(DISTINCT category)              AS categories,
                COALESCE(SUM(quantity * price), 0)    AS total_value
         FROM products",
    )
    .fetch_one(pool)
    .await?;

    Ok(stats)
}
