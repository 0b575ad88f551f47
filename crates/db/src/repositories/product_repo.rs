//! Repository for the `products` table.

use sqlx::PgPool;

use shopfront_core::types::DbId;

use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, attributes, created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product with the given attribute payload, returning the
    /// created row.
    pub async fn create(
        pool: &PgPool,
        attributes: &serde_json::Value,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (attributes)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(attributes)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID. Absence is a normal outcome, not an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Replace a product's attributes wholesale.
    ///
    /// Update semantics are "replace with input": the previous payload is
    /// discarded, not merged. Returns `None` if no row with the given `id`
    /// exists, in which case nothing is written.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        attributes: &serde_json::Value,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET attributes = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(attributes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
