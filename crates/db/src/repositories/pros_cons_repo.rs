//! Repository for the `pros_cons` table.

use gearshelf_core::pros_cons::CreateProsConsInput;
use gearshelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::pros_cons::ProsConsRow;

/// Column list for pros_cons queries.
const COLUMNS: &str = "id, product_id, type, content, created_at";

/// Provides create and read operations for pros/cons entries.
pub struct ProsConsRepo;

impl ProsConsRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProsConsInput,
    ) -> Result<ProsConsRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO pros_cons (product_id, type, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProsConsRow>(&query)
            .bind(input.product_id)
            .bind(input.kind.as_str())
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List both pros and cons for a product in insertion order.
    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ProsConsRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pros_cons WHERE product_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, ProsConsRow>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }
}
