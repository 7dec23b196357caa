//! Repository for the `categories` table.

use gearshelf_core::category::CreateCategoryInput;
use sqlx::PgPool;

use crate::models::category::CategoryRow;

/// Column list for categories queries.
const COLUMNS: &str = "id, name, slug, description, created_at";

/// Provides create and read operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// A duplicate slug fails with the `uq_categories_slug` violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCategoryInput,
    ) -> Result<CategoryRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, slug, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List all categories in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(pool)
            .await
    }
}
