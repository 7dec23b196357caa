//! Repository for the `reviews` table.

use gearshelf_core::review::CreateReviewInput;
use gearshelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::ReviewRow;

/// Column list for reviews queries.
const COLUMNS: &str = "id, product_id, title, content, rating, author_name, is_verified, created_at";

/// Provides create and read operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReviewInput) -> Result<ReviewRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (product_id, title, content, rating, author_name, is_verified)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReviewRow>(&query)
            .bind(input.product_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.rating)
            .bind(&input.author_name)
            .bind(input.is_verified)
            .fetch_one(pool)
            .await
    }

    /// List reviews for a product, newest first.
    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ReviewRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE product_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ReviewRow>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }
}
