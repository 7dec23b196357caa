//! Review row model.

use gearshelf_core::review::Review;
use gearshelf_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewRow {
    pub id: DbId,
    pub product_id: DbId,
    pub title: String,
    pub content: String,
    pub rating: i32,
    pub author_name: String,
    pub is_verified: bool,
    pub created_at: Timestamp,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            product_id: row.product_id,
            title: row.title,
            content: row.content,
            rating: row.rating,
            author_name: row.author_name,
            is_verified: row.is_verified,
            created_at: row.created_at,
        }
    }
}
