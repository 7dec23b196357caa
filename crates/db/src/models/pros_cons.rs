//! Pros/cons row model.

use gearshelf_core::error::CoreError;
use gearshelf_core::pros_cons::ProsCons;
use gearshelf_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `pros_cons` table. `type` is stored as checked text.
#[derive(Debug, Clone, FromRow)]
pub struct ProsConsRow {
    pub id: DbId,
    pub product_id: DbId,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub content: String,
    pub created_at: Timestamp,
}

impl TryFrom<ProsConsRow> for ProsCons {
    type Error = CoreError;

    fn try_from(row: ProsConsRow) -> Result<Self, Self::Error> {
        Ok(ProsCons {
            id: row.id,
            product_id: row.product_id,
            kind: row.kind.parse()?,
            content: row.content,
            created_at: row.created_at,
        })
    }
}
