//! Review contracts. Reviews are immutable once written.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: DbId,
    pub product_id: DbId,
    pub title: String,
    pub content: String,
    pub rating: i32,
    pub author_name: String,
    pub is_verified: bool,
    pub created_at: Timestamp,
}

/// Input for `createReview`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewInput {
    pub product_id: DbId,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[validate(length(min = 1))]
    pub author_name: String,
    #[serde(default)]
    pub is_verified: bool,
}
