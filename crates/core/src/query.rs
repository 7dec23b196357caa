//! Inputs for the read operations.
//!
//! Field names follow the wire format (`categorySlug`, `productId`).

use serde::Deserialize;
use validator::Validate;

use crate::types::DbId;

/// Number of featured products returned when no limit is given.
pub const DEFAULT_FEATURED_LIMIT: i64 = 10;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetProductsByCategoryInput {
    pub category_slug: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GetProductBySlugInput {
    pub slug: String,
}

/// Product scope for `getProductReviews` and `getProductProsCons`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetProductReviewsInput {
    pub product_id: DbId,
}

/// Any positive limit is accepted; zero or negative never reaches `LIMIT`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GetFeaturedProductsInput {
    #[serde(default = "default_featured_limit")]
    #[validate(range(min = 1))]
    pub limit: i64,
}

impl Default for GetFeaturedProductsInput {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FEATURED_LIMIT,
        }
    }
}

fn default_featured_limit() -> i64 {
    DEFAULT_FEATURED_LIMIT
}
