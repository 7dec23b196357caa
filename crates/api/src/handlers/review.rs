//! Handlers for product reviews.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gearshelf_core::query::GetProductReviewsInput;
use gearshelf_core::review::{CreateReviewInput, Review};
use gearshelf_db::repositories::ReviewRepo;

use crate::error::AppResult;
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /api/v1/createReview
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateReviewInput>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = Review::from(ReviewRepo::create(&state.pool, &input).await?);
    tracing::info!(
        review_id = review.id,
        product_id = review.product_id,
        rating = review.rating,
        "Review created"
    );
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/v1/getProductReviews?productId=
///
/// Newest first; an unknown product yields an empty list.
pub async fn list_by_product(
    State(state): State<AppState>,
    ValidatedQuery(input): ValidatedQuery<GetProductReviewsInput>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews: Vec<Review> = ReviewRepo::list_by_product(&state.pool, input.product_id)
        .await?
        .into_iter()
        .map(Review::from)
        .collect();
    tracing::debug!(product_id = input.product_id, count = reviews.len(), "Listed reviews");
    Ok(Json(reviews))
}
