//! Handlers for product pros and cons.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gearshelf_core::error::CoreError;
use gearshelf_core::pros_cons::{CreateProsConsInput, ProsCons};
use gearshelf_core::query::GetProductReviewsInput;
use gearshelf_db::models::pros_cons::ProsConsRow;
use gearshelf_db::repositories::ProsConsRepo;

use crate::error::AppResult;
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// A stored `type` outside `pro`/`con` means the table was written around
/// its check constraint.
fn to_entity(row: ProsConsRow) -> Result<ProsCons, CoreError> {
    let id = row.id;
    ProsCons::try_from(row)
        .map_err(|e| CoreError::Internal(format!("pros_cons row {id} is unreadable: {e}")))
}

/// POST /api/v1/createProsCons
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProsConsInput>,
) -> AppResult<(StatusCode, Json<ProsCons>)> {
    let entry = to_entity(ProsConsRepo::create(&state.pool, &input).await?)?;
    tracing::info!(
        pros_cons_id = entry.id,
        product_id = entry.product_id,
        kind = %entry.kind,
        "Pros/cons entry created"
    );
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/getProductProsCons?productId=
///
/// Pros and cons come back together in insertion order.
pub async fn list_by_product(
    State(state): State<AppState>,
    ValidatedQuery(input): ValidatedQuery<GetProductReviewsInput>,
) -> AppResult<Json<Vec<ProsCons>>> {
    let entries = ProsConsRepo::list_by_product(&state.pool, input.product_id)
        .await?
        .into_iter()
        .map(to_entity)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(product_id = input.product_id, count = entries.len(), "Listed pros/cons");
    Ok(Json(entries))
}
