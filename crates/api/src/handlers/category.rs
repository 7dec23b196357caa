//! Handlers for categories.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gearshelf_core::category::{Category, CreateCategoryInput};
use gearshelf_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/createCategory
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCategoryInput>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = Category::from(CategoryRepo::create(&state.pool, &input).await?);
    tracing::info!(category_id = category.id, slug = %category.slug, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/getCategories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories: Vec<Category> = CategoryRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();
    tracing::debug!(count = categories.len(), "Listed categories");
    Ok(Json(categories))
}
