//! Handlers for products.
//!
//! Prices leave the API as plain numbers and are stored as `NUMERIC(10,2)`.
//! Every handler converts through the row models, so a product is never
//! returned with its storage-form price.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gearshelf_core::error::CoreError;
use gearshelf_core::product::{CreateProductInput, Product, UpdateProductInput};
use gearshelf_core::query::{GetFeaturedProductsInput, GetProductBySlugInput, GetProductsByCategoryInput};
use gearshelf_db::models::product::{NewProduct, ProductChanges, ProductRow};
use gearshelf_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::state::AppState;

fn to_product(row: ProductRow) -> Result<Product, CoreError> {
    let id = row.id;
    Product::try_from(row)
        .map_err(|e| CoreError::Internal(format!("product {id} has an unreadable price: {e}")))
}

fn to_products(rows: Vec<ProductRow>) -> Result<Vec<Product>, CoreError> {
    rows.into_iter().map(to_product).collect()
}

/// POST /api/v1/createProduct
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProductInput>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let new_product =
        NewProduct::try_from(&input).map_err(|e| CoreError::Validation(e.to_string()))?;
    let product = to_product(ProductRepo::create(&state.pool, &new_product).await?)?;
    tracing::info!(
        product_id = product.id,
        category_id = product.category_id,
        slug = %product.slug,
        "Product created"
    );
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/v1/getProducts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = to_products(ProductRepo::list(&state.pool).await?)?;
    tracing::debug!(count = products.len(), "Listed products");
    Ok(Json(products))
}

/// GET /api/v1/getProductsByCategory?categorySlug=
pub async fn list_by_category(
    State(state): State<AppState>,
    ValidatedQuery(input): ValidatedQuery<GetProductsByCategoryInput>,
) -> AppResult<Json<Vec<Product>>> {
    let rows = ProductRepo::list_by_category_slug(&state.pool, &input.category_slug).await?;
    let products = to_products(rows)?;
    tracing::debug!(
        category_slug = %input.category_slug,
        count = products.len(),
        "Listed products by category"
    );
    Ok(Json(products))
}

/// GET /api/v1/getProductBySlug?slug=
///
/// An unknown slug is a `200` with a `null` body, not a 404.
pub async fn get_by_slug(
    State(state): State<AppState>,
    ValidatedQuery(input): ValidatedQuery<GetProductBySlugInput>,
) -> AppResult<Json<Option<Product>>> {
    let product = ProductRepo::find_by_slug(&state.pool, &input.slug)
        .await?
        .map(to_product)
        .transpose()?;
    tracing::debug!(slug = %input.slug, found = product.is_some(), "Looked up product by slug");
    Ok(Json(product))
}

/// GET /api/v1/getFeaturedProducts?limit=
pub async fn list_featured(
    State(state): State<AppState>,
    ValidatedQuery(input): ValidatedQuery<GetFeaturedProductsInput>,
) -> AppResult<Json<Vec<Product>>> {
    let products = to_products(ProductRepo::list_featured(&state.pool, input.limit).await?)?;
    tracing::debug!(limit = input.limit, count = products.len(), "Listed featured products");
    Ok(Json(products))
}

/// POST /api/v1/updateProduct
///
/// Writes only the fields present in the body and always bumps `updated_at`.
pub async fn update(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdateProductInput>,
) -> AppResult<Json<Product>> {
    let changes =
        ProductChanges::try_from(&input).map_err(|e| CoreError::Validation(e.to_string()))?;
    let row = ProductRepo::update(&state.pool, input.id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: input.id,
        }))?;
    let product = to_product(row)?;
    tracing::info!(product_id = product.id, "Product updated");
    Ok(Json(product))
}
