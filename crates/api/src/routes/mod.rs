pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// One route per operation, named after it. Queries take their input from
/// the query string, mutations from a JSON body.
///
/// ```text
/// /healthcheck                                      service and database health
///
/// /createCategory                                   POST   create category
/// /getCategories                                    GET    list categories
///
/// /createProduct                                    POST   create product
/// /getProducts                                      GET    list products
/// /getProductsByCategory?categorySlug=              GET    products in a category
/// /getProductBySlug?slug=                           GET    product or null
/// /getFeaturedProducts?limit=                       GET    featured products
/// /updateProduct                                    POST   partial update
///
/// /createReview                                     POST   create review
/// /getProductReviews?productId=                     GET    reviews of a product
///
/// /createProsCons                                   POST   create pro or con
/// /getProductProsCons?productId=                    GET    pros and cons of a product
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        // Categories
        .route("/createCategory", post(handlers::category::create))
        .route("/getCategories", get(handlers::category::list))
        // Products
        .route("/createProduct", post(handlers::product::create))
        .route("/getProducts", get(handlers::product::list))
        .route(
            "/getProductsByCategory",
            get(handlers::product::list_by_category),
        )
        .route("/getProductBySlug", get(handlers::product::get_by_slug))
        .route("/getFeaturedProducts", get(handlers::product::list_featured))
        .route("/updateProduct", post(handlers::product::update))
        // Reviews
        .route("/createReview", post(handlers::review::create))
        .route("/getProductReviews", get(handlers::review::list_by_product))
        // Pros and cons
        .route("/createProsCons", post(handlers::pros_cons::create))
        .route("/getProductProsCons", get(handlers::pros_cons::list_by_product))
}
