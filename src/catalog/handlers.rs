//! REST API handlers for catalog browsing
//!
//! All catalog endpoints are read-only and session-free: filtering is a pure
//! function of the query, re-evaluated on every request.

use super::models::{Product, CATEGORY_ALL};
use crate::cart::state::SharedState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

/// Creates routes for catalog browsing
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(product_detail))
        .route("/products/:id/reviews", get(list_reviews))
        .route("/categories", get(list_categories))
}

/// Query string for product listings
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

/// Endpoint: GET /products?category=...
/// Lists products, filtered to one category unless the filter is absent or
/// the sentinel "all".
async fn list_products(
    State(state): State<SharedState>,
    Query(query): Query<ListProductsQuery>,
) -> impl IntoResponse {
    let category = query.category.as_deref().unwrap_or(CATEGORY_ALL);
    Json(state.catalog.products_by_category(category))
}

/// Endpoint: GET /products/:id
/// Returns the full catalog entry for the detail view.
async fn product_detail(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>, StatusCode> {
    state
        .catalog
        .product(id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Endpoint: GET /products/:id/reviews
/// Lists reviews for a product. An empty list is a normal response, not an
/// error.
async fn list_reviews(State(state): State<SharedState>, Path(id): Path<u64>) -> impl IntoResponse {
    Json(state.catalog.reviews_for_product(id))
}

/// Endpoint: GET /categories
/// Returns the category table for the storefront chrome.
async fn list_categories(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.catalog.categories().to_vec())
}
