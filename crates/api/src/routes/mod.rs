//! Route tree for the API.

pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /products            GET list, POST create
/// /products/{id}       GET show, PUT update, DELETE destroy
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/products", product::router())
}
