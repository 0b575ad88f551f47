//! Handlers for the `/products` resource.
//!
//! The product schema is client-defined: request bodies are arbitrary JSON
//! objects stored verbatim. Every success payload carrying a product goes
//! through [`ProductResource`] so the storage row shape never leaks — earlier
//! generations of this surface skipped the transform on writes, which was an
//! oversight, not a contract.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use shopfront_core::error::CoreError;
use shopfront_core::types::DbId;
use shopfront_db::models::product::{ProductInput, ProductResource};
use shopfront_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/v1/products
///
/// Unfiltered, unpaginated listing. An empty store is a normal success.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<Vec<ProductResource>>>> {
    let products = ProductRepo::list_all(&state.pool).await?;
    let data: Vec<ProductResource> = products.into_iter().map(ProductResource::from).collect();

    Ok(Json(Envelope::success(
        data,
        "Products retrieved successfully",
    )))
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> AppResult<(StatusCode, Json<Envelope<ProductResource>>)> {
    let attributes = serde_json::Value::Object(input);
    let product = ProductRepo::create(&state.pool, &attributes).await?;

    tracing::info!(product_id = product.id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(
            ProductResource::from(product),
            "Products saved successfully",
        )),
    ))
}

/// GET /api/v1/products/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<ProductResource>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Products",
            id,
        }))?;

    Ok(Json(Envelope::success(
        ProductResource::from(product),
        "Product retrieved successfully",
    )))
}

/// PUT /api/v1/products/{id}
///
/// Full replace: the stored attributes become exactly the request body.
/// A missing id writes nothing and reports not-found.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProductInput>,
) -> AppResult<Json<Envelope<ProductResource>>> {
    let attributes = serde_json::Value::Object(input);
    let product = ProductRepo::update(&state.pool, id, &attributes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Products",
            id,
        }))?;

    tracing::info!(product_id = product.id, "Product updated");

    Ok(Json(Envelope::success(
        ProductResource::from(product),
        "Products updated successfully",
    )))
}

/// DELETE /api/v1/products/{id}
///
/// On success the envelope carries the deleted identifier, not the record.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<DbId>>> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Products",
            id,
        }));
    }

    tracing::info!(product_id = id, "Product deleted");

    Ok(Json(Envelope::success(id, "Products deleted successfully")))
}
