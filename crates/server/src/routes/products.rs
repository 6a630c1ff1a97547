//! Product route handlers (admin only).

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::db::products::{ProductInput, ProductRepository};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::response::{created, ok};
use crate::state::AppState;

/// List all products, newest first.
///
/// GET /api/products
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(ok(products))
}

/// Fetch a product by id.
///
/// GET /api/products/{id}
pub async fn show(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let product = ProductRepository::new(state.pool()).get(id).await?;
    Ok(ok(product))
}

/// Create a product; slug derives from the name when absent.
///
/// POST /api/products
#[instrument(skip_all, fields(name = %params.name))]
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(params): Json<ProductInput>,
) -> Result<Response, AppError> {
    if params.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    let product = ProductRepository::new(state.pool()).create(params).await?;
    Ok(created(product))
}

/// Replace a product's mutable fields.
///
/// PUT /api/products/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn replace(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(params): Json<ProductInput>,
) -> Result<Response, AppError> {
    let product = ProductRepository::new(state.pool())
        .replace(id, params)
        .await?;
    Ok(ok(product))
}

/// Delete a product.
///
/// DELETE /api/products/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    ProductRepository::new(state.pool()).delete(id).await?;
    Ok(ok(json!({ "deleted": true })))
}
