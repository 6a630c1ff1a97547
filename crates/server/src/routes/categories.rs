//! Category route handlers.
//!
//! Listing is public: the public site's navigation needs category data
//! without a session. Writes are admin-only.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::db::categories::{CategoryRepository, CreateCategory, UpdateCategory};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::response::{created, ok};
use crate::state::AppState;

/// List all categories, sorted by explicit order then name.
///
/// GET /api/categories (public)
pub async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(ok(categories))
}

/// Create a category.
///
/// POST /api/categories
#[instrument(skip_all, fields(name = %params.name))]
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(params): Json<CreateCategory>,
) -> Result<Response, AppError> {
    if params.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    let category = CategoryRepository::new(state.pool()).create(params).await?;
    Ok(created(category))
}

/// Update a category's mutable fields (slug is immutable).
///
/// PUT /api/categories/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(params): Json<UpdateCategory>,
) -> Result<Response, AppError> {
    let category = CategoryRepository::new(state.pool())
        .update(id, params)
        .await?;
    Ok(ok(category))
}

/// Delete a category and its direct children.
///
/// DELETE /api/categories/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    CategoryRepository::new(state.pool()).delete_cascade(id).await?;
    Ok(ok(json!({ "deleted": true })))
}
