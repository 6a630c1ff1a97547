//! Gallery route handlers (admin only).

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::db::galleries::{GalleryInput, GalleryRepository};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::response::{created, ok};
use crate::state::AppState;

/// List all galleries, newest first.
///
/// GET /api/galleries
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let galleries = GalleryRepository::new(state.pool()).list().await?;
    Ok(ok(galleries))
}

/// Fetch a gallery by id.
///
/// GET /api/galleries/{id}
pub async fn show(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let gallery = GalleryRepository::new(state.pool()).get(id).await?;
    Ok(ok(gallery))
}

/// Create a gallery; slug derives from the title when absent.
///
/// POST /api/galleries
#[instrument(skip_all, fields(title = %params.title))]
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(params): Json<GalleryInput>,
) -> Result<Response, AppError> {
    if params.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }

    let gallery = GalleryRepository::new(state.pool()).create(params).await?;
    Ok(created(gallery))
}

/// Replace a gallery's mutable fields.
///
/// PUT /api/galleries/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn replace(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(params): Json<GalleryInput>,
) -> Result<Response, AppError> {
    let gallery = GalleryRepository::new(state.pool())
        .replace(id, params)
        .await?;
    Ok(ok(gallery))
}

/// Delete a gallery.
///
/// DELETE /api/galleries/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    GalleryRepository::new(state.pool()).delete(id).await?;
    Ok(ok(json!({ "deleted": true })))
}
