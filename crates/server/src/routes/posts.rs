//! Blog post route handlers (admin only).

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::db::posts::{PostInput, PostRepository};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::response::{created, ok};
use crate::state::AppState;

/// List all posts, newest first.
///
/// GET /api/posts
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let posts = PostRepository::new(state.pool()).list().await?;
    Ok(ok(posts))
}

/// Fetch a post by id.
///
/// GET /api/posts/{id}
pub async fn show(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let post = PostRepository::new(state.pool()).get(id).await?;
    Ok(ok(post))
}

/// Create a post; slug derives from the title when absent.
///
/// POST /api/posts
#[instrument(skip_all, fields(title = %params.title))]
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(params): Json<PostInput>,
) -> Result<Response, AppError> {
    if params.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }

    let post = PostRepository::new(state.pool()).create(params).await?;
    Ok(created(post))
}

/// Replace a post's mutable fields.
///
/// PUT /api/posts/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn replace(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(params): Json<PostInput>,
) -> Result<Response, AppError> {
    let post = PostRepository::new(state.pool()).replace(id, params).await?;
    Ok(ok(post))
}

/// Delete a post.
///
/// DELETE /api/posts/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    PostRepository::new(state.pool()).delete(id).await?;
    Ok(ok(json!({ "deleted": true })))
}
