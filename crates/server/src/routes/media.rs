//! Media library route handlers.

use axum::extract::{Multipart, Path, State};
use axum::response::Response;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::db::media::MediaRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::response::{created, ok};
use crate::state::AppState;

/// List all media items, newest first.
///
/// GET /api/media
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let items = MediaRepository::new(state.pool()).list().await?;
    Ok(ok(items))
}

/// Upload an image to the host and register it in the media library.
///
/// POST /api/upload
///
/// Auth is intentionally not enforced at this layer; the deployment keeps
/// the endpoint off the public internet. The two external calls (upload,
/// then upsert) are sequential and uncompensated: an image can end up
/// hosted without a library record if the second step fails.
#[instrument(skip_all)]
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let Some(images) = state.images() else {
        tracing::error!("image host not configured");
        return Err(AppError::Internal(
            "image host not configured".to_string(),
        ));
    };

    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .unwrap_or("upload")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some((filename, data.to_vec()));
        }
    }

    let Some((filename, data)) = file else {
        return Err(AppError::BadRequest("Missing file field".to_string()));
    };
    if data.is_empty() {
        return Err(AppError::BadRequest("Empty file".to_string()));
    }

    let uploaded = images.upload(filename, data).await?;
    let item = MediaRepository::new(state.pool()).upsert(&uploaded).await?;
    Ok(created(item))
}

/// Delete a media item record.
///
/// DELETE /api/media/{id}
///
/// Removes only the library record; the hosted image itself is left in
/// place on the image host.
#[instrument(skip_all, fields(id = %id))]
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    MediaRepository::new(state.pool()).delete(id).await?;
    Ok(ok(json!({ "deleted": true })))
}
