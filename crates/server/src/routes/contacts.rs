//! Contact message route handlers.
//!
//! Submission is public; reading and managing messages is admin-only.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::db::contacts::{ContactRepository, CreateContact, PatchContact};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::response::{created, ok};
use crate::state::AppState;

use super::is_valid_email;

/// Submit a contact message from the public site.
///
/// POST /api/contacts (public)
#[instrument(skip(state, params))]
pub async fn submit(
    State(state): State<AppState>,
    Json(params): Json<CreateContact>,
) -> Result<Response, AppError> {
    if params.name.trim().is_empty() || params.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Name and message are required".to_string(),
        ));
    }
    if !is_valid_email(params.email.trim()) {
        return Err(AppError::BadRequest(
            "Please enter a valid email address".to_string(),
        ));
    }

    let contact = ContactRepository::new(state.pool()).create(params).await?;
    tracing::info!(id = %contact.id, "contact message submitted");
    Ok(created(contact))
}

/// List all contact messages, newest first.
///
/// GET /api/contacts
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let contacts = ContactRepository::new(state.pool()).list().await?;
    Ok(ok(contacts))
}

/// Set a contact message's read flag.
///
/// PATCH /api/contacts/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn patch(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchContact>,
) -> Result<Response, AppError> {
    let contact = ContactRepository::new(state.pool())
        .set_read(id, body.read)
        .await?;
    Ok(ok(contact))
}

/// Delete a contact message.
///
/// DELETE /api/contacts/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    ContactRepository::new(state.pool()).delete(id).await?;
    Ok(ok(json!({ "deleted": true })))
}
