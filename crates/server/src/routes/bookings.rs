//! Booking route handlers.
//!
//! Submission is public (visitors book from the site); everything else is
//! admin-only.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::db::bookings::{BookingRepository, CreateBooking, PatchBooking};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::response::{created, ok};
use crate::state::AppState;

use super::is_valid_email;

/// Submit a booking request from the public site.
///
/// POST /api/bookings (public)
#[instrument(skip(state, params), fields(service = %params.service))]
pub async fn submit(
    State(state): State<AppState>,
    Json(params): Json<CreateBooking>,
) -> Result<Response, AppError> {
    if params.name.trim().is_empty() || params.service.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Name and service are required".to_string(),
        ));
    }
    if !is_valid_email(params.email.trim()) {
        return Err(AppError::BadRequest(
            "Please enter a valid email address".to_string(),
        ));
    }

    let booking = BookingRepository::new(state.pool()).create(params).await?;
    tracing::info!(id = %booking.id, "booking submitted");
    Ok(created(booking))
}

/// List all bookings, newest first.
///
/// GET /api/bookings
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let bookings = BookingRepository::new(state.pool()).list().await?;
    Ok(ok(bookings))
}

/// Fetch a booking by id.
///
/// GET /api/bookings/{id}
pub async fn show(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let booking = BookingRepository::new(state.pool()).get(id).await?;
    Ok(ok(booking))
}

/// Patch a booking's status and/or notes.
///
/// PATCH /api/bookings/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn patch(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PatchBooking>,
) -> Result<Response, AppError> {
    let booking = BookingRepository::new(state.pool()).patch(id, body).await?;
    Ok(ok(booking))
}

/// Delete a booking.
///
/// DELETE /api/bookings/{id}
#[instrument(skip_all, fields(id = %id))]
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    BookingRepository::new(state.pool()).delete(id).await?;
    Ok(ok(json!({ "deleted": true })))
}
