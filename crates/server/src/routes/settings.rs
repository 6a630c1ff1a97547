//! Site settings route handlers.
//!
//! Reading is public (the marketing pages need titles and social links
//! without a session); writing is admin-only.

use axum::Json;
use axum::extract::State;
use axum::response::Response;
use tracing::instrument;

use crate::db::settings::{get_settings, put_settings};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::SiteSettings;
use crate::response::ok;
use crate::state::AppState;

/// Read the site settings, creating defaults on first read.
///
/// GET /api/settings (public)
pub async fn show(State(state): State<AppState>) -> Result<Response, AppError> {
    let settings = get_settings(state.pool()).await?;
    Ok(ok(settings))
}

/// Replace the site settings document.
///
/// PUT /api/settings
#[instrument(skip_all)]
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(settings): Json<SiteSettings>,
) -> Result<Response, AppError> {
    let saved = put_settings(state.pool(), &settings).await?;
    Ok(ok(saved))
}
