//! Auth route handlers: login, logout, session introspection.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::auth::{clear_session_cookie, session_cookie};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::response::{ApiFailure, ok};
use crate::state::AppState;

/// Login form payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Validate the shared admin password and issue a session cookie.
///
/// POST /api/auth/login
///
/// The failure message is generic on purpose; there is no lockout or rate
/// limiting at this layer.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AppError> {
    if body.password != state.config().admin_password.expose_secret() {
        tracing::warn!("failed admin login attempt");
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(ApiFailure::new("Invalid password")),
        )
            .into_response());
    }

    let token = state
        .tokens()
        .issue_admin()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let jar = jar.add(session_cookie(token, state.config().is_secure()));

    tracing::info!("admin logged in");
    Ok((jar, ok(json!({ "role": "admin" }))).into_response())
}

/// Clear the session cookie.
///
/// POST /api/auth/logout
///
/// Tokens are never revoked server-side; this only discards the client's
/// copy, and the token still expires 24h after issuance.
pub async fn logout(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Response {
    let jar = jar.add(clear_session_cookie(state.config().is_secure()));
    (jar, ok(json!({ "loggedOut": true }))).into_response()
}

/// Return the current session's role.
///
/// GET /api/auth/me
pub async fn me(RequireAdmin(admin): RequireAdmin) -> Response {
    ok(admin)
}
