//! Authentication extractor for admin API handlers.
//!
//! The route guard already covers dashboard pages; API handlers extract
//! [`RequireAdmin`] as well, so a handler reached by any path still refuses
//! to touch data without a valid session (defense in depth).

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::auth::SESSION_COOKIE;
use crate::error::AppError;
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Extractor that requires an admin session.
///
/// Rejects with 401 `{"error":"Unauthorized"}` when the session cookie is
/// missing, invalid, expired, or carries a non-admin role - the client
/// cannot tell which.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.role)
/// }
/// ```
pub struct RequireAdmin(pub CurrentAdmin);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar.get(SESSION_COOKIE).ok_or(AppError::Unauthorized)?;

        let claims = state
            .tokens()
            .verify(cookie.value())
            .map_err(|_| AppError::Unauthorized)?;

        if !claims.is_admin() {
            return Err(AppError::Unauthorized);
        }

        Ok(Self(CurrentAdmin { role: claims.role }))
    }
}
