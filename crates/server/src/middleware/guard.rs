//! Admin route guard.
//!
//! Structural, prefix-based gate over the dashboard: every path under
//! `/admin` - current and future - requires a valid admin session, with the
//! login page exempted so it stays reachable. Requests that fail the check
//! are redirected to the login page; no partial content is ever served for
//! a protected path without a valid session.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::auth::SESSION_COOKIE;
use crate::state::AppState;

/// Path prefix protected by the guard.
pub const ADMIN_PREFIX: &str = "/admin";

/// Login page, exempt from the guard (it must be reachable to log in).
pub const LOGIN_PAGE: &str = "/admin/login";

/// Gate requests to the admin dashboard.
///
/// Layered over the whole router; non-admin paths pass through unchanged.
pub async fn admin_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();

    if !is_protected(path) {
        return next.run(request).await;
    }

    let jar = CookieJar::from_headers(request.headers());
    let session = jar
        .get(SESSION_COOKIE)
        .map(|cookie| state.tokens().verify(cookie.value()));

    match session {
        Some(Ok(claims)) if claims.is_admin() => next.run(request).await,
        // Missing, invalid, expired, and wrong-role all redirect the same
        // way; the distinction is deliberately not exposed.
        _ => Redirect::to(LOGIN_PAGE).into_response(),
    }
}

/// Whether a path falls under the guarded prefix (minus exemptions).
fn is_protected(path: &str) -> bool {
    let under_admin = path == ADMIN_PREFIX || path.starts_with("/admin/");
    under_admin && path != LOGIN_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_paths_are_protected() {
        assert!(is_protected("/admin"));
        assert!(is_protected("/admin/"));
        assert!(is_protected("/admin/galleries"));
        assert!(is_protected("/admin/some/future/page"));
    }

    #[test]
    fn test_login_page_is_exempt() {
        assert!(!is_protected("/admin/login"));
    }

    #[test]
    fn test_public_paths_pass() {
        assert!(!is_protected("/"));
        assert!(!is_protected("/api/categories"));
        assert!(!is_protected("/administrator"));
    }
}
