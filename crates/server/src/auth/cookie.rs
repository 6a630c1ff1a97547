//! Session cookie adapter.
//!
//! Builds and clears the `adminToken` cookie. The token value is never
//! readable from client-side script: HTTP-only is a security invariant
//! here, not a convenience.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use super::token::TokenCodec;

/// Session cookie name.
pub const SESSION_COOKIE: &str = "adminToken";

/// Build the session cookie carrying a freshly issued token.
///
/// HTTP-only, SameSite=Strict, path `/`, max-age 24h. `Secure` follows the
/// deployment scheme so local HTTP development still works.
#[must_use]
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(Duration::seconds(TokenCodec::lifetime_seconds()))
        .build()
}

/// Build an expired cookie that clears the session on the client.
#[must_use]
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, String::new()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("token-value".to_string(), true);

        assert_eq!(cookie.name(), "adminToken");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::hours(24)));
    }

    #[test]
    fn test_insecure_only_for_http_deployments() {
        let cookie = session_cookie("t".to_string(), false);
        assert_eq!(cookie.secure(), Some(false));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie(true);

        assert_eq!(cookie.name(), "adminToken");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
