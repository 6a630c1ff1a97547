//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! # Dashboard shell (guarded by path prefix, login page exempt)
//! GET    /admin                  - Dashboard shell
//! GET    /admin/login            - Login page
//!
//! # Auth
//! POST   /api/auth/login         - Validate password, issue session cookie
//! POST   /api/auth/logout        - Clear session cookie
//! GET    /api/auth/me            - Current session's role
//!
//! # Categories (GET public)
//! GET    /api/categories         - List (sorted by order, then name)
//! POST   /api/categories         - Create (admin)
//! PUT    /api/categories/{id}    - Update (admin; slug immutable)
//! DELETE /api/categories/{id}    - Cascade-delete (admin)
//!
//! # Galleries / Products / Posts (admin)
//! GET    /api/<resource>         - List, newest first
//! POST   /api/<resource>         - Create (slug auto-derived)
//! GET    /api/<resource>/{id}    - Fetch
//! PUT    /api/<resource>/{id}    - Replace
//! DELETE /api/<resource>/{id}    - Delete
//!
//! # Bookings (POST public, rest admin)
//! POST   /api/bookings           - Public submission
//! GET    /api/bookings           - List
//! GET    /api/bookings/{id}      - Fetch
//! PATCH  /api/bookings/{id}      - Patch status/notes
//! DELETE /api/bookings/{id}      - Delete
//!
//! # Contacts (POST public, rest admin)
//! POST   /api/contacts           - Public submission
//! GET    /api/contacts           - List
//! PATCH  /api/contacts/{id}      - Set read flag
//! DELETE /api/contacts/{id}      - Delete
//!
//! # Media
//! GET    /api/media              - List (admin)
//! DELETE /api/media/{id}         - Delete (admin)
//! POST   /api/upload             - Upload image, register media item
//!
//! # Settings (GET public)
//! GET    /api/settings           - Read (creates defaults on first read)
//! PUT    /api/settings           - Replace (admin)
//! ```

pub mod auth;
pub mod bookings;
pub mod categories;
pub mod contacts;
pub mod galleries;
pub mod media;
pub mod pages;
pub mod posts;
pub mod products;
pub mod settings;

use axum::Router;
use axum::routing::{delete, get, patch, post, put};

use crate::state::AppState;

/// Assemble all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard shell
        .route("/admin", get(pages::dashboard))
        .route("/admin/login", get(pages::login))
        // Auth
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        // Categories
        .route(
            "/api/categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/api/categories/{id}",
            put(categories::update).delete(categories::remove),
        )
        // Galleries
        .route(
            "/api/galleries",
            get(galleries::list).post(galleries::create),
        )
        .route(
            "/api/galleries/{id}",
            get(galleries::show)
                .put(galleries::replace)
                .delete(galleries::remove),
        )
        // Products
        .route("/api/products", get(products::list).post(products::create))
        .route(
            "/api/products/{id}",
            get(products::show)
                .put(products::replace)
                .delete(products::remove),
        )
        // Posts
        .route("/api/posts", get(posts::list).post(posts::create))
        .route(
            "/api/posts/{id}",
            get(posts::show).put(posts::replace).delete(posts::remove),
        )
        // Bookings
        .route("/api/bookings", get(bookings::list).post(bookings::submit))
        .route(
            "/api/bookings/{id}",
            get(bookings::show)
                .patch(bookings::patch)
                .delete(bookings::remove),
        )
        // Contacts
        .route("/api/contacts", get(contacts::list).post(contacts::submit))
        .route(
            "/api/contacts/{id}",
            patch(contacts::patch).delete(contacts::remove),
        )
        // Media
        .route("/api/media", get(media::list))
        .route("/api/media/{id}", delete(media::remove))
        .route("/api/upload", post(media::upload))
        // Settings
        .route("/api/settings", get(settings::show).put(settings::update))
}

/// Basic email validation for public form submissions.
pub(crate) fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("hello@madocreatives.com"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("no-tld@localhost"));
    }
}
