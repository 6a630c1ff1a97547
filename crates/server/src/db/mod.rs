//! Database operations for the site content store.
//!
//! ## Tables
//!
//! - `categories` - one-level parent/child taxonomy
//! - `galleries`, `products`, `posts` - slugged content resources
//! - `bookings`, `contacts` - visitor submissions
//! - `media` - image library records, upserted by URL
//! - `site_settings` - JSONB singleton keyed "global"
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run with
//! `sqlx migrate run` (or embedded via `sqlx::migrate!` from the binary).

pub mod bookings;
pub mod categories;
pub mod contacts;
pub mod galleries;
pub mod media;
pub mod posts;
pub mod products;
pub mod settings;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate slug).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Map a sqlx error, converting unique-index violations into a
    /// `Conflict` carrying the given resource-specific message.
    ///
    /// Postgres signals these with SQLSTATE 23505.
    #[must_use]
    pub fn or_conflict(err: sqlx::Error, conflict_message: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505") {
                return Self::Conflict(conflict_message.to_string());
            }
        }
        Self::Database(err)
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Create a lazy pool that connects on first use.
///
/// Used by tests that exercise routing and auth paths without a live
/// database: requests rejected before the handler never touch the pool.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection URL cannot be parsed.
pub fn create_lazy_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(2)
        .connect_lazy(database_url.expose_secret())
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    /// Stand-in database error carrying an arbitrary SQLSTATE code.
    #[derive(Debug)]
    struct StubDbError(&'static str);

    impl std::fmt::Display for StubDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "sqlstate {}", self.0)
        }
    }

    impl std::error::Error for StubDbError {}

    impl sqlx::error::DatabaseError for StubDbError {
        fn message(&self) -> &str {
            "stub database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            match self.0 {
                "23505" => sqlx::error::ErrorKind::UniqueViolation,
                _ => sqlx::error::ErrorKind::Other,
            }
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    fn db_error(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(StubDbError(code)))
    }

    #[test]
    fn test_unique_violation_becomes_conflict() {
        let err = RepositoryError::or_conflict(db_error("23505"), "already exists");
        assert!(matches!(err, RepositoryError::Conflict(m) if m == "already exists"));
    }

    #[test]
    fn test_other_sqlstate_stays_database_error() {
        // Foreign key violation must not masquerade as a duplicate.
        let err = RepositoryError::or_conflict(db_error("23503"), "already exists");
        assert!(matches!(err, RepositoryError::Database(_)));
    }

    #[test]
    fn test_non_database_error_stays_database_error() {
        let err = RepositoryError::or_conflict(sqlx::Error::RowNotFound, "already exists");
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
