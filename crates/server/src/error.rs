//! Unified error handling for the server.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::response::ApiFailure;
use crate::services::images::ImageHostError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(RepositoryError),

    /// Image host operation failed.
    #[error("Image host error: {0}")]
    ImageHost(#[from] ImageHostError),

    /// Resource not found.
    #[error("Not found")]
    NotFound,

    /// User is not authenticated as an admin.
    #[error("Unauthorized")]
    Unauthorized,

    /// Bad request from client.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            // Unique-index violations carry a resource-specific message and
            // surface as a client error, never a generic 500.
            RepositoryError::Conflict(message) => Self::BadRequest(message),
            other => Self::Database(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Server-side detail stays in the logs; clients get a generic message.
        if matches!(self, Self::Database(_) | Self::Internal(_) | Self::ImageHost(_)) {
            tracing::error!(error = %self, "request failed");
        }

        let (status, message) = match &self {
            Self::Database(_) | Self::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            Self::ImageHost(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Image upload failed".to_string(),
            ),
            Self::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            // Missing, expired, and wrong-role sessions are indistinguishable
            // to the client, and the body shape matches what the dashboard
            // expects for auth failures.
            Self::Unauthorized => {
                return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" })))
                    .into_response();
            }
        };

        (status, Json(ApiFailure::new(message))).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(get_status(AppError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(get_status(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            get_status(AppError::BadRequest("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_conflict_maps_to_bad_request() {
        let err: AppError =
            RepositoryError::Conflict("A category with this name already exists".to_string()).into();
        assert!(matches!(&err, AppError::BadRequest(m) if m.contains("already exists")));
        assert_eq!(get_status(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_through() {
        let err: AppError = RepositoryError::NotFound.into();
        assert_eq!(get_status(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_detail_not_exposed() {
        let err: AppError =
            RepositoryError::DataCorruption("password hash leaked into logs".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
