//! Uniform JSON response envelope.
//!
//! Every API endpoint answers with the same shape so clients can branch on
//! `.success` without inspecting status codes:
//!
//! ```text
//! Success: { "success": true, "data": <payload> }      (200/201)
//! Failure: { "success": false, "error": "<message>" }  (4xx/5xx)
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Successful response envelope.
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

/// Failed response envelope.
#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub error: String,
}

impl ApiFailure {
    /// Build a failure body with the given message.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Wrap a payload in the success envelope with HTTP 200.
pub fn ok<T: Serialize>(data: T) -> Response {
    Json(ApiSuccess {
        success: true,
        data,
    })
    .into_response()
}

/// Wrap a payload in the success envelope with HTTP 201.
pub fn created<T: Serialize>(data: T) -> Response {
    (
        StatusCode::CREATED,
        Json(ApiSuccess {
            success: true,
            data,
        }),
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let body = serde_json::to_value(ApiSuccess {
            success: true,
            data: vec![1, 2, 3],
        })
        .unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_failure_envelope_shape() {
        let body = serde_json::to_value(ApiFailure::new("Invalid password")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid password");
    }

    #[test]
    fn test_created_status() {
        let response = created(serde_json::json!({"id": 1}));
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_ok_status() {
        let response = ok("payload");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
