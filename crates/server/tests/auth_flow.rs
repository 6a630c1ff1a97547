//! Router-level tests for the auth flow and admin gating.
//!
//! These run against the real router with a lazy database pool: no request
//! here survives past the auth checks or input validation, so no live
//! database is needed.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mado_creatives_server::app;
use mado_creatives_server::auth::SESSION_COOKIE;
use mado_creatives_server::config::AppConfig;
use mado_creatives_server::db::create_lazy_pool;
use mado_creatives_server::state::AppState;
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

const TEST_PASSWORD: &str = "correct-horse-battery";

fn test_state() -> AppState {
    let config = AppConfig {
        database_url: SecretString::from("postgres://localhost/mado_test"),
        host: "127.0.0.1".parse().expect("valid host"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        session_secret: SecretString::from("router-test-signing-key-32-bytes!"),
        admin_password: SecretString::from(TEST_PASSWORD),
        media: None,
    };
    let pool = create_lazy_pool(&config.database_url).expect("lazy pool");
    AppState::new(config, pool)
}

fn test_app() -> (Router, AppState) {
    let state = test_state();
    (app(state.clone()), state)
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn health_is_public() {
    let (app, _) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_pages_redirect_without_session() {
    let (app, _) = test_app();

    for path in ["/admin", "/admin/galleries", "/admin/some/future/page"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "path {path}");
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("/admin/login"),
            "path {path}"
        );
    }
}

#[tokio::test]
async fn admin_pages_redirect_with_invalid_cookie() {
    let (app, _) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin")
                .header(header::COOKIE, format!("{SESSION_COOKIE}=garbage"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn login_page_reachable_without_session() {
    let (app, _) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin/login")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_api_rejects_missing_session() {
    let (app, _) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/bookings")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body, json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let (app, _) = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "password": "not-the-password" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(
        response.headers().get(header::SET_COOKIE).is_none(),
        "no cookie may be set on a failed login"
    );
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid password");
}

#[tokio::test]
async fn login_sets_session_cookie() {
    let (app, _) = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "password": TEST_PASSWORD }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("session cookie set")
        .to_string();
    assert!(set_cookie.starts_with(&format!("{SESSION_COOKIE}=")));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
    // base_url is plain http here, so Secure must be off
    assert!(!set_cookie.contains("Secure"));

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["role"], "admin");
}

#[tokio::test]
async fn session_cookie_unlocks_admin_api() {
    let (app, state) = test_app();
    let token = state.tokens().issue_admin().expect("token");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::COOKIE, format!("{SESSION_COOKIE}={token}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["role"], "admin");
}

#[tokio::test]
async fn session_cookie_unlocks_admin_pages() {
    let (app, state) = test_app();
    let token = state.tokens().issue_admin().expect("token");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin")
                .header(header::COOKIE, format!("{SESSION_COOKIE}={token}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn logout_clears_cookie() {
    let (app, state) = test_app();
    let token = state.tokens().issue_admin().expect("token");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .header(header::COOKIE, format!("{SESSION_COOKIE}={token}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("clearing cookie set");
    assert!(set_cookie.starts_with(&format!("{SESSION_COOKIE}=;")));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn logout_requires_session() {
    let (app, _) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn booking_submission_validates_email() {
    let (app, _) = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/bookings",
            json!({
                "name": "Ama",
                "email": "not-an-email",
                "service": "Photography"
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let failure = json_body(response).await;
    assert_eq!(failure["success"], false);
}

#[tokio::test]
async fn booking_submission_requires_name_and_service() {
    let (app, _) = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/bookings",
            json!({
                "name": "  ",
                "email": "ama@example.com",
                "service": "Photography"
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_without_media_config_fails_closed() {
    let (app, _) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/upload")
                .header(
                    header::CONTENT_TYPE,
                    "multipart/form-data; boundary=xyzboundary",
                )
                .body(Body::from(
                    "--xyzboundary\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.jpg\"\r\n\r\nbytes\r\n--xyzboundary--\r\n",
                ))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Internal server error");
}
