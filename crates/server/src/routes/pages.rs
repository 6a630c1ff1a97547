//! Dashboard shell pages.
//!
//! The dashboard itself is a client-side bundle served from these shells;
//! page markup is intentionally minimal here. The route guard has already
//! vetted the session by the time `dashboard` runs.

use axum::response::Html;

/// Admin dashboard shell.
///
/// GET /admin
pub async fn dashboard() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Mado Creatives - Admin</title></head>
<body><div id="admin-root" data-page="dashboard"></div></body>
</html>"#,
    )
}

/// Login page shell (exempt from the route guard).
///
/// GET /admin/login
pub async fn login() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Mado Creatives - Login</title></head>
<body><div id="admin-root" data-page="login"></div></body>
</html>"#,
    )
}
