//! Request middleware: the admin route guard and auth extractors.

pub mod auth;
pub mod guard;

pub use auth::RequireAdmin;
pub use guard::admin_guard;
