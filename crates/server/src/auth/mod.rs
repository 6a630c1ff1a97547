//! Admin session handling.
//!
//! Sessions are stateless: a signed, time-limited token carried in an
//! HTTP-only cookie. There is no server-side session store and no revocation
//! list; expiry is the only server-side termination mechanism.

pub mod cookie;
pub mod token;

pub use cookie::{SESSION_COOKIE, clear_session_cookie, session_cookie};
pub use token::{AuthError, SessionClaims, TokenCodec};
