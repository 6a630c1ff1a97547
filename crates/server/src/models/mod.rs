//! Domain models for the site content.
//!
//! These are the clean API-facing shapes. Database row types and their
//! conversions live next to the queries in [`crate::db`].

pub mod category;
pub mod content;
pub mod inbox;
pub mod media;
pub mod settings;

pub use category::Category;
pub use content::{Gallery, Post, Product};
pub use inbox::{Booking, Contact};
pub use media::MediaItem;
pub use settings::SiteSettings;

use serde::{Deserialize, Serialize};

/// The authenticated principal for the current request.
///
/// Threaded explicitly through handlers via the `RequireAdmin` extractor
/// rather than looked up from ambient context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Role claim from the session token.
    pub role: String,
}
