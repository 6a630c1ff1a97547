//! Media library records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A previously uploaded image's location and metadata.
///
/// Upserted by URL: re-registering the same URL updates the existing record
/// rather than duplicating it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: Uuid,
    /// Durable URL on the image host.
    pub url: String,
    /// Image host's identifier for the asset.
    pub public_id: Option<String>,
    pub format: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub bytes: Option<i64>,
    pub created_at: DateTime<Utc>,
}
