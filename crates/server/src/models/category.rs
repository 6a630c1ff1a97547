//! Category taxonomy model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A portfolio/shop category.
///
/// Categories form a one-level parent/child taxonomy: a child references its
/// parent by id, and a parent may not itself have a parent. The depth limit
/// is enforced at write time, not left to UI discipline.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identity.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// URL-safe unique identifier, derived from the name when not supplied.
    /// Immutable after creation.
    pub slug: String,
    /// Symbolic icon identifier rendered by the dashboard.
    pub icon: Option<String>,
    /// Parent category id, if this is a child.
    #[serde(rename = "parent")]
    pub parent_id: Option<Uuid>,
    /// Explicit display ordering (ascending).
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}
