//! Content-bearing resources: galleries, products, blog posts.
//!
//! Each enforces a unique slug derived from its title/name via the shared
//! normalization rule in `mado_creatives_core::slug`.

use chrono::{DateTime, Utc};
use mado_creatives_core::GalleryLayout;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// A portfolio gallery.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    /// Category slug this gallery is grouped under.
    pub category: Option<String>,
    pub featured_image: Option<String>,
    /// Image URLs in display order.
    pub images: Vec<String>,
    pub layout: GalleryLayout,
    pub created_at: DateTime<Utc>,
}

/// A shop product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub price: Decimal,
    /// Rich-text HTML produced by the editor widget; stored opaque.
    pub description: Option<String>,
    pub category: Option<String>,
    pub images: Vec<String>,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

/// A blog post.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    /// Rich-text HTML produced by the editor widget; stored opaque.
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}
