//! Gallery repository.

use chrono::{DateTime, Utc};
use mado_creatives_core::{GalleryLayout, slugify};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::RepositoryError;
use crate::models::Gallery;

const DUPLICATE_MESSAGE: &str = "A gallery with this title already exists";

/// Internal row type for gallery queries.
///
/// `images` is stored as a JSONB array and `layout` as text; both are
/// converted (and validated) on the way out.
#[derive(Debug, sqlx::FromRow)]
struct GalleryRow {
    id: Uuid,
    title: String,
    slug: String,
    category: Option<String>,
    featured_image: Option<String>,
    images: JsonValue,
    layout: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<GalleryRow> for Gallery {
    type Error = RepositoryError;

    fn try_from(row: GalleryRow) -> Result<Self, Self::Error> {
        let images: Vec<String> = serde_json::from_value(row.images)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid images array: {e}")))?;
        let layout: GalleryLayout = row
            .layout
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid layout: {e}")))?;

        Ok(Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            category: row.category,
            featured_image: row.featured_image,
            images,
            layout,
            created_at: row.created_at,
        })
    }
}

/// Parameters for creating or replacing a gallery.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryInput {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub layout: GalleryLayout,
}

/// Repository for gallery database operations.
pub struct GalleryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GalleryRepository<'a> {
    /// Create a new gallery repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all galleries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Gallery>, RepositoryError> {
        let rows = sqlx::query_as::<_, GalleryRow>(
            r"
            SELECT id, title, slug, category, featured_image, images, layout, created_at
            FROM galleries
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a gallery by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no gallery has the given id.
    pub async fn get(&self, id: Uuid) -> Result<Gallery, RepositoryError> {
        let row = sqlx::query_as::<_, GalleryRow>(
            r"
            SELECT id, title, slug, category, featured_image, images, layout, created_at
            FROM galleries
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Create a gallery, deriving the slug from the title when absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a duplicate slug.
    #[instrument(skip(self, params), fields(title = %params.title))]
    pub async fn create(&self, params: GalleryInput) -> Result<Gallery, RepositoryError> {
        let slug = params
            .slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| slugify(&params.title));
        let images = JsonValue::from(params.images);

        let row = sqlx::query_as::<_, GalleryRow>(
            r"
            INSERT INTO galleries (id, title, slug, category, featured_image, images, layout)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, slug, category, featured_image, images, layout, created_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(&params.title)
        .bind(&slug)
        .bind(&params.category)
        .bind(&params.featured_image)
        .bind(&images)
        .bind(params.layout.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::or_conflict(e, DUPLICATE_MESSAGE))?;

        row.try_into()
    }

    /// Replace a gallery's mutable fields. The slug is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no gallery has the given id.
    #[instrument(skip(self, params))]
    pub async fn replace(&self, id: Uuid, params: GalleryInput) -> Result<Gallery, RepositoryError> {
        let images = JsonValue::from(params.images);

        let row = sqlx::query_as::<_, GalleryRow>(
            r"
            UPDATE galleries
            SET title = $2, category = $3, featured_image = $4, images = $5, layout = $6
            WHERE id = $1
            RETURNING id, title, slug, category, featured_image, images, layout, created_at
            ",
        )
        .bind(id)
        .bind(&params.title)
        .bind(&params.category)
        .bind(&params.featured_image)
        .bind(&images)
        .bind(params.layout.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Delete a gallery.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no gallery has the given id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM galleries WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
