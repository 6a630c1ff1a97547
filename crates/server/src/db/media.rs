//! Media library repository.

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::RepositoryError;
use crate::models::MediaItem;
use crate::services::images::UploadedImage;

/// Repository for media library database operations.
pub struct MediaRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MediaRepository<'a> {
    /// Create a new media repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all media items, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<MediaItem>, RepositoryError> {
        let items = sqlx::query_as::<_, MediaItem>(
            r"
            SELECT id, url, public_id, format, width, height, bytes, created_at
            FROM media
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Register an uploaded image, keyed by URL.
    ///
    /// Re-registering the same URL updates the existing record's metadata
    /// rather than creating a duplicate.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the upsert fails.
    #[instrument(skip(self, image), fields(url = %image.url))]
    pub async fn upsert(&self, image: &UploadedImage) -> Result<MediaItem, RepositoryError> {
        let item = sqlx::query_as::<_, MediaItem>(
            r"
            INSERT INTO media (id, url, public_id, format, width, height, bytes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (url) DO UPDATE
            SET public_id = EXCLUDED.public_id,
                format = EXCLUDED.format,
                width = EXCLUDED.width,
                height = EXCLUDED.height,
                bytes = EXCLUDED.bytes
            RETURNING id, url, public_id, format, width, height, bytes, created_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(&image.url)
        .bind(&image.public_id)
        .bind(&image.format)
        .bind(image.width)
        .bind(image.height)
        .bind(image.bytes)
        .fetch_one(self.pool)
        .await?;

        Ok(item)
    }

    /// Delete a media item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has the given id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
