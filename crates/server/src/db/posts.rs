//! Blog post repository.

use mado_creatives_core::slugify;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::RepositoryError;
use crate::models::Post;

const DUPLICATE_MESSAGE: &str = "A post with this title already exists";

/// Parameters for creating or replacing a post.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub published: bool,
}

/// Repository for blog post database operations.
pub struct PostRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new post repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        let posts = sqlx::query_as::<_, Post>(
            r"
            SELECT id, title, slug, content, excerpt, featured_image, published, created_at
            FROM posts
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Get a post by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no post has the given id.
    pub async fn get(&self, id: Uuid) -> Result<Post, RepositoryError> {
        sqlx::query_as::<_, Post>(
            r"
            SELECT id, title, slug, content, excerpt, featured_image, published, created_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Create a post, deriving the slug from the title when absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a duplicate slug.
    #[instrument(skip(self, params), fields(title = %params.title))]
    pub async fn create(&self, params: PostInput) -> Result<Post, RepositoryError> {
        let slug = params
            .slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| slugify(&params.title));

        let post = sqlx::query_as::<_, Post>(
            r"
            INSERT INTO posts (id, title, slug, content, excerpt, featured_image, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, slug, content, excerpt, featured_image, published, created_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(&params.title)
        .bind(&slug)
        .bind(&params.content)
        .bind(&params.excerpt)
        .bind(&params.featured_image)
        .bind(params.published)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::or_conflict(e, DUPLICATE_MESSAGE))?;

        Ok(post)
    }

    /// Replace a post's mutable fields. The slug is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no post has the given id.
    #[instrument(skip(self, params))]
    pub async fn replace(&self, id: Uuid, params: PostInput) -> Result<Post, RepositoryError> {
        sqlx::query_as::<_, Post>(
            r"
            UPDATE posts
            SET title = $2, content = $3, excerpt = $4, featured_image = $5, published = $6
            WHERE id = $1
            RETURNING id, title, slug, content, excerpt, featured_image, published, created_at
            ",
        )
        .bind(id)
        .bind(&params.title)
        .bind(&params.content)
        .bind(&params.excerpt)
        .bind(&params.featured_image)
        .bind(params.published)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Delete a post.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no post has the given id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
