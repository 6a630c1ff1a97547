//! Category repository: the one-level parent/child taxonomy.

use mado_creatives_core::slugify;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::RepositoryError;
use crate::models::Category;

const DUPLICATE_MESSAGE: &str = "A category with this name already exists";

/// Parameters for creating a category.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    pub name: String,
    /// Explicit slug; derived from `name` when omitted.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Parent category id; must reference a top-level category.
    #[serde(default, rename = "parent")]
    pub parent_id: Option<Uuid>,
    #[serde(default, rename = "order")]
    pub sort_order: Option<i32>,
}

/// Mutable fields for a category update.
///
/// The slug is deliberately absent: it is immutable after creation, so a
/// rename never silently breaks published URLs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, rename = "parent")]
    pub parent_id: Option<Uuid>,
    #[serde(default, rename = "order")]
    pub sort_order: Option<i32>,
}

/// Repository for category database operations.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories, ordered by explicit sort order then name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(
            r"
            SELECT id, name, slug, icon, parent_id, sort_order, created_at
            FROM categories
            ORDER BY sort_order, name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Create a category, deriving the slug from the name when absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` when the slug collides with an
    /// existing category, and a bad-parent conflict when the parent does not
    /// exist or is itself a child (only one level of nesting is allowed).
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create(&self, params: CreateCategory) -> Result<Category, RepositoryError> {
        let slug = params
            .slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| slugify(&params.name));

        if let Some(parent_id) = params.parent_id {
            self.ensure_valid_parent(parent_id).await?;
        }

        let category = sqlx::query_as::<_, Category>(
            r"
            INSERT INTO categories (id, name, slug, icon, parent_id, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, slug, icon, parent_id, sort_order, created_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(&params.name)
        .bind(&slug)
        .bind(&params.icon)
        .bind(params.parent_id)
        .bind(params.sort_order.unwrap_or(0))
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::or_conflict(e, DUPLICATE_MESSAGE))?;

        Ok(category)
    }

    /// Update a category's mutable fields. The slug is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has the given id.
    #[instrument(skip(self, params))]
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateCategory,
    ) -> Result<Category, RepositoryError> {
        if let Some(parent_id) = params.parent_id {
            // A category cannot be its own parent.
            if parent_id == id {
                return Err(RepositoryError::Conflict(
                    "A category cannot be its own parent".to_string(),
                ));
            }
            self.ensure_valid_parent(parent_id).await?;
        }

        let category = sqlx::query_as::<_, Category>(
            r"
            UPDATE categories
            SET name = $2, icon = $3, parent_id = $4, sort_order = $5
            WHERE id = $1
            RETURNING id, name, slug, icon, parent_id, sort_order, created_at
            ",
        )
        .bind(id)
        .bind(&params.name)
        .bind(&params.icon)
        .bind(params.parent_id)
        .bind(params.sort_order.unwrap_or(0))
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(category)
    }

    /// Delete a category and all of its direct children.
    ///
    /// Both deletes run inside a single transaction, so a crash can never
    /// leave orphaned children pointing at a missing parent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has the given id.
    #[instrument(skip(self))]
    pub async fn delete_cascade(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM categories WHERE parent_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Rolls back the child delete on drop.
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await?;
        Ok(())
    }

    /// Verify a prospective parent exists and is itself a top-level category.
    async fn ensure_valid_parent(&self, parent_id: Uuid) -> Result<(), RepositoryError> {
        let parent_of_parent = sqlx::query_scalar::<_, Option<Uuid>>(
            "SELECT parent_id FROM categories WHERE id = $1",
        )
        .bind(parent_id)
        .fetch_optional(self.pool)
        .await?;

        match parent_of_parent {
            None => Err(RepositoryError::Conflict(
                "Parent category does not exist".to_string(),
            )),
            Some(Some(_)) => Err(RepositoryError::Conflict(
                "Categories can only be nested one level deep".to_string(),
            )),
            Some(None) => Ok(()),
        }
    }
}
