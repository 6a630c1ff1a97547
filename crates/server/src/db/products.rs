//! Product repository.

use chrono::{DateTime, Utc};
use mado_creatives_core::slugify;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::RepositoryError;
use crate::models::Product;

const DUPLICATE_MESSAGE: &str = "A product with this name already exists";

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    slug: String,
    price: Decimal,
    description: Option<String>,
    category: Option<String>,
    images: JsonValue,
    in_stock: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let images: Vec<String> = serde_json::from_value(row.images)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid images array: {e}")))?;

        Ok(Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            price: row.price,
            description: row.description,
            category: row.category,
            images,
            in_stock: row.in_stock,
            created_at: row.created_at,
        })
    }
}

/// Parameters for creating or replacing a product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

const fn default_in_stock() -> bool {
    true
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, slug, price, description, category, images, in_stock, created_at
            FROM products
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has the given id.
    pub async fn get(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, slug, price, description, category, images, in_stock, created_at
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Create a product, deriving the slug from the name when absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a duplicate slug.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create(&self, params: ProductInput) -> Result<Product, RepositoryError> {
        let slug = params
            .slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| slugify(&params.name));
        let images = JsonValue::from(params.images);

        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO products (id, name, slug, price, description, category, images, in_stock)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, slug, price, description, category, images, in_stock, created_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(&params.name)
        .bind(&slug)
        .bind(params.price)
        .bind(&params.description)
        .bind(&params.category)
        .bind(&images)
        .bind(params.in_stock)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::or_conflict(e, DUPLICATE_MESSAGE))?;

        row.try_into()
    }

    /// Replace a product's mutable fields. The slug is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has the given id.
    #[instrument(skip(self, params))]
    pub async fn replace(&self, id: Uuid, params: ProductInput) -> Result<Product, RepositoryError> {
        let images = JsonValue::from(params.images);

        let row = sqlx::query_as::<_, ProductRow>(
            r"
            UPDATE products
            SET name = $2, price = $3, description = $4, category = $5, images = $6, in_stock = $7
            WHERE id = $1
            RETURNING id, name, slug, price, description, category, images, in_stock, created_at
            ",
        )
        .bind(id)
        .bind(&params.name)
        .bind(params.price)
        .bind(&params.description)
        .bind(&params.category)
        .bind(&images)
        .bind(params.in_stock)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has the given id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
