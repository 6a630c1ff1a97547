//! Contact message repository.

use serde::Deserialize;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::RepositoryError;
use crate::models::Contact;

/// Parameters for a public contact-form submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

/// Admin patch of a contact message's read flag.
#[derive(Debug, Deserialize)]
pub struct PatchContact {
    pub read: bool,
}

/// Repository for contact message database operations.
pub struct ContactRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactRepository<'a> {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all contact messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Contact>, RepositoryError> {
        let contacts = sqlx::query_as::<_, Contact>(
            r"
            SELECT id, name, email, subject, message, read, created_at
            FROM contacts
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(contacts)
    }

    /// Record a public contact submission; starts unread.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, params))]
    pub async fn create(&self, params: CreateContact) -> Result<Contact, RepositoryError> {
        let contact = sqlx::query_as::<_, Contact>(
            r"
            INSERT INTO contacts (id, name, email, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, subject, message, read, created_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(&params.name)
        .bind(&params.email)
        .bind(&params.subject)
        .bind(&params.message)
        .fetch_one(self.pool)
        .await?;

        Ok(contact)
    }

    /// Set a contact message's read flag.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no message has the given id.
    #[instrument(skip(self))]
    pub async fn set_read(&self, id: Uuid, read: bool) -> Result<Contact, RepositoryError> {
        sqlx::query_as::<_, Contact>(
            r"
            UPDATE contacts
            SET read = $2
            WHERE id = $1
            RETURNING id, name, email, subject, message, read, created_at
            ",
        )
        .bind(id)
        .bind(read)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Delete a contact message.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no message has the given id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
