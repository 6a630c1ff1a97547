//! Booking repository.

use chrono::{DateTime, NaiveDate, Utc};
use mado_creatives_core::BookingStatus;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::RepositoryError;
use crate::models::Booking;

/// Internal row type for booking queries.
///
/// `status` is stored as text and validated on the way out; an unknown
/// value is data corruption, not a silent default.
#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    service: String,
    event_date: Option<NaiveDate>,
    message: Option<String>,
    status: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = RepositoryError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let status: BookingStatus = row
            .status
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid status: {e}")))?;

        Ok(Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            service: row.service,
            event_date: row.event_date,
            message: row.message,
            status,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

/// Parameters for a public booking submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub service: String,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Admin patch of a booking's workflow fields.
///
/// Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchBooking {
    #[serde(default)]
    pub status: Option<BookingStatus>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Repository for booking database operations.
pub struct BookingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BookingRepository<'a> {
    /// Create a new booking repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all bookings, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Booking>, RepositoryError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r"
            SELECT id, name, email, phone, service, event_date, message, status, notes, created_at
            FROM bookings
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a booking by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no booking has the given id.
    pub async fn get(&self, id: Uuid) -> Result<Booking, RepositoryError> {
        let row = sqlx::query_as::<_, BookingRow>(
            r"
            SELECT id, name, email, phone, service, event_date, message, status, notes, created_at
            FROM bookings
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Record a public booking submission; status starts as `pending`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, params), fields(service = %params.service))]
    pub async fn create(&self, params: CreateBooking) -> Result<Booking, RepositoryError> {
        let row = sqlx::query_as::<_, BookingRow>(
            r"
            INSERT INTO bookings (id, name, email, phone, service, event_date, message, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, email, phone, service, event_date, message, status, notes, created_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(&params.name)
        .bind(&params.email)
        .bind(&params.phone)
        .bind(&params.service)
        .bind(params.event_date)
        .bind(&params.message)
        .bind(BookingStatus::Pending.as_str())
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Patch a booking's status and/or notes; absent fields are untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no booking has the given id.
    #[instrument(skip(self, patch))]
    pub async fn patch(&self, id: Uuid, patch: PatchBooking) -> Result<Booking, RepositoryError> {
        let row = sqlx::query_as::<_, BookingRow>(
            r"
            UPDATE bookings
            SET status = COALESCE($2, status),
                notes = COALESCE($3, notes)
            WHERE id = $1
            RETURNING id, name, email, phone, service, event_date, message, status, notes, created_at
            ",
        )
        .bind(id)
        .bind(patch.status.map(BookingStatus::as_str))
        .bind(&patch.notes)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Delete a booking.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no booking has the given id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
