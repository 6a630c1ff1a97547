//! Visitor-submitted records: bookings and contact messages.

use chrono::{DateTime, NaiveDate, Utc};
use mado_creatives_core::BookingStatus;
use serde::Serialize;
use uuid::Uuid;

/// A session booking request submitted from the public site.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Which studio service is being booked (e.g. "portrait", "editorial").
    pub service: String,
    pub event_date: Option<NaiveDate>,
    pub message: Option<String>,
    /// Workflow status, admin-mutable after creation.
    pub status: BookingStatus,
    /// Free-text admin notes, admin-mutable after creation.
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A contact-form message submitted from the public site.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    /// Whether an admin has marked the message as read.
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
