//! Status enums for various entities.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Booking workflow status.
///
/// New bookings start as `Pending`; admins move them to `Confirmed` or
/// `Cancelled` from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// Error returned when a stored status string is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl BookingStatus {
    /// The canonical lowercase form stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gallery display layout.
///
/// Presentation-only hint consumed by the public site's gallery renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    #[default]
    Grid,
    Masonry,
    Carousel,
}

impl GalleryLayout {
    /// The canonical lowercase form stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Masonry => "masonry",
            Self::Carousel => "carousel",
        }
    }
}

impl std::str::FromStr for GalleryLayout {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "masonry" => Ok(Self::Masonry),
            "carousel" => Ok(Self::Carousel),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for GalleryLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<BookingStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_booking_status_default_is_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn test_booking_status_rejects_unknown() {
        let err = "done".parse::<BookingStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("done".to_string()));
    }

    #[test]
    fn test_booking_status_serde_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
        let parsed: BookingStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, BookingStatus::Cancelled);
    }

    #[test]
    fn test_gallery_layout_round_trip() {
        for layout in [
            GalleryLayout::Grid,
            GalleryLayout::Masonry,
            GalleryLayout::Carousel,
        ] {
            assert_eq!(layout.as_str().parse::<GalleryLayout>(), Ok(layout));
        }
    }
}
