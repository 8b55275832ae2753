//! Appointment booking port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::forms::AppointmentRequest;
use crate::domain::foundation::Timestamp;

use super::ApiError;

/// Port for booking appointments at partner hospitals.
#[async_trait]
pub trait AppointmentBooker: Send + Sync {
    /// Book an appointment; returns the backend's confirmation.
    async fn book(&self, request: &AppointmentRequest) -> Result<BookingConfirmation, ApiError>;
}

/// Outcome of a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Backend identifier for the appointment.
    pub id: String,

    /// The slot the hospital actually confirmed, which may differ from
    /// the requested one.
    pub scheduled_at: Timestamp,

    /// Whether the slot is confirmed or pending hospital review.
    pub status: BookingStatus,
}

/// Booking lifecycle state as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Slot locked in.
    Confirmed,

    /// Awaiting hospital confirmation.
    Pending,

    /// Status string the client does not recognize.
    Unknown,
}

impl BookingStatus {
    /// Parses the backend's status string, defaulting to `Unknown`.
    pub fn parse(status: &str) -> Self {
        match status {
            "confirmed" => BookingStatus::Confirmed,
            "pending" => BookingStatus::Pending,
            _ => BookingStatus::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_booker_is_object_safe() {
        fn _accepts_dyn(_booker: &dyn AppointmentBooker) {}
    }

    #[test]
    fn status_parses_known_values() {
        assert_eq!(BookingStatus::parse("confirmed"), BookingStatus::Confirmed);
        assert_eq!(BookingStatus::parse("pending"), BookingStatus::Pending);
        assert_eq!(BookingStatus::parse("rescheduled"), BookingStatus::Unknown);
    }
}
