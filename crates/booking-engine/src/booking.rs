//! Booking records and the time intervals they occupy.
//!
//! A booking occupies the half-open interval `[start, start + duration)`.
//! Only cancelled bookings give their window back; pending, confirmed and
//! completed bookings all constrain availability.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking.
///
/// New bookings are created as `Pending`; transitions are performed by an
/// external administrative actor, never by the engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// A salon appointment for one therapist.
///
/// The engine only interprets `therapist_name`, `reservation_date`,
/// `duration_minutes` and `status`; the remaining fields are opaque payload
/// carried through for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub therapist_name: String,
    pub reservation_date: NaiveDateTime,
    pub duration_minutes: u32,
    pub status: BookingStatus,
    #[serde(default)]
    pub menu_name: String,
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Booking {
    /// Create a pending booking with an empty customer payload.
    pub fn new(therapist_name: &str, reservation_date: NaiveDateTime, duration_minutes: u32) -> Self {
        Self {
            therapist_name: therapist_name.to_string(),
            reservation_date,
            duration_minutes,
            status: BookingStatus::Pending,
            menu_name: String::new(),
            price: 0,
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: None,
            notes: None,
        }
    }

    /// Start of the occupied interval.
    pub fn start(&self) -> NaiveDateTime {
        self.reservation_date
    }

    /// End of the occupied interval (exclusive).
    pub fn end(&self) -> NaiveDateTime {
        self.reservation_date + Duration::minutes(self.duration_minutes as i64)
    }

    /// Whether this booking still occupies its time window.
    pub fn is_active(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }

    /// Half-open overlap test against `[other_start, other_end)`.
    ///
    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`;
    /// intervals that merely touch at an endpoint do not overlap.
    pub fn overlaps(&self, other_start: NaiveDateTime, other_end: NaiveDateTime) -> bool {
        self.start() < other_end && other_start < self.end()
    }
}
