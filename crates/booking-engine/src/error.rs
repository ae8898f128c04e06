//! Error types for booking-engine operations.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The prospective booking overlaps an existing active booking for the
    /// same therapist. This is the only domain-level rejection the engine
    /// produces; the booking must not be persisted.
    #[error(
        "{therapist} is already booked from {existing_start} to {existing_end}, \
         which overlaps the requested {requested_start}–{requested_end}"
    )]
    SlotConflict {
        therapist: String,
        requested_start: NaiveDateTime,
        requested_end: NaiveDateTime,
        existing_start: NaiveDateTime,
        existing_end: NaiveDateTime,
    },

    /// Caller-contract violation: a booking or query with a non-positive
    /// duration. Not retryable — the input is invalid, not transient.
    #[error("duration must be a positive number of minutes, got {0}")]
    InvalidDuration(u32),

    /// Caller-contract violation in the business-hours configuration.
    #[error("invalid business hours: {0}")]
    InvalidHours(String),

    /// Status update targeted a booking the ledger does not hold.
    #[error("no booking for {therapist} starting at {start}")]
    BookingNotFound {
        therapist: String,
        start: NaiveDateTime,
    },
}

/// Convenience alias used throughout booking-engine.
pub type Result<T> = std::result::Result<T, EngineError>;
