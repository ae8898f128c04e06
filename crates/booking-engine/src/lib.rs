//! # booking-engine
//!
//! Appointment slot generation and conflict detection for a salon booking
//! system.
//!
//! The engine turns a therapist's existing reservations into the set of
//! bookable start times for a business day, and guarantees that no two
//! active bookings for the same therapist ever overlap. All interval
//! arithmetic uses the half-open rule: `[s1, e1)` and `[s2, e2)` overlap iff
//! `s1 < e2 && s2 < e1`, so back-to-back bookings never conflict.
//!
//! ## Modules
//!
//! - [`hours`] — business-hours configuration and the candidate slot grid
//! - [`availability`] — filter candidate slots against existing bookings
//! - [`conflict`] — validate a prospective booking before commit
//! - [`ledger`] — in-memory store with atomic per-therapist reservation
//! - [`booking`] — the booking record and its occupied interval
//! - [`error`] — error types

pub mod availability;
pub mod booking;
pub mod conflict;
pub mod error;
pub mod hours;
pub mod ledger;

pub use availability::{available_slot_times, available_slots};
pub use booking::{Booking, BookingStatus};
pub use conflict::{find_conflicts, validate_no_conflict, Conflict};
pub use error::EngineError;
pub use hours::{BusinessHours, Slot};
pub use ledger::{BookingLedger, LedgerStats};
