//! Filter the candidate slot grid against a therapist's existing bookings.
//!
//! Each candidate interval uses the *requested* duration — the duration of
//! the appointment being booked — while every existing active booking blocks
//! with its own duration. A long existing booking therefore blocks every
//! candidate slot whose interval intersects it, not only the slot matching
//! its start time.

use chrono::{Duration, NaiveDate};

use crate::booking::Booking;
use crate::error::{EngineError, Result};
use crate::hours::{BusinessHours, Slot};

/// Candidate slots on `date` at which a booking of `requested_duration`
/// minutes could start without overlapping an existing active booking.
///
/// `existing` is the caller-supplied booking set for one therapist and day;
/// cancelled bookings in it are ignored. The result preserves grid order.
/// An empty result means no free time that day, not an error.
///
/// # Errors
/// Returns `EngineError::InvalidDuration` when `requested_duration` is zero.
pub fn available_slot_times(
    hours: &BusinessHours,
    date: NaiveDate,
    requested_duration: u32,
    existing: &[Booking],
) -> Result<Vec<Slot>> {
    if requested_duration == 0 {
        return Err(EngineError::InvalidDuration(requested_duration));
    }

    let requested = Duration::minutes(requested_duration as i64);

    let free = hours
        .slots()
        .filter(|slot| {
            let slot_start = slot.on(date);
            let slot_end = slot_start + requested;
            // Half-open overlap: touching intervals never conflict.
            !existing
                .iter()
                .filter(|b| b.is_active())
                .any(|b| slot_start < b.end() && b.start() < slot_end)
        })
        .collect();

    Ok(free)
}

/// [`available_slot_times`] rendered as ordered `HH:MM` labels.
pub fn available_slots(
    hours: &BusinessHours,
    date: NaiveDate,
    requested_duration: u32,
    existing: &[Booking],
) -> Result<Vec<String>> {
    let slots = available_slot_times(hours, date, requested_duration, existing)?;
    Ok(slots.iter().map(Slot::label).collect())
}
