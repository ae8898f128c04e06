//! Validate a prospective booking against a therapist's existing bookings.
//!
//! Performs a pairwise half-open overlap test. Back-to-back bookings (one
//! ending exactly when another starts) are NOT conflicts. Cancelled bookings
//! impose no constraint at all.

use crate::booking::Booking;
use crate::error::{EngineError, Result};

/// A detected overlap between a prospective booking and an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub existing: Booking,
    pub overlap_minutes: i64,
}

/// Check that `candidate` may be committed without violating the
/// per-therapist non-overlap invariant.
///
/// The cancellation exclusion is re-applied here, so callers may pass the raw
/// booking set for the day. The check is order-independent: any overlapping
/// active booking rejects the commit.
///
/// # Errors
/// - `EngineError::InvalidDuration` when the candidate's duration is zero.
/// - `EngineError::SlotConflict` on the first overlapping active booking.
pub fn validate_no_conflict(candidate: &Booking, existing: &[Booking]) -> Result<()> {
    if candidate.duration_minutes == 0 {
        return Err(EngineError::InvalidDuration(candidate.duration_minutes));
    }

    for booking in existing.iter().filter(|b| b.is_active()) {
        if candidate.overlaps(booking.start(), booking.end()) {
            return Err(EngineError::SlotConflict {
                therapist: candidate.therapist_name.clone(),
                requested_start: candidate.start(),
                requested_end: candidate.end(),
                existing_start: booking.start(),
                existing_end: booking.end(),
            });
        }
    }

    Ok(())
}

/// Find every active booking overlapping `candidate`, with overlap durations.
///
/// [`validate_no_conflict`] is the commit gate; this variant reports the full
/// set for diagnostics. The overlap duration is
/// `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_conflicts(candidate: &Booking, existing: &[Booking]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for booking in existing.iter().filter(|b| b.is_active()) {
        if candidate.overlaps(booking.start(), booking.end()) {
            let overlap_start = candidate.start().max(booking.start());
            let overlap_end = candidate.end().min(booking.end());
            let overlap_minutes = (overlap_end - overlap_start).num_minutes();

            conflicts.push(Conflict {
                existing: booking.clone(),
                overlap_minutes,
            });
        }
    }

    conflicts
}
