//! In-memory booking ledger with atomic per-therapist reservation.
//!
//! `validate_no_conflict` followed by a separate write is a check-then-act
//! race: two concurrent requests for the same therapist could both pass the
//! check against a stale snapshot. The ledger closes that race by holding the
//! per-therapist map entry for the whole check-and-write, so reservation is a
//! single atomic step scoped to one therapist. Different therapists never
//! contend.

use chrono::{NaiveDate, NaiveDateTime};
use dashmap::DashMap;
use serde::Serialize;

use crate::availability;
use crate::booking::{Booking, BookingStatus};
use crate::conflict::validate_no_conflict;
use crate::error::{EngineError, Result};
use crate::hours::BusinessHours;

/// Per-status booking counts and completed revenue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub total_revenue: u64,
}

/// Bookings grouped by therapist, guarded per key.
#[derive(Debug, Default)]
pub struct BookingLedger {
    hours: BusinessHours,
    by_therapist: DashMap<String, Vec<Booking>>,
}

impl BookingLedger {
    /// Ledger with the reference business-hours configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger with explicit business hours.
    pub fn with_hours(hours: BusinessHours) -> Self {
        Self {
            hours,
            by_therapist: DashMap::new(),
        }
    }

    pub fn hours(&self) -> &BusinessHours {
        &self.hours
    }

    /// Atomically validate and commit a new booking.
    ///
    /// The therapist's entry stays locked from conflict check through insert,
    /// so no second reservation for the same therapist can interleave. The
    /// committed booking always starts as `Pending`, whatever status the
    /// caller supplied. On conflict nothing is written.
    ///
    /// # Errors
    /// - `EngineError::InvalidDuration` for a zero-duration booking.
    /// - `EngineError::SlotConflict` when the requested window overlaps an
    ///   existing active booking for this therapist.
    pub fn reserve(&self, mut booking: Booking) -> Result<()> {
        let mut entry = self
            .by_therapist
            .entry(booking.therapist_name.clone())
            .or_default();

        let day = booking.reservation_date.date();
        let same_day: Vec<Booking> = entry
            .iter()
            .filter(|b| b.reservation_date.date() == day)
            .cloned()
            .collect();
        validate_no_conflict(&booking, &same_day)?;

        booking.status = BookingStatus::Pending;
        entry.push(booking);
        Ok(())
    }

    /// Ordered `HH:MM` labels at which a `requested_duration`-minute booking
    /// for `therapist` could start on `date`.
    pub fn available_slots_for(
        &self,
        date: NaiveDate,
        therapist: &str,
        requested_duration: u32,
    ) -> Result<Vec<String>> {
        let existing = self.bookings_for_day(therapist, date);
        availability::available_slots(&self.hours, date, requested_duration, &existing)
    }

    /// All of `therapist`'s bookings whose start falls on `date`, any status.
    pub fn bookings_for_day(&self, therapist: &str, date: NaiveDate) -> Vec<Booking> {
        self.by_therapist
            .get(therapist)
            .map(|bookings| {
                bookings
                    .iter()
                    .filter(|b| b.reservation_date.date() == date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Administrative status transition, keyed by therapist and exact start.
    ///
    /// Cancelling a booking immediately frees its time window for new
    /// reservations. A cancelled window may since have been rebooked, so two
    /// rules keep the non-overlap invariant intact at this write too: an
    /// active booking is preferred over a cancelled one when both share the
    /// start, and reactivating a cancelled booking re-validates its window
    /// against the therapist's other active same-day bookings.
    ///
    /// # Errors
    /// - `EngineError::BookingNotFound` when no booking matches.
    /// - `EngineError::SlotConflict` when reactivating a cancelled booking
    ///   whose window is no longer free.
    pub fn update_status(
        &self,
        therapist: &str,
        start: NaiveDateTime,
        status: BookingStatus,
    ) -> Result<()> {
        let mut entry =
            self.by_therapist
                .get_mut(therapist)
                .ok_or_else(|| EngineError::BookingNotFound {
                    therapist: therapist.to_string(),
                    start,
                })?;

        let index = entry
            .iter()
            .position(|b| b.reservation_date == start && b.is_active())
            .or_else(|| entry.iter().position(|b| b.reservation_date == start))
            .ok_or_else(|| EngineError::BookingNotFound {
                therapist: therapist.to_string(),
                start,
            })?;

        if !entry[index].is_active() && status != BookingStatus::Cancelled {
            let day = start.date();
            let others: Vec<Booking> = entry
                .iter()
                .enumerate()
                .filter(|(i, b)| *i != index && b.reservation_date.date() == day)
                .map(|(_, b)| b.clone())
                .collect();
            validate_no_conflict(&entry[index], &others)?;
        }

        entry[index].status = status;
        Ok(())
    }

    /// Every booking in the ledger, sorted by reservation date.
    pub fn all_bookings(&self) -> Vec<Booking> {
        let mut all: Vec<Booking> = self
            .by_therapist
            .iter()
            .flat_map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|b| b.reservation_date);
        all
    }

    /// Per-status counts plus revenue over completed bookings.
    pub fn stats(&self) -> LedgerStats {
        let mut stats = LedgerStats::default();
        for entry in self.by_therapist.iter() {
            for booking in entry.value() {
                stats.total += 1;
                match booking.status {
                    BookingStatus::Pending => stats.pending += 1,
                    BookingStatus::Confirmed => stats.confirmed += 1,
                    BookingStatus::Completed => {
                        stats.completed += 1;
                        stats.total_revenue += booking.price as u64;
                    }
                    BookingStatus::Cancelled => stats.cancelled += 1,
                }
            }
        }
        stats
    }
}
