//! Tests for prospective-booking conflict validation.

use booking_engine::booking::{Booking, BookingStatus};
use booking_engine::error::EngineError;
use booking_engine::{find_conflicts, validate_no_conflict};
use chrono::{NaiveDate, NaiveDateTime};

/// Helper: timestamp on the fixed test day.
fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn booking(hour: u32, minute: u32, duration: u32) -> Booking {
    Booking::new("Misaki Tanaka", at(hour, minute), duration)
}

fn confirmed(hour: u32, minute: u32, duration: u32) -> Booking {
    Booking {
        status: BookingStatus::Confirmed,
        ..booking(hour, minute, duration)
    }
}

#[test]
fn partial_overlap_is_a_conflict() {
    // Existing 14:00-15:00, new 14:30-15:30.
    let existing = vec![confirmed(14, 0, 60)];
    let candidate = booking(14, 30, 60);

    let err = validate_no_conflict(&candidate, &existing).unwrap_err();
    assert!(matches!(err, EngineError::SlotConflict { .. }));
}

#[test]
fn disjoint_bookings_do_not_conflict() {
    let existing = vec![confirmed(14, 0, 60)];
    let candidate = booking(16, 0, 60);

    assert!(validate_no_conflict(&candidate, &existing).is_ok());
}

#[test]
fn exact_start_always_conflicts() {
    // Identical start times conflict regardless of duration.
    let existing = vec![confirmed(14, 0, 60)];
    for duration in [15, 45, 60, 120] {
        let candidate = booking(14, 0, duration);
        assert!(
            validate_no_conflict(&candidate, &existing).is_err(),
            "duration {} should conflict",
            duration
        );
    }
}

#[test]
fn touching_end_to_start_is_not_a_conflict() {
    // New booking ends at 15:00 exactly when the existing one starts.
    let existing = vec![confirmed(15, 0, 60)];
    let candidate = booking(14, 0, 60);

    assert!(validate_no_conflict(&candidate, &existing).is_ok());
}

#[test]
fn touching_start_to_end_is_not_a_conflict() {
    // New booking starts at 15:00 exactly when the existing one ends.
    let existing = vec![confirmed(14, 0, 60)];
    let candidate = booking(15, 0, 60);

    assert!(validate_no_conflict(&candidate, &existing).is_ok());
}

#[test]
fn cancelled_bookings_never_conflict() {
    let cancelled = Booking {
        status: BookingStatus::Cancelled,
        ..booking(14, 0, 60)
    };
    let candidate = booking(14, 30, 60);

    assert!(validate_no_conflict(&candidate, &[cancelled]).is_ok());
}

#[test]
fn all_non_cancelled_statuses_occupy_their_window() {
    for status in [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
    ] {
        let existing = vec![Booking {
            status,
            ..booking(14, 0, 60)
        }];
        let candidate = booking(14, 30, 60);
        assert!(
            validate_no_conflict(&candidate, &existing).is_err(),
            "{:?} booking should still block",
            status
        );
    }
}

#[test]
fn long_booking_blocks_later_starts() {
    // Existing 13:00-15:00 (120 minutes); a 14:00 start lands inside it.
    let existing = vec![confirmed(13, 0, 120)];
    let candidate = booking(14, 0, 60);

    assert!(validate_no_conflict(&candidate, &existing).is_err());
}

#[test]
fn check_is_order_independent() {
    let a = confirmed(12, 0, 60);
    let b = confirmed(14, 0, 60);
    let candidate = booking(14, 30, 60);

    assert!(validate_no_conflict(&candidate, &[a.clone(), b.clone()]).is_err());
    assert!(validate_no_conflict(&candidate, &[b, a]).is_err());
}

#[test]
fn empty_existing_set_passes() {
    let candidate = booking(14, 0, 60);
    assert!(validate_no_conflict(&candidate, &[]).is_ok());
}

#[test]
fn zero_duration_is_a_precondition_failure() {
    let candidate = booking(14, 0, 0);
    let err = validate_no_conflict(&candidate, &[]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidDuration(0)));
}

#[test]
fn conflict_message_names_both_windows() {
    let existing = vec![confirmed(14, 0, 60)];
    let candidate = booking(14, 30, 60);

    let message = validate_no_conflict(&candidate, &existing)
        .unwrap_err()
        .to_string();
    assert!(message.contains("Misaki Tanaka"));
    assert!(message.contains("14:00"));
    assert!(message.contains("14:30"));
}

#[test]
fn find_conflicts_reports_every_overlap() {
    // Candidate 13:30-15:30 overlaps both hour-long bookings.
    let existing = vec![confirmed(13, 0, 60), confirmed(15, 0, 60), confirmed(18, 0, 60)];
    let candidate = booking(13, 30, 120);

    let conflicts = find_conflicts(&candidate, &existing);
    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].overlap_minutes, 30); // 13:30-14:00
    assert_eq!(conflicts[1].overlap_minutes, 30); // 15:00-15:30
}

#[test]
fn fully_contained_overlap_is_the_shorter_duration() {
    // Existing 9:00-12:00; candidate 10:00-11:00 sits fully inside.
    let existing = vec![confirmed(9, 0, 180)];
    let candidate = booking(10, 0, 60);

    let conflicts = find_conflicts(&candidate, &existing);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 60);
}
