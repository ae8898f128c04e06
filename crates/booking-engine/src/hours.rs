//! Business-hours configuration and the candidate slot grid.
//!
//! Slot generation is independent of any booking data: the grid is a pure
//! function of the configuration, so availability filtering stays a strictly
//! separate, composable stage.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{EngineError, Result};

/// A candidate appointment start time on the business-hour grid.
///
/// Slots are only produced by [`BusinessHours::slots`], which keeps the hour
/// and minute within a valid time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    hour: u32,
    minute: u32,
}

impl Slot {
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Zero-padded `HH:MM` label, the wire format for availability results.
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Materialize this slot as a concrete start timestamp on `date`.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        // The grid never emits an hour past the closing hour (≤ 23) or a
        // minute of 60 or more.
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .expect("slot time within 00:00-23:59");
        date.and_time(time)
    }
}

/// Opening hour, closing hour and slot granularity for one business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    opening_hour: u32,
    closing_hour: u32,
    granularity_minutes: u32,
}

impl Default for BusinessHours {
    /// The reference configuration: open 11:00, close 21:00, 15-minute grid.
    fn default() -> Self {
        Self {
            opening_hour: 11,
            closing_hour: 21,
            granularity_minutes: 15,
        }
    }
}

impl BusinessHours {
    /// Validated constructor.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidHours` when `opening > closing`, when the
    /// closing hour is past 23, or when the granularity is zero.
    pub fn new(opening_hour: u32, closing_hour: u32, granularity_minutes: u32) -> Result<Self> {
        if opening_hour > closing_hour {
            return Err(EngineError::InvalidHours(format!(
                "opening hour {} is after closing hour {}",
                opening_hour, closing_hour
            )));
        }
        if closing_hour > 23 {
            return Err(EngineError::InvalidHours(format!(
                "closing hour {} is past 23",
                closing_hour
            )));
        }
        if granularity_minutes == 0 {
            return Err(EngineError::InvalidHours(
                "granularity must be a positive number of minutes".to_string(),
            ));
        }
        Ok(Self {
            opening_hour,
            closing_hour,
            granularity_minutes,
        })
    }

    pub fn opening_hour(&self) -> u32 {
        self.opening_hour
    }

    pub fn closing_hour(&self) -> u32 {
        self.closing_hour
    }

    pub fn granularity_minutes(&self) -> u32 {
        self.granularity_minutes
    }

    /// The candidate slot grid for one business day.
    ///
    /// Lazy, finite and restartable: every granularity boundary from the
    /// opening hour at minute 0 through the closing hour's last boundary
    /// before the next hour. With the reference configuration (11:00–21:00,
    /// 15 minutes) this yields 44 slots, `11:00` through `21:45`.
    pub fn slots(&self) -> Slots {
        Slots {
            closing_hour: self.closing_hour,
            step: self.granularity_minutes,
            hour: self.opening_hour,
            minute: 0,
        }
    }
}

/// Iterator over the candidate slot grid. Each call to
/// [`BusinessHours::slots`] produces a fresh, independent pass.
#[derive(Debug, Clone)]
pub struct Slots {
    closing_hour: u32,
    step: u32,
    hour: u32,
    minute: u32,
}

impl Iterator for Slots {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        if self.hour > self.closing_hour {
            return None;
        }
        let slot = Slot {
            hour: self.hour,
            minute: self.minute,
        };
        // Minutes restart at 0 each hour, so a step that does not divide 60
        // still stays aligned to the top of every hour.
        self.minute += self.step;
        if self.minute >= 60 {
            self.minute = 0;
            self.hour += 1;
        }
        Some(slot)
    }
}
