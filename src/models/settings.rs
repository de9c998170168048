//! School day settings.
//!
//! The administrator-owned time structure of a school day: opening
//! hours, period and break durations, and the enabled working days.
//! Settings are a read-only input to generation — the engine never
//! mutates them, and the day grid is recomputed from them each time
//! it is needed.

use serde::{Deserialize, Serialize};

use super::{ClockTime, Weekday};

/// Number of recess periods an administrator may configure.
pub const MAX_RECESS_COUNT: u8 = 4;

/// Administrator-supplied day structure and scheduling limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// First minute of the school day.
    pub school_start: ClockTime,
    /// End of the school day (exclusive).
    pub school_end: ClockTime,
    /// Length of one teaching period (minutes).
    pub class_duration_min: u16,
    /// Length of one recess break (minutes).
    pub recess_duration_min: u16,
    /// Length of the lunch block (minutes).
    pub lunch_duration_min: u16,
    /// Number of recess breaks per day (1-4).
    pub recess_count: u8,
    /// Days enabled for scheduling, in week order.
    pub working_days: Vec<Weekday>,
    /// Upper bound on teaching periods per day.
    pub max_periods_per_day: u32,
    /// Minimum gap between consecutive periods (minutes). Used by the
    /// feasibility check only; the grid packs periods back to back.
    pub min_break_min: u16,
}

impl Settings {
    /// Creates settings with the given school hours and common defaults:
    /// 45-minute periods, two 15-minute recesses, 30-minute lunch,
    /// Monday-Friday, at most 8 periods per day.
    pub fn new(school_start: ClockTime, school_end: ClockTime) -> Self {
        Self {
            school_start,
            school_end,
            class_duration_min: 45,
            recess_duration_min: 15,
            lunch_duration_min: 30,
            recess_count: 2,
            working_days: vec![
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
            ],
            max_periods_per_day: 8,
            min_break_min: 0,
        }
    }

    /// Sets the period duration.
    pub fn with_class_duration(mut self, minutes: u16) -> Self {
        self.class_duration_min = minutes;
        self
    }

    /// Sets the recess duration.
    pub fn with_recess_duration(mut self, minutes: u16) -> Self {
        self.recess_duration_min = minutes;
        self
    }

    /// Sets the lunch duration.
    pub fn with_lunch_duration(mut self, minutes: u16) -> Self {
        self.lunch_duration_min = minutes;
        self
    }

    /// Sets the recess count, clamped to 1-4.
    pub fn with_recess_count(mut self, count: u8) -> Self {
        self.recess_count = count.clamp(1, MAX_RECESS_COUNT);
        self
    }

    /// Sets the working days.
    pub fn with_working_days(mut self, days: Vec<Weekday>) -> Self {
        self.working_days = days;
        self
    }

    /// Sets the per-day period cap.
    pub fn with_max_periods(mut self, max: u32) -> Self {
        self.max_periods_per_day = max;
        self
    }

    /// Sets the minimum break between periods.
    pub fn with_min_break(mut self, minutes: u16) -> Self {
        self.min_break_min = minutes;
        self
    }

    /// Length of the school day in minutes.
    #[inline]
    pub fn day_span_min(&self) -> u16 {
        self.school_start.minutes_until(self.school_end)
    }

    /// Number of enabled working days.
    #[inline]
    pub fn working_day_count(&self) -> usize {
        self.working_days.len()
    }
}
