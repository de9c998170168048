//! Time slot model.
//!
//! A day's grid is an ordered sequence of slots tagged class, recess,
//! or lunch. Grids are derived from [`Settings`](super::Settings) on
//! demand and never persisted.
//!
//! # Invariant
//! Within one day's grid, slots are contiguous, non-overlapping, and
//! ordered by start time.

use serde::{Deserialize, Serialize};

use super::ClockTime;

/// Slot classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// A teaching period. Only these receive timetable entries.
    Class,
    /// A short break between periods.
    Recess,
    /// The lunch block.
    Lunch,
}

/// A single contiguous interval `[start, end)` in a day's grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Position within the day's grid (0-based, over all kinds).
    pub id: u32,
    /// Interval start (inclusive).
    pub start: ClockTime,
    /// Interval end (exclusive).
    pub end: ClockTime,
    /// Slot classification.
    pub kind: SlotKind,
}

impl TimeSlot {
    /// Creates a slot starting at `start` with the given duration.
    pub fn new(id: u32, start: ClockTime, duration_min: u16, kind: SlotKind) -> Self {
        Self {
            id,
            start,
            end: start.plus(duration_min),
            kind,
        }
    }

    /// Slot duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.start.minutes_until(self.end)
    }

    /// Whether this is a teaching period.
    #[inline]
    pub fn is_class(&self) -> bool {
        self.kind == SlotKind::Class
    }

    /// Whether two slots overlap in time.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Human-readable time range, e.g. `08:00-08:45`.
    pub fn time_range(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_duration() {
        let s = TimeSlot::new(0, ClockTime::new(8, 0), 45, SlotKind::Class);
        assert_eq!(s.duration_min(), 45);
        assert_eq!(s.end, ClockTime::new(8, 45));
        assert!(s.is_class());
    }

    #[test]
    fn test_slot_overlap() {
        let a = TimeSlot::new(0, ClockTime::new(8, 0), 45, SlotKind::Class);
        let b = TimeSlot::new(1, ClockTime::new(8, 30), 45, SlotKind::Class);
        let c = TimeSlot::new(2, ClockTime::new(8, 45), 15, SlotKind::Recess);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c)); // touching but not overlapping
    }

    #[test]
    fn test_time_range() {
        let s = TimeSlot::new(3, ClockTime::new(12, 0), 30, SlotKind::Lunch);
        assert_eq!(s.time_range(), "12:00-12:30");
        assert!(!s.is_class());
    }
}
