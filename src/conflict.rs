//! Teacher conflict scanning.
//!
//! Inspects the aggregate entry set across all classes and flags
//! teacher double-bookings: the same teacher bound to two entries on
//! the same day at the same slot start time.
//!
//! Detection-only by design. Classes are generated independently, so
//! two classes can legitimately pick the same teacher for the same
//! slot; this scanner is the diagnostic that surfaces it afterward.
//! There is no backtracking and no automatic reassignment.

use std::collections::HashMap;

use crate::models::{ClockTime, TimetableEntry, Weekday};

/// A detected teacher double-booking.
#[derive(Debug, Clone)]
pub struct Conflict {
    /// One of the colliding entries.
    pub first: TimetableEntry,
    /// The other colliding entry.
    pub second: TimetableEntry,
    /// Human-readable description.
    pub reason: String,
}

/// Scans entries for teacher double-bookings.
///
/// Two distinct entries conflict when they share teacher, day, and slot
/// start time. Each colliding pair is reported once.
///
/// # Example
///
/// ```
/// use classtime::conflict::scan;
///
/// assert!(scan(&[]).is_empty());
/// ```
pub fn scan(entries: &[TimetableEntry]) -> Vec<Conflict> {
    let mut by_key: HashMap<(&str, Weekday, ClockTime), Vec<&TimetableEntry>> = HashMap::new();
    for entry in entries {
        by_key
            .entry((entry.teacher_id.as_str(), entry.day, entry.slot.start))
            .or_default()
            .push(entry);
    }

    let mut conflicts = Vec::new();
    for group in by_key.values() {
        if group.len() < 2 {
            continue;
        }
        for (i, a) in group.iter().enumerate() {
            for b in &group[i + 1..] {
                if a.id != b.id || a.class_id != b.class_id {
                    conflicts.push(Conflict {
                        first: (*a).clone(),
                        second: (*b).clone(),
                        reason: "teacher has another class at this time".to_string(),
                    });
                }
            }
        }
    }
    conflicts
}
