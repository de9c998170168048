//! Timetable entry and per-class result models.
//!
//! A `ClassTimetable` is the complete output of one generation pass for
//! one class: the filled entries, the warnings for slots that could not
//! be filled, and an overall status. It is created wholesale by the
//! store and replaced on every regeneration; there is no incremental
//! patch path.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{TimeSlot, Weekday};

/// One scheduled period: a subject and teacher bound to a class slot.
///
/// # Invariants
/// `slot.kind == Class`; `subject_id` is in the owning class's assigned
/// set; `teacher_id` is in the subject's eligible set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Unique entry identifier.
    pub id: String,
    /// Owning class.
    pub class_id: String,
    /// Scheduled subject.
    pub subject_id: String,
    /// Assigned teacher.
    pub teacher_id: String,
    /// The class-kind slot this entry occupies.
    pub slot: TimeSlot,
    /// Day of week.
    pub day: Weekday,
    /// Room label, if one was assigned.
    pub room: Option<String>,
}

impl TimetableEntry {
    /// Creates a new entry. The id is derived from class, day, and slot,
    /// which makes it unique within one generation pass.
    pub fn new(
        class_id: impl Into<String>,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
        slot: TimeSlot,
        day: Weekday,
    ) -> Self {
        let class_id = class_id.into();
        let id = format!("{}:{}:{}", class_id, day, slot.id);
        Self {
            id,
            class_id,
            subject_id: subject_id.into(),
            teacher_id: teacher_id.into(),
            slot,
            day,
            room: None,
        }
    }

    /// Sets the room label.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

/// A slot the allocator could not fill, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationWarning {
    /// Class being generated.
    pub class_id: String,
    /// Day of the unfilled slot.
    pub day: Weekday,
    /// Grid position of the unfilled slot.
    pub slot_id: u32,
    /// Human-readable reason.
    pub reason: String,
}

impl GenerationWarning {
    /// Creates a new warning.
    pub fn new(
        class_id: impl Into<String>,
        day: Weekday,
        slot_id: u32,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            day,
            slot_id,
            reason: reason.into(),
        }
    }
}

/// Outcome of a generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationStatus {
    /// Entries were produced (possibly with warnings).
    Generated,
    /// The class has no assigned subjects; the entry list is empty.
    NoSubjects,
}

/// The generated weekly timetable for one class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassTimetable {
    /// Owning class.
    pub class_id: String,
    /// Scheduled periods.
    pub entries: Vec<TimetableEntry>,
    /// Slots that could not be filled.
    pub warnings: Vec<GenerationWarning>,
    /// Overall outcome.
    pub status: GenerationStatus,
}

impl ClassTimetable {
    /// Creates an empty timetable with the given status.
    pub fn empty(class_id: impl Into<String>, status: GenerationStatus) -> Self {
        Self {
            class_id: class_id.into(),
            entries: Vec::new(),
            warnings: Vec::new(),
            status,
        }
    }

    /// Adds an entry.
    pub fn add_entry(&mut self, entry: TimetableEntry) {
        self.entries.push(entry);
    }

    /// Adds a warning.
    pub fn add_warning(&mut self, warning: GenerationWarning) {
        self.warnings.push(warning);
    }

    /// Entries for a single day, in slot order.
    pub fn entries_for_day(&self, day: Weekday) -> Vec<&TimetableEntry> {
        self.entries.iter().filter(|e| e.day == day).collect()
    }

    /// Number of scheduled periods per subject.
    pub fn periods_by_subject(&self) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        for e in &self.entries {
            *counts.entry(e.subject_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of scheduled periods.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether any slot went unfilled.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
