//! Flat-row export of generated entries.
//!
//! Presentation and export collaborators consume one row per entry,
//! with ids resolved to human-readable names through the directories.
//! Lookup failures never abort an export: an unresolvable id falls back
//! to the raw id so the row still renders.

use serde::Serialize;

use crate::models::{SchoolDirectory, TimetableEntry};

/// One exportable timetable row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    /// Day name, e.g. `Monday`.
    pub day: String,
    /// Time range, e.g. `08:00-08:45`.
    pub time: String,
    /// Resolved subject name (raw id if unresolvable).
    pub subject: String,
    /// Resolved teacher name (raw id if unresolvable).
    pub teacher: String,
    /// Room label, empty if none was assigned.
    pub room: String,
}

/// Renders entries as export rows, resolving names via the directory.
pub fn export_rows(entries: &[TimetableEntry], directory: &SchoolDirectory) -> Vec<ExportRow> {
    entries
        .iter()
        .map(|e| {
            let subject = directory
                .subject(&e.subject_id)
                .filter(|s| !s.name.is_empty())
                .map(|s| s.name.clone())
                .unwrap_or_else(|| e.subject_id.clone());
            let teacher = directory
                .teacher(&e.teacher_id)
                .filter(|t| !t.name.is_empty())
                .map(|t| t.name.clone())
                .unwrap_or_else(|| e.teacher_id.clone());
            ExportRow {
                day: e.day.to_string(),
                time: e.slot.time_range(),
                subject,
                teacher,
                room: e.room.clone().unwrap_or_default(),
            }
        })
        .collect()
}
