//! Timetable quality metrics.
//!
//! Computes diagnostic indicators from generated timetables: how much
//! of the weekly grid was filled, and how the load landed per subject
//! and per teacher. Purely informational — nothing here feeds back into
//! generation.

use std::collections::HashMap;

use crate::grid;
use crate::models::{ClassTimetable, Settings};

/// Fill and load indicators for a set of generated timetables.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Class slots available per week across the measured classes.
    pub total_slots: u32,
    /// Entries actually scheduled.
    pub filled_slots: u32,
    /// filled / total (1.0 when no slots exist).
    pub fill_rate: f64,
    /// Weekly periods per subject, across all measured classes.
    pub periods_by_subject: HashMap<String, u32>,
    /// Weekly periods per teacher, across all measured classes.
    pub periods_by_teacher: HashMap<String, u32>,
    /// Unfilled-slot warnings across all measured classes.
    pub warning_count: u32,
}

impl TimetableKpi {
    /// Computes KPIs over a set of class timetables.
    ///
    /// `settings` supplies the weekly slot capacity per class.
    pub fn calculate(timetables: &[&ClassTimetable], settings: &Settings) -> Self {
        let per_class = grid::weekly_class_slot_count(settings);
        let total_slots = per_class * timetables.len() as u32;

        let mut filled_slots: u32 = 0;
        let mut periods_by_subject: HashMap<String, u32> = HashMap::new();
        let mut periods_by_teacher: HashMap<String, u32> = HashMap::new();
        let mut warning_count: u32 = 0;

        for tt in timetables {
            filled_slots += tt.entry_count() as u32;
            warning_count += tt.warnings.len() as u32;
            for e in &tt.entries {
                *periods_by_subject.entry(e.subject_id.clone()).or_insert(0) += 1;
                *periods_by_teacher.entry(e.teacher_id.clone()).or_insert(0) += 1;
            }
        }

        let fill_rate = if total_slots == 0 {
            1.0
        } else {
            filled_slots as f64 / total_slots as f64
        };

        Self {
            total_slots,
            filled_slots,
            fill_rate,
            periods_by_subject,
            periods_by_teacher,
            warning_count,
        }
    }
}
