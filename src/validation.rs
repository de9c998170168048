//! Input validation for timetable generation.
//!
//! Checks structural integrity of the directories before generation.
//! Detects:
//! - Duplicate IDs
//! - Classes referencing unknown subjects
//! - Subjects referencing unknown teachers
//! - Eligibility sets inconsistent with teacher qualifications
//!
//! Also provides a non-blocking feasibility report for settings: a day
//! whose configured periods and breaks exceed the school-day span is
//! surfaced as an issue with a percentage-used indicator, but the user
//! may proceed with generation anyway.

use std::collections::HashSet;

use crate::models::{SchoolDirectory, Settings};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A class references a subject that doesn't exist.
    UnknownSubject,
    /// A subject references a teacher that doesn't exist.
    UnknownTeacher,
    /// A subject lists an eligible teacher that is not qualified for it.
    EligibilityMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates directory integrity.
///
/// Checks:
/// 1. No duplicate class, subject, or teacher IDs
/// 2. All subject references in classes resolve
/// 3. All teacher references in subjects resolve
/// 4. Every eligible teacher is also qualified for the subject
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_directory(directory: &SchoolDirectory) -> ValidationResult {
    let mut errors = Vec::new();

    let mut class_ids = HashSet::new();
    for c in &directory.classes {
        if !class_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate class ID: {}", c.id),
            ));
        }
    }

    let mut subject_ids = HashSet::new();
    for s in &directory.subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }
    }

    let mut teacher_ids = HashSet::new();
    for t in &directory.teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    // Subject references in classes
    for c in &directory.classes {
        for sid in &c.assigned_subject_ids {
            if !subject_ids.contains(sid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!("Class '{}' references unknown subject '{}'", c.id, sid),
                ));
            }
        }
    }

    // Teacher references and qualification consistency in subjects
    for s in &directory.subjects {
        for tid in &s.eligible_teacher_ids {
            match directory.teacher(tid) {
                None => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownTeacher,
                        format!("Subject '{}' references unknown teacher '{}'", s.id, tid),
                    ));
                }
                Some(teacher) if !teacher.is_qualified(&s.id) => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::EligibilityMismatch,
                        format!(
                            "Subject '{}' lists teacher '{}' who is not qualified for it",
                            s.id, tid
                        ),
                    ));
                }
                Some(_) => {}
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Non-blocking settings feasibility report.
#[derive(Debug, Clone)]
pub struct SettingsReport {
    /// Problems worth surfacing to the administrator.
    pub issues: Vec<String>,
    /// Required time as a percentage of the school-day span.
    pub percent_used: f64,
}

impl SettingsReport {
    /// Whether the configured day fits its span.
    pub fn fits(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Estimates whether the configured periods and breaks fit the school
/// day.
///
/// Required minutes = periods + recesses + lunch + minimum gaps between
/// consecutive periods. An over-committed day is reported, never
/// rejected: generation proceeds and simply produces a shorter grid.
pub fn check_settings(settings: &Settings) -> SettingsReport {
    let periods = settings.max_periods_per_day * settings.class_duration_min as u32;
    let recesses = settings.recess_count as u32 * settings.recess_duration_min as u32;
    let gaps = settings.max_periods_per_day.saturating_sub(1) * settings.min_break_min as u32;
    let required = periods + recesses + settings.lunch_duration_min as u32 + gaps;
    let available = settings.day_span_min() as u32;

    let mut issues = Vec::new();
    let percent_used = if available == 0 {
        issues.push("school day has zero length".to_string());
        100.0
    } else {
        let pct = required as f64 / available as f64 * 100.0;
        if required > available {
            issues.push(format!(
                "configured periods and breaks need {required} min but the school day spans {available} min"
            ));
        }
        pct
    };

    SettingsReport {
        issues,
        percent_used,
    }
}
