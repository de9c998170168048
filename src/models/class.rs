//! School class model.

use serde::{Deserialize, Serialize};

/// A class (student group) to be timetabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolClass {
    /// Unique class identifier.
    pub id: String,
    /// Human-readable name (e.g. "7B").
    pub name: String,
    /// Subjects assigned to this class.
    pub assigned_subject_ids: Vec<String>,
    /// Number of enrolled students.
    pub student_count: u32,
}

impl SchoolClass {
    /// Creates a new class.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            assigned_subject_ids: Vec::new(),
            student_count: 0,
        }
    }

    /// Sets the class name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an assigned subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.assigned_subject_ids.push(subject_id.into());
        self
    }

    /// Sets the student count.
    pub fn with_students(mut self, count: u32) -> Self {
        self.student_count = count;
        self
    }

    /// Whether a subject is assigned to this class.
    pub fn has_subject(&self, subject_id: &str) -> bool {
        self.assigned_subject_ids.iter().any(|s| s == subject_id)
    }

    /// Whether any subjects are assigned.
    pub fn has_subjects(&self) -> bool {
        !self.assigned_subject_ids.is_empty()
    }
}
