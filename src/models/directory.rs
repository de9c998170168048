//! Read-only directory of classes, subjects, and teachers.
//!
//! The engine consumes these as external collaborators: it looks up but
//! never mutates them. Teacher order is preserved because allocation
//! resolves the first qualified teacher in directory order.

use serde::{Deserialize, Serialize};

use super::{SchoolClass, Subject, Teacher};

/// The school's class, subject, and teacher directories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchoolDirectory {
    /// All classes.
    pub classes: Vec<SchoolClass>,
    /// All subjects.
    pub subjects: Vec<Subject>,
    /// All teachers, in directory order.
    pub teachers: Vec<Teacher>,
}

impl SchoolDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class.
    pub fn with_class(mut self, class: SchoolClass) -> Self {
        self.classes.push(class);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Looks up a class by id.
    pub fn class(&self, id: &str) -> Option<&SchoolClass> {
        self.classes.iter().find(|c| c.id == id)
    }

    /// Looks up a subject by id.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Looks up a teacher by id.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// Subjects assigned to a class, in the class's assignment order.
    ///
    /// Ids that do not resolve are skipped: a dangling reference fails
    /// only the lookups that touch it, never the whole pass.
    pub fn subjects_for_class(&self, class: &SchoolClass) -> Vec<&Subject> {
        class
            .assigned_subject_ids
            .iter()
            .filter_map(|id| self.subject(id))
            .collect()
    }
}
