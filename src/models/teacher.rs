//! Teacher model.

use serde::{Deserialize, Serialize};

/// A teacher and the subjects they are qualified to teach.
///
/// Directory order matters: the allocator resolves the *first*
/// qualified teacher in directory order, with no load balancing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Subjects this teacher is qualified for.
    pub qualified_subject_ids: Vec<String>,
}

impl Teacher {
    /// Creates a new teacher.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            qualified_subject_ids: Vec::new(),
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a qualified subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.qualified_subject_ids.push(subject_id.into());
        self
    }

    /// Whether this teacher is qualified for a subject.
    pub fn is_qualified(&self, subject_id: &str) -> bool {
        self.qualified_subject_ids.iter().any(|s| s == subject_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("t1")
            .with_name("Ada Lovelace")
            .with_subject("math")
            .with_subject("cs");

        assert_eq!(t.id, "t1");
        assert_eq!(t.name, "Ada Lovelace");
        assert!(t.is_qualified("math"));
        assert!(t.is_qualified("cs"));
        assert!(!t.is_qualified("art"));
    }
}
