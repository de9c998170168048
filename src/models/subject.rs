//! Subject model.
//!
//! A subject carries the academic credit weight that drives weekly
//! period distribution, plus the set of teachers eligible to teach it
//! and the classes it is assigned to.

use serde::{Deserialize, Serialize};

/// Subject classification.
///
/// Core subjects are guaranteed a minimum of three weekly periods by
/// the load calculator regardless of credit weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectType {
    /// Mandatory academic subject with a weekly minimum.
    Core,
    /// Optional subject.
    Elective,
    /// Language instruction.
    Language,
    /// Lab, workshop, or physical education.
    Practical,
}

/// A teachable subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Relative academic weight (positive).
    pub credits: f64,
    /// Subject classification.
    pub subject_type: SubjectType,
    /// Teachers allowed to teach this subject.
    pub eligible_teacher_ids: Vec<String>,
    /// Classes this subject is assigned to.
    pub assigned_class_ids: Vec<String>,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(id: impl Into<String>, credits: f64, subject_type: SubjectType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            credits,
            subject_type,
            eligible_teacher_ids: Vec::new(),
            assigned_class_ids: Vec::new(),
        }
    }

    /// Creates a core subject.
    pub fn core(id: impl Into<String>, credits: f64) -> Self {
        Self::new(id, credits, SubjectType::Core)
    }

    /// Creates an elective subject.
    pub fn elective(id: impl Into<String>, credits: f64) -> Self {
        Self::new(id, credits, SubjectType::Elective)
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an eligible teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.eligible_teacher_ids.push(teacher_id.into());
        self
    }

    /// Adds an assigned class.
    pub fn with_class(mut self, class_id: impl Into<String>) -> Self {
        self.assigned_class_ids.push(class_id.into());
        self
    }

    /// Whether a teacher is eligible for this subject.
    pub fn is_eligible(&self, teacher_id: &str) -> bool {
        self.eligible_teacher_ids.iter().any(|t| t == teacher_id)
    }

    /// Whether this is a core subject.
    #[inline]
    pub fn is_core(&self) -> bool {
        self.subject_type == SubjectType::Core
    }
}
