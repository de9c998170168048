//! Timetabling domain models.
//!
//! Provides the core data types for representing a school's time
//! structure, its directories, and generated timetables.
//!
//! # Roles
//!
//! | Type | Role |
//! |------|------|
//! | `Settings` | Administrator-owned day structure (read-only input) |
//! | `TimeSlot` | One interval of a day's grid (class / recess / lunch) |
//! | `Subject`, `Teacher`, `SchoolClass` | Directory entities |
//! | `TimetableEntry` | One scheduled period |
//! | `ClassTimetable` | Per-class generation result |

mod class;
mod directory;
mod entry;
mod settings;
mod slot;
mod subject;
mod teacher;
mod time;

pub use class::SchoolClass;
pub use directory::SchoolDirectory;
pub use entry::{ClassTimetable, GenerationStatus, GenerationWarning, TimetableEntry};
pub use settings::{Settings, MAX_RECESS_COUNT};
pub use slot::{SlotKind, TimeSlot};
pub use subject::{Subject, SubjectType};
pub use teacher::Teacher;
pub use time::{ClockTime, TimeParseError, Weekday};
