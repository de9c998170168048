//! Timetable generation and conflict detection for schools.
//!
//! Given a school day's time structure, a class's assigned subjects,
//! and a roster of qualified teachers, produces a weekly grid of class
//! periods — distributing periods among subjects proportionally to
//! credit weight, with guaranteed minimums for core subjects — and
//! detects teacher double-bookings across classes.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Settings`, `TimeSlot`, `Subject`,
//!   `Teacher`, `SchoolClass`, `TimetableEntry`, `ClassTimetable`
//! - **`grid`**: Day-grid construction from settings
//! - **`load`**: Credit-weighted weekly period targets
//! - **`generator`**: Per-day candidate pools and slot allocation
//! - **`conflict`**: Cross-class teacher double-booking scanner
//! - **`store`**: Timetable ownership and pipeline orchestration
//! - **`validation`**: Directory integrity and settings feasibility
//! - **`stats`**: Fill-rate and load KPIs
//! - **`export`**: Flat-row export with name resolution
//!
//! # Pipeline
//!
//! Settings + directories → grid → load targets → day pools →
//! allocation → entries held by [`store::TimetableStore`]; the
//! conflict scanner runs on demand against the aggregate state.
//!
//! The engine is not a global constraint solver: classes are generated
//! independently and collisions are detected afterward, not avoided.

pub mod conflict;
pub mod error;
pub mod export;
pub mod generator;
pub mod grid;
pub mod load;
pub mod models;
pub mod stats;
pub mod store;
pub mod validation;

pub use error::{EngineError, EngineResult};
pub use store::TimetableStore;
