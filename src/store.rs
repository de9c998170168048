//! Timetable store and generation orchestration.
//!
//! Owns the per-class map of generated timetables and runs the full
//! pipeline: day grid → weekly load targets → per-day pools → slot
//! allocation. Generation is a destructive, wholesale replacement of a
//! class's schedule; the store keeps only the latest state, with no
//! undo and no transactional semantics.
//!
//! # Cross-class independence
//!
//! `generate_all` processes classes strictly sequentially but shares no
//! scheduling state between them, so two classes can select the same
//! teacher for the same day and slot. That is intentional: the result
//! is best-effort and [`scan_conflicts`](TimetableStore::scan_conflicts)
//! surfaces collisions afterward. A stronger variant could thread a
//! teacher-reservation table through the loop; the sequential shape
//! here is what makes that extension possible.

use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, info};

use crate::conflict::{self, Conflict};
use crate::error::{EngineError, EngineResult};
use crate::generator::{build_day_pool, Allocator};
use crate::models::{
    ClassTimetable, GenerationStatus, SchoolDirectory, Settings, TimetableEntry,
};
use crate::{grid, load};

/// Owns generated timetables, keyed by class id.
#[derive(Debug, Default)]
pub struct TimetableStore {
    timetables: HashMap<String, ClassTimetable>,
    generating: bool,
}

impl TimetableStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the weekly timetable for one class, replacing whatever
    /// the store held for it.
    ///
    /// A class with no assigned subjects yields an empty timetable with
    /// [`GenerationStatus::NoSubjects`]; that is a reported condition,
    /// not an error. Unfillable slots are recorded as warnings on the
    /// stored timetable.
    ///
    /// Production callers pass `&mut rand::rng()`; tests pin a seeded
    /// RNG for reproducible pools.
    ///
    /// # Errors
    /// [`EngineError::UnknownClass`] if the class id does not resolve;
    /// [`EngineError::GenerationInProgress`] if a pass is already
    /// running on this store.
    pub fn generate<R: Rng>(
        &mut self,
        class_id: &str,
        settings: &Settings,
        directory: &SchoolDirectory,
        rng: &mut R,
    ) -> EngineResult<GenerationStatus> {
        if self.generating {
            return Err(EngineError::GenerationInProgress);
        }
        self.generating = true;
        let status = self.generate_one(class_id, settings, directory, rng);
        self.generating = false;
        status
    }

    /// Regenerates every class in the directory, sequentially.
    ///
    /// Each class is generated independently; see the module docs for
    /// why resulting cross-class teacher collisions are surfaced by the
    /// scanner instead of being avoided here.
    pub fn generate_all<R: Rng>(
        &mut self,
        settings: &Settings,
        directory: &SchoolDirectory,
        rng: &mut R,
    ) -> EngineResult<()> {
        if self.generating {
            return Err(EngineError::GenerationInProgress);
        }
        self.generating = true;
        let class_ids: Vec<String> = directory.classes.iter().map(|c| c.id.clone()).collect();
        for class_id in &class_ids {
            if let Err(e) = self.generate_one(class_id, settings, directory, rng) {
                self.generating = false;
                return Err(e);
            }
        }
        self.generating = false;
        info!(classes = class_ids.len(), "regenerated all class timetables");
        Ok(())
    }

    fn generate_one<R: Rng>(
        &mut self,
        class_id: &str,
        settings: &Settings,
        directory: &SchoolDirectory,
        rng: &mut R,
    ) -> EngineResult<GenerationStatus> {
        let class = directory
            .class(class_id)
            .ok_or_else(|| EngineError::UnknownClass(class_id.to_string()))?;

        if !class.has_subjects() {
            debug!(class = %class_id, "no subjects assigned, storing empty timetable");
            self.timetables.insert(
                class_id.to_string(),
                ClassTimetable::empty(class_id, GenerationStatus::NoSubjects),
            );
            return Ok(GenerationStatus::NoSubjects);
        }

        let slots = grid::class_slots(settings);
        let subjects = directory.subjects_for_class(class);
        let targets = load::distribute(&subjects, grid::weekly_class_slot_count(settings));
        let allocator = Allocator::new(directory);
        let n_days = settings.working_day_count();

        let mut timetable = ClassTimetable::empty(class_id, GenerationStatus::Generated);
        for (day_index, &day) in settings.working_days.iter().enumerate() {
            let pool = build_day_pool(&subjects, &targets, day_index, n_days, rng);
            let (entries, warnings) = allocator.allocate_day(class, day, &slots, &pool, rng);
            timetable.entries.extend(entries);
            timetable.warnings.extend(warnings);
        }

        info!(
            class = %class_id,
            entries = timetable.entry_count(),
            warnings = timetable.warnings.len(),
            "generated class timetable"
        );
        self.timetables.insert(class_id.to_string(), timetable);
        Ok(GenerationStatus::Generated)
    }

    /// The stored timetable for a class, if one has been generated.
    pub fn get_by_class(&self, class_id: &str) -> Option<&ClassTimetable> {
        self.timetables.get(class_id)
    }

    /// All stored timetables.
    pub fn get_all(&self) -> Vec<&ClassTimetable> {
        self.timetables.values().collect()
    }

    /// Every entry across all stored timetables.
    pub fn all_entries(&self) -> Vec<TimetableEntry> {
        self.timetables
            .values()
            .flat_map(|t| t.entries.iter().cloned())
            .collect()
    }

    /// Runs the conflict scanner over the aggregate stored state.
    pub fn scan_conflicts(&self) -> Vec<Conflict> {
        conflict::scan(&self.all_entries())
    }

    /// Whether a generation pass is currently running.
    pub fn is_generating(&self) -> bool {
        self.generating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, SchoolClass, Subject, Teacher};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_settings() -> Settings {
        Settings::new(ClockTime::new(8, 0), ClockTime::new(15, 0))
    }

    fn sample_directory() -> SchoolDirectory {
        SchoolDirectory::new()
            .with_class(
                SchoolClass::new("c1")
                    .with_name("7A")
                    .with_subject("math")
                    .with_subject("art")
                    .with_students(25),
            )
            .with_class(SchoolClass::new("c2").with_name("7B").with_subject("math"))
            .with_class(SchoolClass::new("empty"))
            .with_subject(Subject::core("math", 4.0).with_teacher("t1"))
            .with_subject(Subject::elective("art", 1.0).with_teacher("t2"))
            .with_teacher(Teacher::new("t1").with_subject("math"))
            .with_teacher(Teacher::new("t2").with_subject("art"))
    }

    #[test]
    fn test_generate_fills_store() {
        let mut store = TimetableStore::new();
        let mut rng = SmallRng::seed_from_u64(42);
        let status = store
            .generate("c1", &sample_settings(), &sample_directory(), &mut rng)
            .unwrap();

        assert_eq!(status, GenerationStatus::Generated);
        let tt = store.get_by_class("c1").unwrap();
        assert!(tt.entry_count() > 0);
        assert!(!store.is_generating());
    }

    #[test]
    fn test_generated_entries_hold_invariants() {
        let mut store = TimetableStore::new();
        let dir = sample_directory();
        let mut rng = SmallRng::seed_from_u64(42);
        store.generate("c1", &sample_settings(), &dir, &mut rng).unwrap();

        let class = dir.class("c1").unwrap();
        for e in &store.get_by_class("c1").unwrap().entries {
            assert!(e.slot.is_class());
            assert!(class.has_subject(&e.subject_id));
            let subject = dir.subject(&e.subject_id).unwrap();
            assert!(subject.is_eligible(&e.teacher_id));
        }
    }

    #[test]
    fn test_core_subject_weekly_minimum() {
        let mut store = TimetableStore::new();
        let mut rng = SmallRng::seed_from_u64(42);
        store
            .generate("c1", &sample_settings(), &sample_directory(), &mut rng)
            .unwrap();

        let counts = store.get_by_class("c1").unwrap().periods_by_subject();
        assert!(counts["math"] >= 3, "core subject below weekly minimum");
    }

    #[test]
    fn test_no_subjects_condition() {
        let mut store = TimetableStore::new();
        let mut rng = SmallRng::seed_from_u64(42);
        let status = store
            .generate("empty", &sample_settings(), &sample_directory(), &mut rng)
            .unwrap();

        assert_eq!(status, GenerationStatus::NoSubjects);
        let tt = store.get_by_class("empty").unwrap();
        assert_eq!(tt.entry_count(), 0);
        assert_eq!(tt.status, GenerationStatus::NoSubjects);
    }

    #[test]
    fn test_unknown_class_errors() {
        let mut store = TimetableStore::new();
        let mut rng = SmallRng::seed_from_u64(42);
        let err = store
            .generate("ghost", &sample_settings(), &sample_directory(), &mut rng)
            .unwrap_err();
        assert_eq!(err, EngineError::UnknownClass("ghost".to_string()));
    }

    #[test]
    fn test_regeneration_replaces_wholesale() {
        let mut store = TimetableStore::new();
        let dir = sample_directory();
        let settings = sample_settings();
        let mut rng = SmallRng::seed_from_u64(42);

        store.generate("c1", &settings, &dir, &mut rng).unwrap();
        let first_ids: Vec<String> = store
            .get_by_class("c1")
            .unwrap()
            .entries
            .iter()
            .map(|e| e.id.clone())
            .collect();

        store.generate("c1", &settings, &dir, &mut rng).unwrap();
        let tt = store.get_by_class("c1").unwrap();
        // Same slot structure, fully rebuilt entry list
        assert_eq!(tt.entries.len(), first_ids.len());
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn test_same_seed_reproduces() {
        let dir = sample_directory();
        let settings = sample_settings();

        let mut store_a = TimetableStore::new();
        let mut rng_a = SmallRng::seed_from_u64(99);
        store_a.generate("c1", &settings, &dir, &mut rng_a).unwrap();

        let mut store_b = TimetableStore::new();
        let mut rng_b = SmallRng::seed_from_u64(99);
        store_b.generate("c1", &settings, &dir, &mut rng_b).unwrap();

        let subjects_a: Vec<&str> = store_a
            .get_by_class("c1")
            .unwrap()
            .entries
            .iter()
            .map(|e| e.subject_id.as_str())
            .collect();
        let subjects_b: Vec<&str> = store_b
            .get_by_class("c1")
            .unwrap()
            .entries
            .iter()
            .map(|e| e.subject_id.as_str())
            .collect();
        assert_eq!(subjects_a, subjects_b);
    }

    #[test]
    fn test_generate_all_and_conflict_scan() {
        // c1 and c2 both take math from the only qualified teacher, so
        // independent generation is guaranteed to double-book t1.
        let mut store = TimetableStore::new();
        let dir = sample_directory();
        let mut rng = SmallRng::seed_from_u64(42);
        store.generate_all(&sample_settings(), &dir, &mut rng).unwrap();

        assert!(store.get_by_class("c1").is_some());
        assert!(store.get_by_class("c2").is_some());
        assert!(store.get_by_class("empty").is_some());

        let conflicts = store.scan_conflicts();
        assert!(!conflicts.is_empty(), "expected t1 to be double-booked");
        for c in &conflicts {
            assert_eq!(c.first.teacher_id, c.second.teacher_id);
            assert_eq!(c.first.day, c.second.day);
            assert_eq!(c.first.slot.start, c.second.slot.start);
        }
    }

    #[test]
    fn test_all_entries_aggregates() {
        let mut store = TimetableStore::new();
        let dir = sample_directory();
        let mut rng = SmallRng::seed_from_u64(42);
        store.generate_all(&sample_settings(), &dir, &mut rng).unwrap();

        let per_class: usize = store.get_all().iter().map(|t| t.entry_count()).sum();
        assert_eq!(store.all_entries().len(), per_class);
    }
}
