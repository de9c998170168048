//! Slot allocation.
//!
//! Pairs a day's class slots with the day's candidate pool, resolving a
//! qualified teacher and a room for each pairing. Allocation is greedy
//! and local to one class: nothing here knows what other classes have
//! scheduled, so cross-class collisions are possible and are surfaced
//! later by the conflict scanner.
//!
//! # Failure handling
//!
//! A slot with no qualified teacher, or whose pooled subject id does
//! not resolve, is left unfilled and recorded as a
//! [`GenerationWarning`]. A pool shorter than the day's slot list
//! simply leaves the trailing slots empty; a pool longer than the slot
//! list is truncated. Neither aborts the pass.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::warn;

use crate::models::{
    GenerationWarning, SchoolClass, SchoolDirectory, Teacher, TimeSlot, TimetableEntry, Weekday,
};

/// Room labels assigned to entries. Drawn pseudo-randomly; there is no
/// cross-class room-collision checking.
const ROOM_POOL: [&str; 6] = ["101", "102", "103", "104", "201", "202"];

/// Allocates pooled subjects onto one day's class slots.
#[derive(Debug, Clone, Copy)]
pub struct Allocator<'a> {
    directory: &'a SchoolDirectory,
}

impl<'a> Allocator<'a> {
    /// Creates an allocator over a directory.
    pub fn new(directory: &'a SchoolDirectory) -> Self {
        Self { directory }
    }

    /// Fills one day's class slots from the shuffled pool.
    ///
    /// Slot index `i` consumes `pool[i]` while in bounds. Returns the
    /// produced entries and the warnings for slots left unfilled.
    pub fn allocate_day<R: Rng>(
        &self,
        class: &SchoolClass,
        day: Weekday,
        slots: &[TimeSlot],
        pool: &[String],
        rng: &mut R,
    ) -> (Vec<TimetableEntry>, Vec<GenerationWarning>) {
        let mut entries = Vec::new();
        let mut warnings = Vec::new();

        for (i, slot) in slots.iter().enumerate() {
            debug_assert!(slot.is_class());
            let Some(subject_id) = pool.get(i) else {
                break; // pool exhausted, remaining slots stay empty
            };

            let Some(subject) = self.directory.subject(subject_id) else {
                warn!(class = %class.id, %day, slot = slot.id, subject = %subject_id,
                    "pooled subject not in directory, slot left empty");
                warnings.push(GenerationWarning::new(
                    &class.id,
                    day,
                    slot.id,
                    format!("unknown subject '{subject_id}'"),
                ));
                continue;
            };

            let Some(teacher) = self.resolve_teacher(&subject.id) else {
                warn!(class = %class.id, %day, slot = slot.id, subject = %subject.id,
                    "no qualified teacher, slot left empty");
                warnings.push(GenerationWarning::new(
                    &class.id,
                    day,
                    slot.id,
                    format!("no qualified teacher for subject '{}'", subject.id),
                ));
                continue;
            };

            let room = ROOM_POOL.choose(rng).copied().unwrap_or(ROOM_POOL[0]);
            entries.push(
                TimetableEntry::new(&class.id, &subject.id, &teacher.id, slot.clone(), day)
                    .with_room(room),
            );
        }

        (entries, warnings)
    }

    /// First teacher in directory order that is qualified for the
    /// subject and listed in the subject's eligible set. No load
    /// balancing across teachers.
    fn resolve_teacher(&self, subject_id: &str) -> Option<&Teacher> {
        let subject = self.directory.subject(subject_id)?;
        self.directory
            .teachers
            .iter()
            .find(|t| t.is_qualified(subject_id) && subject.is_eligible(&t.id))
    }
}
