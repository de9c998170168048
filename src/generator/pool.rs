//! Per-day candidate pools.
//!
//! Expands weekly per-subject targets into one day's candidate queue.
//! Each subject appears in the queue once per period it should receive
//! that day; the allocator then pairs queue positions with class slots.
//!
//! # Rotation
//!
//! A weekly target rarely divides evenly by the number of working days.
//! The remainder periods are rotated across days by offset instead of
//! clustering at the start of the week: for day index `d` and candidate
//! index `i`, the subject is included iff
//! `(d + i) % n_days < target % n_days || i < target / n_days`.
//!
//! The assembled pool is shuffled through the caller's RNG. Production
//! callers pass an unseeded RNG (day-to-day variety is intended); tests
//! pin a seed for reproducibility.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Subject;

/// Builds the shuffled candidate queue for one day.
///
/// `subjects` supplies iteration order (the class's assignment order),
/// `targets` the weekly period targets from the load calculator, and
/// `day_index` the 0-based position of the day within the working week.
/// Subjects missing from `targets` contribute nothing.
pub fn build_day_pool<R: Rng>(
    subjects: &[&Subject],
    targets: &HashMap<String, u32>,
    day_index: usize,
    working_days: usize,
    rng: &mut R,
) -> Vec<String> {
    if working_days == 0 {
        return Vec::new();
    }

    let mut pool = Vec::new();
    for subject in subjects {
        let target = match targets.get(&subject.id) {
            Some(&t) => t as usize,
            None => continue,
        };
        let base = target / working_days;
        let remainder = target % working_days;
        let slots_for_day = target.div_ceil(working_days);

        for i in 0..slots_for_day {
            if (day_index + i) % working_days < remainder || i < base {
                pool.push(subject.id.clone());
            }
        }
    }

    pool.shuffle(rng);
    pool
}
