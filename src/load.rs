//! Weekly load distribution.
//!
//! Converts subject credit weights into weekly period targets for one
//! class: each subject gets a share of the week proportional to its
//! credits, with floors for core subjects and a minimum of one period
//! for everything.
//!
//! The floors deliberately skip renormalization, so the sum of targets
//! may exceed or fall short of the available weekly slots. The
//! allocator absorbs the mismatch by truncating excess and tolerating
//! empty slots.

use std::collections::HashMap;

use crate::models::Subject;

/// Weekly period minimum for core subjects.
pub const CORE_MIN_PERIODS: u32 = 3;

/// Distributes `total_weekly_slots` among subjects by credit weight.
///
/// `target = floor(credits / total_credits * total_weekly_slots)`,
/// then raised to [`CORE_MIN_PERIODS`] for core subjects and to 1 for
/// every subject. Returns subject id → weekly period target.
///
/// # Example
///
/// ```
/// use classtime::load::distribute;
/// use classtime::models::Subject;
///
/// let math = Subject::core("math", 4.0);
/// let art = Subject::elective("art", 1.0);
/// let targets = distribute(&[&math, &art], 20);
/// assert_eq!(targets["math"], 16);
/// assert_eq!(targets["art"], 4);
/// ```
pub fn distribute(subjects: &[&Subject], total_weekly_slots: u32) -> HashMap<String, u32> {
    let total_credits: f64 = subjects.iter().map(|s| s.credits.max(0.0)).sum();
    let mut targets = HashMap::with_capacity(subjects.len());

    for subject in subjects {
        let share = if total_credits > 0.0 {
            (subject.credits.max(0.0) / total_credits * total_weekly_slots as f64).floor() as u32
        } else {
            0
        };

        let mut target = share;
        if subject.is_core() && target < CORE_MIN_PERIODS {
            target = CORE_MIN_PERIODS;
        }
        if target < 1 {
            target = 1;
        }
        targets.insert(subject.id.clone(), target);
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubjectType;

    #[test]
    fn test_proportional_split() {
        let math = Subject::core("math", 4.0);
        let art = Subject::elective("art", 1.0);
        let targets = distribute(&[&math, &art], 20);

        // 4/5 and 1/5 of 20
        assert_eq!(targets["math"], 16);
        assert_eq!(targets["art"], 4);
    }

    #[test]
    fn test_core_floor_raises() {
        // math gets floor(4/20 * 10) = 2, raised to 3 as a core subject
        let math = Subject::core("math", 4.0);
        let lang = Subject::new("en", 16.0, SubjectType::Language);
        let targets = distribute(&[&math, &lang], 10);

        assert_eq!(targets["math"], CORE_MIN_PERIODS);
        assert_eq!(targets["en"], 8);
    }

    #[test]
    fn test_minimum_one_period() {
        // art's share floors to 0, raised to 1
        let major = Subject::core("major", 50.0);
        let art = Subject::elective("art", 1.0);
        let targets = distribute(&[&major, &art], 10);

        assert!(targets["art"] >= 1);
    }

    #[test]
    fn test_no_renormalization() {
        // Floors push the sum past the weekly total; that is intended
        let a = Subject::core("a", 1.0);
        let b = Subject::core("b", 1.0);
        let c = Subject::core("c", 1.0);
        let targets = distribute(&[&a, &b, &c], 4);

        let sum: u32 = targets.values().sum();
        assert_eq!(sum, 9); // 3 cores x 3 minimum > 4 available
    }

    #[test]
    fn test_zero_total_slots() {
        let math = Subject::core("math", 4.0);
        let art = Subject::elective("art", 1.0);
        let targets = distribute(&[&math, &art], 0);

        // Floors still apply; the allocator truncates against the grid
        assert_eq!(targets["math"], CORE_MIN_PERIODS);
        assert_eq!(targets["art"], 1);
    }

    #[test]
    fn test_empty_subjects() {
        let targets = distribute(&[], 20);
        assert!(targets.is_empty());
    }

    #[test]
    fn test_nonpositive_credits_get_floor() {
        let broken = Subject::elective("broken", 0.0);
        let math = Subject::core("math", 4.0);
        let targets = distribute(&[&broken, &math], 10);

        assert_eq!(targets["broken"], 1);
        assert!(targets["math"] >= CORE_MIN_PERIODS);
    }
}
