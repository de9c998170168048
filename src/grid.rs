//! Day-grid construction.
//!
//! Turns [`Settings`] into the ordered slot sequence of one school day.
//! The grid is derived state: it is rebuilt from settings every time it
//! is needed and never stored.
//!
//! # Algorithm
//!
//! A cursor starts at the school opening time. Each round emits one
//! class period if it fits before the end of day, then one recess while
//! the configured recess quota is unspent, and a single lunch block
//! right after the fourth period. The walk stops at the end of day or
//! at `max_periods_per_day` class slots.
//!
//! A break that would overflow past the end of day is dropped silently,
//! so a tightly-packed day can end up with fewer breaks than configured.

use crate::models::{Settings, SlotKind, TimeSlot};

/// Builds the ordered slot grid for one school day.
///
/// Emitted slots are contiguous, non-overlapping, and ordered by start
/// time; ids are grid positions starting at 0.
///
/// # Example
///
/// ```
/// use classtime::grid::build_grid;
/// use classtime::models::{ClockTime, Settings, SlotKind};
///
/// let settings = Settings::new(ClockTime::new(8, 0), ClockTime::new(15, 0));
/// let grid = build_grid(&settings);
/// assert_eq!(grid[0].kind, SlotKind::Class);
/// assert_eq!(grid[0].start, ClockTime::new(8, 0));
/// ```
pub fn build_grid(settings: &Settings) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    let mut cursor = settings.school_start;
    let end = settings.school_end;
    let mut class_count: u32 = 0;
    let mut recess_count: u8 = 0;
    let mut lunch_done = false;
    let mut next_id: u32 = 0;

    while class_count < settings.max_periods_per_day {
        if cursor.plus(settings.class_duration_min) > end {
            break;
        }
        slots.push(TimeSlot::new(
            next_id,
            cursor,
            settings.class_duration_min,
            SlotKind::Class,
        ));
        cursor = cursor.plus(settings.class_duration_min);
        next_id += 1;
        class_count += 1;

        // One recess after each period until the quota is spent.
        if recess_count < settings.recess_count
            && cursor.plus(settings.recess_duration_min) <= end
        {
            slots.push(TimeSlot::new(
                next_id,
                cursor,
                settings.recess_duration_min,
                SlotKind::Recess,
            ));
            cursor = cursor.plus(settings.recess_duration_min);
            next_id += 1;
            recess_count += 1;
        }

        // Lunch follows the fourth period; attempted exactly once.
        if class_count == 4 && !lunch_done {
            lunch_done = true;
            if cursor.plus(settings.lunch_duration_min) <= end {
                slots.push(TimeSlot::new(
                    next_id,
                    cursor,
                    settings.lunch_duration_min,
                    SlotKind::Lunch,
                ));
                cursor = cursor.plus(settings.lunch_duration_min);
                next_id += 1;
            }
        }

        if cursor >= end {
            break;
        }
    }

    slots
}

/// The class-kind slots of a day's grid, in slot order.
pub fn class_slots(settings: &Settings) -> Vec<TimeSlot> {
    build_grid(settings)
        .into_iter()
        .filter(|s| s.is_class())
        .collect()
}

/// Total class slots available per week: per-day count times the number
/// of working days.
pub fn weekly_class_slot_count(settings: &Settings) -> u32 {
    class_slots(settings).len() as u32 * settings.working_day_count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClockTime;

    fn sample_settings() -> Settings {
        // 08:00-15:00, 45' periods, 2x15' recess, 30' lunch
        Settings::new(ClockTime::new(8, 0), ClockTime::new(15, 0))
    }

    fn count_kind(grid: &[TimeSlot], kind: SlotKind) -> usize {
        grid.iter().filter(|s| s.kind == kind).count()
    }

    #[test]
    fn test_full_day_grid() {
        let grid = build_grid(&sample_settings());

        assert_eq!(count_kind(&grid, SlotKind::Class), 8);
        assert_eq!(count_kind(&grid, SlotKind::Recess), 2);
        assert_eq!(count_kind(&grid, SlotKind::Lunch), 1);

        // Total elapsed time fits the school day
        let elapsed: u32 = grid.iter().map(|s| s.duration_min() as u32).sum();
        assert!(elapsed <= 420);
    }

    #[test]
    fn test_grid_contiguous_and_ordered() {
        let grid = build_grid(&sample_settings());
        for pair in grid.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].start < pair[1].start);
            assert!(!pair[0].overlaps(&pair[1]));
        }
        for (i, slot) in grid.iter().enumerate() {
            assert_eq!(slot.id, i as u32);
        }
    }

    #[test]
    fn test_lunch_after_fourth_period() {
        let grid = build_grid(&sample_settings());
        let lunch_pos = grid.iter().position(|s| s.kind == SlotKind::Lunch).unwrap();
        let classes_before = grid[..lunch_pos]
            .iter()
            .filter(|s| s.is_class())
            .count();
        assert_eq!(classes_before, 4);
    }

    #[test]
    fn test_class_slots_filter() {
        let slots = class_slots(&sample_settings());
        assert_eq!(slots.len(), 8);
        assert!(slots.iter().all(|s| s.is_class()));
    }

    #[test]
    fn test_max_periods_cap() {
        let settings = sample_settings().with_max_periods(3);
        let grid = build_grid(&settings);
        assert_eq!(count_kind(&grid, SlotKind::Class), 3);
        // Lunch needs a fourth period and never appears
        assert_eq!(count_kind(&grid, SlotKind::Lunch), 0);
    }

    #[test]
    fn test_overflowing_break_dropped() {
        // 3h45 day packs four periods and three recesses exactly; the
        // fourth recess would overflow past 11:45 and is dropped.
        let settings = Settings::new(ClockTime::new(8, 0), ClockTime::new(11, 45))
            .with_recess_count(4);
        let grid = build_grid(&settings);
        let recesses = count_kind(&grid, SlotKind::Recess);
        assert!(recesses < 4, "overflowing recesses must be dropped, got {recesses}");
        let elapsed: u32 = grid.iter().map(|s| s.duration_min() as u32).sum();
        assert!(elapsed <= 225);
    }

    #[test]
    fn test_short_day_no_lunch() {
        // Day ends before a fourth period fits: lunch never emitted.
        let settings = Settings::new(ClockTime::new(8, 0), ClockTime::new(10, 30));
        let grid = build_grid(&settings);
        assert!(count_kind(&grid, SlotKind::Class) < 4);
        assert_eq!(count_kind(&grid, SlotKind::Lunch), 0);
    }

    #[test]
    fn test_degenerate_day() {
        let settings = Settings::new(ClockTime::new(8, 0), ClockTime::new(8, 0));
        assert!(build_grid(&settings).is_empty());
    }

    #[test]
    fn test_weekly_slot_count() {
        // 8 class slots x 5 working days
        assert_eq!(weekly_class_slot_count(&sample_settings()), 40);
    }
}
