//! Pool building and slot allocation.
//!
//! The two inner stages of the generation pipeline: [`build_day_pool`]
//! expands weekly per-subject targets into a day's shuffled candidate
//! queue, and [`Allocator`] pairs queue positions with the day's class
//! slots, resolving teachers and rooms.
//!
//! # Randomness
//!
//! Both stages take a caller-supplied `rand::Rng` so that production
//! gets the intended day-to-day variety from an unseeded source while
//! tests pin a seed and stay reproducible.

mod allocator;
mod pool;

pub use allocator::Allocator;
pub use pool::build_day_pool;
