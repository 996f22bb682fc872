//! Static workout, schedule and progress content served to subscribers.

pub mod progress;
pub mod schedule;
pub mod workouts;
