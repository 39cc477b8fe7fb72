//! Recurring event schedules over a study timeline.

pub mod core;
pub mod expand;
pub mod validation;
