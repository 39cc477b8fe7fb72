//! Bounded recurrence engine for study protocol events.
//!
//! Turns a compact recurrence description over a study timeline into the
//! ordered list of day offsets (and display names) on which an event occurs.

pub mod error;
pub mod schedule;

pub use error::{RecurError, RecurResult};
pub use schedule::core::{
    FilterSet, GeneratedEvent, MonthFilter, MonthRule, NamingTemplate, Occurrence,
    RecurrencePattern, StudyTimeline, WeekNumberFilter, Weekday,
};
pub use schedule::expand::{apply, generate, generate_schedule, name_all};
