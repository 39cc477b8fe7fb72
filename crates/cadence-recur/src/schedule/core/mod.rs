//! Value types for recurrence schedules.

mod date;
mod event;
mod filter;
mod pattern;
mod template;
mod timeline;

pub use date::{Weekday, months_since, study_week};
pub use event::GeneratedEvent;
pub use filter::{Filter, FilterSet, MonthFilter, WeekNumberFilter};
pub use pattern::{MonthRule, Occurrence, RecurrencePattern};
pub use template::{
    NamingTemplate, TOKEN_DAY, TOKEN_MONTH, TOKEN_SEQUENCE, TOKEN_WEEK, TemplateContext,
};
pub use timeline::StudyTimeline;
