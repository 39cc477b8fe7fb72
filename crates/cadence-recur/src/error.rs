use thiserror::Error;

/// Validation and generation errors for recurrence schedules.
///
/// Every variant is raised before any offset is produced; generation never
/// returns partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurError {
    #[error("Invalid range: end day {end_day} is before start day {start_day}")]
    InvalidRange { start_day: u32, end_day: u32 },

    #[error("Invalid pattern parameter: {0}")]
    InvalidPatternParameter(String),

    #[error("Filter `{0}` is enabled but allows nothing")]
    EmptyFilterSet(&'static str),

    #[error("Invalid filter parameter: {0}")]
    InvalidFilterParameter(String),

    #[error("Day offset {offset} is outside the supported calendar")]
    DateOutOfRange { offset: u32 },
}

pub type RecurResult<T> = std::result::Result<T, RecurError>;
