use thiserror::Error;

/// Errors raised by the schedule caller around the recurrence engine.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No protocol selected for the generated events")]
    MissingProtocolSelection,

    #[error("No study start date set")]
    MissingStartDate,

    #[error("Range of {span} days exceeds the configured limit of {max} days")]
    RangeTooLarge { span: u32, max: u32 },

    #[error("Schedule produced no events; nothing to confirm")]
    EmptySchedule,

    #[error(transparent)]
    RecurError(#[from] cadence_recur::RecurError),

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),

    #[error("Invalid schedule request: {0}")]
    RequestError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
