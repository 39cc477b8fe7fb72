use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{RecurError, RecurResult};

/// Bounded range of day offsets anchored at a study start date.
///
/// Offsets count whole calendar days from `start_date`; `start_day` and
/// `end_day` bound the inclusive range a pattern is evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyTimeline {
    pub start_date: NaiveDate,
    pub start_day: u32,
    pub end_day: u32,
}

impl StudyTimeline {
    #[must_use]
    pub const fn new(start_date: NaiveDate, start_day: u32, end_day: u32) -> Self {
        Self {
            start_date,
            start_day,
            end_day,
        }
    }

    /// Number of days between `start_day` and `end_day`, or `None` if the range is inverted.
    #[must_use]
    pub const fn span(&self) -> Option<u32> {
        self.end_day.checked_sub(self.start_day)
    }

    /// Returns `true` if `offset` lies within `[start_day, end_day]`.
    #[must_use]
    pub const fn contains(&self, offset: u32) -> bool {
        self.start_day <= offset && offset <= self.end_day
    }

    /// ## Summary
    /// Calendar date of `start_date + offset` days.
    ///
    /// ## Errors
    /// Returns `DateOutOfRange` if the date cannot be represented.
    pub fn date_at(&self, offset: u32) -> RecurResult<NaiveDate> {
        self.start_date
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or(RecurError::DateOutOfRange { offset })
    }

    /// ## Summary
    /// Iterates `(offset, date)` for every day in the range, in ascending order.
    ///
    /// ## Errors
    /// Returns `DateOutOfRange` if the first day cannot be represented. The
    /// iterator stops early if the calendar runs out, which validation rules out.
    pub fn days(&self) -> RecurResult<impl Iterator<Item = (u32, NaiveDate)> + use<>> {
        let first = self.date_at(self.start_day)?;
        Ok((self.start_day..=self.end_day).zip(first.iter_days()))
    }
}
