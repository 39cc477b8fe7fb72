//! Base recurrence patterns, evaluated before any filter.

use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroU32;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::date::{Weekday, months_since};
use crate::error::RecurError;

/// Base recurrence rule.
///
/// Serialized with a `kind` tag, e.g.
/// `{"kind": "every_n_weeks", "week_interval": 2, "weekdays": [1, 4]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecurrencePattern {
    /// Every `interval` days starting at the first day of the range.
    EveryNDays { interval: u32 },

    /// The given weekdays, in every `week_interval`-th block of seven days
    /// counted from study day 0 (the same weeks `{week}` numbers from 1).
    EveryNWeeks {
        week_interval: u32,
        weekdays: BTreeSet<Weekday>,
    },

    /// Days matching `rule`, in every `month_interval`-th calendar month
    /// counted from the month of the study start date.
    EveryNMonths { month_interval: u32, rule: MonthRule },

    /// Every occurrence of the given weekdays.
    SpecificWeekdays { weekdays: BTreeSet<Weekday> },
}

impl RecurrencePattern {
    /// Short name used in logs and error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EveryNDays { .. } => "every_n_days",
            Self::EveryNWeeks { .. } => "every_n_weeks",
            Self::EveryNMonths { .. } => "every_n_months",
            Self::SpecificWeekdays { .. } => "specific_weekdays",
        }
    }
}

/// Which day of a month an `EveryNMonths` pattern lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MonthRule {
    /// The n-th (or last) given weekday of the month, e.g. the second Tuesday.
    NthWeekday {
        occurrence: Occurrence,
        weekday: Weekday,
    },

    /// A fixed day of the month. Months without that day are skipped, never clamped.
    FixedDayOfMonth { day: u32 },
}

impl MonthRule {
    /// ## Summary
    /// Returns `true` if `date` satisfies the rule, ignoring the month interval.
    #[must_use]
    pub fn matches(self, date: NaiveDate) -> bool {
        match self {
            Self::NthWeekday {
                occurrence,
                weekday,
            } => Weekday::of(date) == weekday && occurrence.matches(date),
            Self::FixedDayOfMonth { day } => date.day() == day,
        }
    }

    /// ## Summary
    /// Returns `true` if `date` satisfies the rule and falls in a month that is
    /// a multiple of `month_interval` months after `start`.
    #[must_use]
    pub fn matches_every(
        self,
        start: NaiveDate,
        date: NaiveDate,
        month_interval: NonZeroU32,
    ) -> bool {
        self.matches(date)
            && months_since(start, date).rem_euclid(i64::from(month_interval.get())) == 0
    }
}

/// Position of a weekday within its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OccurrenceRepr", into = "OccurrenceRepr")]
pub enum Occurrence {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl Occurrence {
    /// Returns the 1-based ordinal, or `None` for `Last`.
    #[must_use]
    pub const fn ordinal(self) -> Option<u8> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(2),
            Self::Third => Some(3),
            Self::Fourth => Some(4),
            Self::Last => None,
        }
    }

    /// ## Summary
    /// Returns `true` if `date` is this occurrence of its own weekday in its month.
    ///
    /// Ordinal `k` matches days `7k-6 ..= 7k`; `Last` matches when a week later
    /// is already the next month.
    #[must_use]
    pub fn matches(self, date: NaiveDate) -> bool {
        match self.ordinal() {
            Some(k) => date.day().div_ceil(7) == u32::from(k),
            None => date
                .checked_add_days(Days::new(7))
                .is_none_or(|next| next.month() != date.month()),
        }
    }
}

impl TryFrom<u8> for Occurrence {
    type Error = RecurError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            4 => Ok(Self::Fourth),
            _ => Err(RecurError::InvalidPatternParameter(format!(
                "occurrence {value} must be 1, 2, 3, 4 or \"last\""
            ))),
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ordinal() {
            Some(k) => write!(f, "{k}"),
            None => f.write_str("last"),
        }
    }
}

/// Wire form of `Occurrence`: `1`..`4` or the string `"last"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum OccurrenceRepr {
    Ordinal(u8),
    Named(String),
}

impl TryFrom<OccurrenceRepr> for Occurrence {
    type Error = RecurError;

    fn try_from(repr: OccurrenceRepr) -> Result<Self, Self::Error> {
        match repr {
            OccurrenceRepr::Ordinal(value) => Self::try_from(value),
            OccurrenceRepr::Named(name) if name.eq_ignore_ascii_case("last") => Ok(Self::Last),
            OccurrenceRepr::Named(name) => Err(RecurError::InvalidPatternParameter(format!(
                "occurrence {name:?} must be 1, 2, 3, 4 or \"last\""
            ))),
        }
    }
}

impl From<Occurrence> for OccurrenceRepr {
    fn from(occurrence: Occurrence) -> Self {
        match occurrence.ordinal() {
            Some(k) => Self::Ordinal(k),
            None => Self::Named("last".to_string()),
        }
    }
}
