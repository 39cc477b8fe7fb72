//! Post-hoc filters that narrow raw pattern output.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::date::{Weekday, study_week};

/// Keeps offsets whose calendar month (1-12) is listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthFilter {
    pub allowed_months: BTreeSet<u32>,
}

/// Keeps offsets whose study week (`offset / 7 + 1`) is listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekNumberFilter {
    pub allowed_weeks: BTreeSet<u32>,
}

/// Independently toggled filters, combined with logical AND.
///
/// A filter set to `None` (or `skip_weekends: false`) is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub months: Option<MonthFilter>,
    pub week_numbers: Option<WeekNumberFilter>,
    pub skip_weekends: bool,
}

impl FilterSet {
    #[must_use]
    pub fn with_months(mut self, months: impl IntoIterator<Item = u32>) -> Self {
        self.months = Some(MonthFilter {
            allowed_months: months.into_iter().collect(),
        });
        self
    }

    #[must_use]
    pub fn with_week_numbers(mut self, weeks: impl IntoIterator<Item = u32>) -> Self {
        self.week_numbers = Some(WeekNumberFilter {
            allowed_weeks: weeks.into_iter().collect(),
        });
        self
    }

    #[must_use]
    pub const fn skipping_weekends(mut self) -> Self {
        self.skip_weekends = true;
        self
    }

    /// Returns the enabled filters. Empty when nothing is toggled on.
    #[must_use]
    pub fn enabled(&self) -> Vec<Filter<'_>> {
        let mut filters = Vec::with_capacity(3);
        if let Some(months) = &self.months {
            filters.push(Filter::Months(&months.allowed_months));
        }
        if let Some(weeks) = &self.week_numbers {
            filters.push(Filter::WeekNumbers(&weeks.allowed_weeks));
        }
        if self.skip_weekends {
            filters.push(Filter::SkipWeekends);
        }
        filters
    }
}

/// A single enabled filter, borrowed from a `FilterSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<'a> {
    Months(&'a BTreeSet<u32>),
    WeekNumbers(&'a BTreeSet<u32>),
    SkipWeekends,
}

impl Filter<'_> {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Months(_) => "months",
            Self::WeekNumbers(_) => "week_numbers",
            Self::SkipWeekends => "skip_weekends",
        }
    }

    /// ## Summary
    /// Returns `true` if the day at `offset`, falling on `date`, passes this filter.
    #[must_use]
    pub fn accepts(&self, offset: u32, date: NaiveDate) -> bool {
        match self {
            Self::Months(allowed) => allowed.contains(&date.month()),
            Self::WeekNumbers(allowed) => allowed.contains(&study_week(offset)),
            Self::SkipWeekends => !Weekday::of(date).is_weekend(),
        }
    }
}
