//! ## Summary
//! Eager validation of schedule inputs.
//!
//! Every generation entry point runs these checks before computing a single
//! offset. Each function reports the first violation it finds; nothing is
//! corrected or clamped.

use std::collections::BTreeSet;

use crate::error::{RecurError, RecurResult};
use crate::schedule::core::{FilterSet, MonthRule, RecurrencePattern, StudyTimeline, Weekday};

/// Largest day of month a `FixedDayOfMonth` rule may name.
const MAX_DAY_OF_MONTH: u32 = 31;

/// ## Summary
/// Checks that the range is ordered and that its last day is a real date.
///
/// ## Errors
/// - `InvalidRange` if `end_day < start_day`
/// - `DateOutOfRange` if `start_date + end_day` overflows the calendar
pub fn validate_timeline(timeline: &StudyTimeline) -> RecurResult<()> {
    if timeline.end_day < timeline.start_day {
        return Err(RecurError::InvalidRange {
            start_day: timeline.start_day,
            end_day: timeline.end_day,
        });
    }
    timeline.date_at(timeline.end_day)?;
    Ok(())
}

/// ## Summary
/// Checks interval, weekday-set and month-rule parameters.
///
/// ## Errors
/// Returns `InvalidPatternParameter` for a zero interval, an empty weekday
/// set, or a fixed day outside 1..=31.
pub fn validate_pattern(pattern: &RecurrencePattern) -> RecurResult<()> {
    match pattern {
        RecurrencePattern::EveryNDays { interval } => require_positive("interval", *interval),
        RecurrencePattern::EveryNWeeks {
            week_interval,
            weekdays,
        } => {
            require_positive("week_interval", *week_interval)?;
            require_weekdays(weekdays)
        }
        RecurrencePattern::EveryNMonths {
            month_interval,
            rule,
        } => {
            require_positive("month_interval", *month_interval)?;
            validate_month_rule(rule)
        }
        RecurrencePattern::SpecificWeekdays { weekdays } => require_weekdays(weekdays),
    }
}

fn validate_month_rule(rule: &MonthRule) -> RecurResult<()> {
    match *rule {
        // Occurrence and weekday are closed enums; out-of-range values fail on construction.
        MonthRule::NthWeekday { .. } => Ok(()),
        MonthRule::FixedDayOfMonth { day } => {
            if (1..=MAX_DAY_OF_MONTH).contains(&day) {
                Ok(())
            } else {
                Err(RecurError::InvalidPatternParameter(format!(
                    "day {day} is outside 1..={MAX_DAY_OF_MONTH}"
                )))
            }
        }
    }
}

fn require_positive(field: &str, value: u32) -> RecurResult<()> {
    if value == 0 {
        return Err(RecurError::InvalidPatternParameter(format!(
            "{field} must be at least 1"
        )));
    }
    Ok(())
}

fn require_weekdays(weekdays: &BTreeSet<Weekday>) -> RecurResult<()> {
    if weekdays.is_empty() {
        return Err(RecurError::InvalidPatternParameter(
            "weekdays must name at least one day".to_string(),
        ));
    }
    Ok(())
}

/// ## Summary
/// Checks every enabled filter's allowed set.
///
/// ## Errors
/// - `EmptyFilterSet` if an enabled month or week filter allows nothing
/// - `InvalidFilterParameter` for a month outside 1..=12 or week number 0
pub fn validate_filters(filters: &FilterSet) -> RecurResult<()> {
    if let Some(months) = &filters.months {
        if months.allowed_months.is_empty() {
            return Err(RecurError::EmptyFilterSet("months"));
        }
        if let Some(month) = months
            .allowed_months
            .iter()
            .find(|month| !(1..=12).contains(*month))
        {
            return Err(RecurError::InvalidFilterParameter(format!(
                "month {month} is outside 1..=12"
            )));
        }
    }

    if let Some(weeks) = &filters.week_numbers {
        if weeks.allowed_weeks.is_empty() {
            return Err(RecurError::EmptyFilterSet("week_numbers"));
        }
        if weeks.allowed_weeks.contains(&0) {
            return Err(RecurError::InvalidFilterParameter(
                "week numbers start at 1".to_string(),
            ));
        }
    }

    Ok(())
}
