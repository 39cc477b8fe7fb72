//! Base pattern evaluation over a bounded day range.

use std::num::NonZeroU32;

use chrono::NaiveDate;

use crate::error::{RecurError, RecurResult};
use crate::schedule::core::{RecurrencePattern, StudyTimeline, Weekday};
use crate::schedule::validation::{validate_pattern, validate_timeline};

/// ## Summary
/// Produces the raw day offsets matching `pattern` within the timeline range.
///
/// Offsets are strictly ascending, unique and inside `[start_day, end_day]`.
/// An empty result is not an error.
///
/// ## Errors
/// Returns a validation error if the timeline or pattern is invalid; no
/// offsets are computed in that case.
pub fn generate(timeline: &StudyTimeline, pattern: &RecurrencePattern) -> RecurResult<Vec<u32>> {
    validate_timeline(timeline)?;
    validate_pattern(pattern)?;

    let offsets = match pattern {
        RecurrencePattern::EveryNDays { interval } => every_n_days(timeline, *interval),
        RecurrencePattern::EveryNWeeks {
            week_interval,
            weekdays,
        } => walk(timeline, |offset, date| {
            offset / 7 % week_interval == 0 && weekdays.contains(&Weekday::of(date))
        })?,
        RecurrencePattern::EveryNMonths {
            month_interval,
            rule,
        } => {
            let month_interval = NonZeroU32::new(*month_interval).ok_or_else(|| {
                RecurError::InvalidPatternParameter("month_interval must be at least 1".into())
            })?;
            walk(timeline, |_, date| {
                rule.matches_every(timeline.start_date, date, month_interval)
            })?
        }
        RecurrencePattern::SpecificWeekdays { weekdays } => {
            walk(timeline, |_, date| weekdays.contains(&Weekday::of(date)))?
        }
    };

    tracing::debug!(
        pattern = pattern.kind(),
        start_day = timeline.start_day,
        end_day = timeline.end_day,
        count = offsets.len(),
        "Evaluated recurrence pattern"
    );

    Ok(offsets)
}

/// Arithmetic sequence from `start_day`, truncated at `end_day`.
fn every_n_days(timeline: &StudyTimeline, interval: u32) -> Vec<u32> {
    std::iter::successors(Some(timeline.start_day), |day| day.checked_add(interval))
        .take_while(|day| *day <= timeline.end_day)
        .collect()
}

/// Visits every day in range and keeps the offsets `keep` accepts.
fn walk<F>(timeline: &StudyTimeline, mut keep: F) -> RecurResult<Vec<u32>>
where
    F: FnMut(u32, NaiveDate) -> bool,
{
    let mut offsets = Vec::new();
    for (offset, date) in timeline.days()? {
        if keep(offset, date) {
            tracing::trace!(offset, %date, "Day matches pattern");
            offsets.push(offset);
        }
    }
    Ok(offsets)
}
