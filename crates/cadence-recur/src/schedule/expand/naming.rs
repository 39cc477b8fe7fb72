//! Display names for filtered offsets.

use chrono::Datelike;

use crate::error::RecurResult;
use crate::schedule::core::{NamingTemplate, StudyTimeline, TemplateContext, study_week};

/// ## Summary
/// Produces one name per offset, in the same order.
///
/// Without a template every name is empty. Otherwise the `i`-th offset is
/// rendered with `{n}` = `i + 1`, `{day}` = the offset, `{week}` = its study
/// week and `{month}` = the calendar month of its date.
///
/// ## Errors
/// Returns `DateOutOfRange` if the template needs a month for an offset whose
/// date cannot be represented.
pub fn name_all(
    offsets: &[u32],
    timeline: &StudyTimeline,
    template: Option<&NamingTemplate>,
) -> RecurResult<Vec<String>> {
    let Some(template) = template else {
        return Ok(vec![String::new(); offsets.len()]);
    };

    let needs_month = template.uses_month();
    offsets
        .iter()
        .enumerate()
        .map(|(index, &day)| -> RecurResult<String> {
            let month = if needs_month {
                timeline.date_at(day)?.month()
            } else {
                0
            };
            let context = TemplateContext {
                sequence: index + 1,
                day,
                week: study_week(day),
                month,
            };
            Ok(template.render(&context))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn timeline() -> StudyTimeline {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        StudyTimeline::new(start, 0, 100)
    }

    #[test]
    fn test_dose_template() {
        let template = NamingTemplate::new("Dose {n} (Day {day})");
        let names = name_all(&[0, 7, 14], &timeline(), Some(&template)).expect("valid names");
        assert_eq!(
            names,
            vec!["Dose 1 (Day 0)", "Dose 2 (Day 7)", "Dose 3 (Day 14)"]
        );
    }

    #[test]
    fn test_week_and_month_tokens() {
        let template = NamingTemplate::new("W{week}-M{month}");
        let names = name_all(&[6, 7, 31], &timeline(), Some(&template)).expect("valid names");
        assert_eq!(names, vec!["W1-M1", "W2-M1", "W5-M2"]);
    }

    #[test]
    fn test_sequence_counts_filtered_offsets() {
        let template = NamingTemplate::new("{n}");
        let names = name_all(&[10, 40, 90], &timeline(), Some(&template)).expect("valid names");
        assert_eq!(names, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_without_template_names_are_empty() {
        let names = name_all(&[0, 7], &timeline(), None).expect("valid names");
        assert_eq!(names, vec![String::new(), String::new()]);
    }

    #[test]
    fn test_empty_offsets() {
        let template = NamingTemplate::new("Dose {n}");
        let names = name_all(&[], &timeline(), Some(&template)).expect("valid names");
        assert!(names.is_empty());
    }
}
