//! ## Summary
//! Schedule requests as submitted by the study UI.
//!
//! A request carries the caller context (protocol, start date) alongside the
//! engine inputs. Converting it into a `SchedulePlan` surfaces missing context
//! and range-limit violations before the engine is invoked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cadence_core::config::ScheduleConfig;
use cadence_recur::{
    FilterSet, GeneratedEvent, NamingTemplate, RecurrencePattern, StudyTimeline,
    generate_schedule,
};

use crate::error::{AppError, AppResult};

/// Raw request document, e.g.
///
/// ```json
/// {
///   "protocol_id": "PK-01",
///   "start_date": "2024-01-01",
///   "start_day": 0,
///   "end_day": 27,
///   "pattern": {"kind": "every_n_weeks", "week_interval": 1, "weekdays": [1, 4]},
///   "filters": {"skip_weekends": true},
///   "template": "Dose {n} (Day {day})"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub protocol_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub start_day: u32,
    pub end_day: u32,
    pub pattern: RecurrencePattern,
    #[serde(default)]
    pub filters: FilterSet,
    #[serde(default)]
    pub template: Option<String>,
}

/// Engine inputs plus the protocol the generated events belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulePlan {
    pub protocol_id: String,
    pub timeline: StudyTimeline,
    pub pattern: RecurrencePattern,
    pub filters: FilterSet,
    pub template: Option<NamingTemplate>,
}

impl ScheduleRequest {
    /// ## Summary
    /// Parses a request from JSON.
    ///
    /// ## Errors
    /// Returns `RequestError` for malformed JSON or out-of-range weekday and
    /// occurrence values.
    pub fn from_json(contents: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// ## Summary
    /// Checks caller context and configured limits, producing a plan.
    ///
    /// A request without a template falls back to `schedule.default_template`.
    ///
    /// ## Errors
    /// - `MissingProtocolSelection` if no (non-blank) protocol is given
    /// - `MissingStartDate` if no start date is given
    /// - `RangeTooLarge` if the day span exceeds `schedule.max_span_days`
    pub fn into_plan(self, config: &ScheduleConfig) -> AppResult<SchedulePlan> {
        let protocol_id = self
            .protocol_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or(AppError::MissingProtocolSelection)?;
        let start_date = self.start_date.ok_or(AppError::MissingStartDate)?;

        let timeline = StudyTimeline::new(start_date, self.start_day, self.end_day);
        // An inverted range is left for the engine to report.
        if let Some(span) = timeline.span()
            && !config.allows_span(span)
        {
            return Err(AppError::RangeTooLarge {
                span,
                max: config.max_span_days,
            });
        }

        let template = self
            .template
            .or_else(|| config.default_template.clone())
            .map(NamingTemplate::from);

        tracing::debug!(
            protocol_id = %protocol_id,
            %start_date,
            start_day = self.start_day,
            end_day = self.end_day,
            pattern = self.pattern.kind(),
            "Schedule request accepted"
        );

        Ok(SchedulePlan {
            protocol_id,
            timeline,
            pattern: self.pattern,
            filters: self.filters,
            template,
        })
    }
}

impl SchedulePlan {
    /// ## Summary
    /// Runs the recurrence engine for this plan.
    ///
    /// ## Errors
    /// Propagates engine validation errors.
    pub fn generate(&self) -> AppResult<Vec<GeneratedEvent>> {
        Ok(generate_schedule(
            &self.timeline,
            &self.pattern,
            &self.filters,
            self.template.as_ref(),
        )?)
    }
}
