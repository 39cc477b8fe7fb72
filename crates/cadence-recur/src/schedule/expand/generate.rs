//! End-to-end schedule generation.

use crate::error::RecurResult;
use crate::schedule::core::{
    FilterSet, GeneratedEvent, NamingTemplate, RecurrencePattern, StudyTimeline,
};
use crate::schedule::validation::{validate_filters, validate_pattern, validate_timeline};

use super::{apply, generate, name_all};

/// ## Summary
/// Evaluates `pattern`, applies `filters`, and names the surviving offsets.
///
/// The output is ascending by `offset_day` and identical for identical inputs.
///
/// ## Errors
/// All inputs are validated before any work starts; the first violation is
/// returned and no events are produced.
///
/// ## Side Effects
///
/// None.
pub fn generate_schedule(
    timeline: &StudyTimeline,
    pattern: &RecurrencePattern,
    filters: &FilterSet,
    template: Option<&NamingTemplate>,
) -> RecurResult<Vec<GeneratedEvent>> {
    validate_timeline(timeline)?;
    validate_pattern(pattern)?;
    validate_filters(filters)?;

    let raw = generate(timeline, pattern)?;
    let offsets = apply(&raw, timeline, filters)?;
    let names = name_all(&offsets, timeline, template)?;

    let events: Vec<GeneratedEvent> = offsets
        .into_iter()
        .zip(names)
        .map(|(offset_day, name)| GeneratedEvent::new(offset_day, name))
        .collect();

    tracing::debug!(
        pattern = pattern.kind(),
        raw = raw.len(),
        events = events.len(),
        named = template.is_some(),
        "Generated schedule"
    );

    Ok(events)
}
