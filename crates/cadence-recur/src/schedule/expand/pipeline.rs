//! Filter pipeline applied to raw pattern offsets.

use crate::error::RecurResult;
use crate::schedule::core::{FilterSet, StudyTimeline};
use crate::schedule::validation::validate_filters;

/// ## Summary
/// Keeps the offsets accepted by every enabled filter, preserving order.
///
/// With no filter enabled the input is returned unchanged.
///
/// ## Errors
/// Returns a validation error for an enabled filter with an empty or
/// out-of-range allowed set, or `DateOutOfRange` for an offset whose date
/// cannot be represented.
pub fn apply(
    offsets: &[u32],
    timeline: &StudyTimeline,
    filters: &FilterSet,
) -> RecurResult<Vec<u32>> {
    validate_filters(filters)?;

    let enabled = filters.enabled();
    if enabled.is_empty() {
        return Ok(offsets.to_vec());
    }

    let mut kept = Vec::with_capacity(offsets.len());
    for &offset in offsets {
        let date = timeline.date_at(offset)?;
        if let Some(rejected_by) = enabled.iter().find(|filter| !filter.accepts(offset, date)) {
            tracing::trace!(offset, %date, filter = rejected_by.name(), "Offset filtered out");
        } else {
            kept.push(offset);
        }
    }

    tracing::debug!(
        filters = enabled.len(),
        before = offsets.len(),
        after = kept.len(),
        "Applied schedule filters"
    );

    Ok(kept)
}
