//! Preview and confirmation of generated events before submission.

use std::io::Write;

use chrono::NaiveDate;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use cadence_recur::{GeneratedEvent, Weekday};

use crate::error::{AppError, AppResult};
use crate::request::SchedulePlan;

/// A generated event paired with its protocol, ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingEventRow {
    pub protocol_id: String,
    pub offset_day: u32,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub name: String,
}

/// ## Summary
/// Pairs each event with the plan's protocol and its calendar date.
///
/// ## Errors
/// Returns an engine error if an event date cannot be represented.
pub fn build_rows(
    plan: &SchedulePlan,
    events: Vec<GeneratedEvent>,
) -> AppResult<Vec<PendingEventRow>> {
    events
        .into_iter()
        .map(|event| -> AppResult<PendingEventRow> {
            let date = plan.timeline.date_at(event.offset_day)?;
            Ok(PendingEventRow {
                protocol_id: plan.protocol_id.clone(),
                offset_day: event.offset_day,
                date,
                weekday: Weekday::of(date),
                name: event.name,
            })
        })
        .collect()
}

/// ## Summary
/// Renders rows as a table for review.
#[must_use]
pub fn render_table(rows: &[PendingEventRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Protocol", "Day", "Date", "Weekday", "Name"]);

    for (index, row) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1).set_alignment(CellAlignment::Right),
            Cell::new(&row.protocol_id),
            Cell::new(row.offset_day).set_alignment(CellAlignment::Right),
            Cell::new(row.date),
            Cell::new(row.weekday),
            Cell::new(&row.name),
        ]);
    }
    table
}

/// ## Summary
/// Gate applied before submission: a confirmed schedule must not be empty.
///
/// ## Errors
/// Returns `EmptySchedule` when there is nothing to submit.
pub fn confirm(rows: &[PendingEventRow]) -> AppResult<&[PendingEventRow]> {
    if rows.is_empty() {
        return Err(AppError::EmptySchedule);
    }
    tracing::info!(count = rows.len(), "Schedule confirmed");
    Ok(rows)
}

/// ## Summary
/// Writes rows as pretty JSON (one array) for preview output.
///
/// ## Errors
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(rows: &[PendingEventRow], mut writer: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer)?;
    Ok(())
}

/// ## Summary
/// Writes one JSON object per line, the submission format for confirmed rows.
///
/// ## Errors
/// Returns an error if serialization or writing fails.
pub fn write_json_lines<W: Write>(rows: &[PendingEventRow], mut writer: W) -> AppResult<()> {
    for row in rows {
        serde_json::to_writer(&mut writer, row)?;
        writeln!(writer)?;
    }
    Ok(())
}
