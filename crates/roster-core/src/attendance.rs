//! Attendance classification and filtering.

use polars::prelude::{AnyValue, DataFrame};
use roster_common::{any_to_f64, parse_percentage};
use roster_model::{AttendanceFilter, AttendanceStatus, AttendanceThresholds, RosterSchema};
use tracing::debug;

use crate::error::Result;
use crate::frame::{cell, filter_rows, has_column, required_column};

/// Read one attendance cell, accepting `"82%"`, `"82"` or a numeric value.
pub(crate) fn parse_attendance_cell(value: AnyValue<'_>) -> Option<f64> {
    let parsed = match value {
        AnyValue::String(s) => parse_percentage(s),
        AnyValue::StringOwned(s) => parse_percentage(&s),
        other => any_to_f64(other),
    };
    parsed.filter(|value| value.is_finite())
}

pub fn has_attendance(df: &DataFrame, schema: &RosterSchema) -> bool {
    has_column(df, &schema.attendance)
}

/// Attendance percentages in row order.
///
/// Fails with `MissingColumn` when the roster carries no attendance column.
pub fn attendance_values(df: &DataFrame, schema: &RosterSchema) -> Result<Vec<Option<f64>>> {
    let column = required_column(df, &schema.attendance)?;
    Ok((0..df.height())
        .map(|idx| parse_attendance_cell(cell(column, idx)))
        .collect())
}

/// Category of every row; `None` where the attendance cell is unreadable.
pub fn classify_attendance(
    df: &DataFrame,
    schema: &RosterSchema,
    thresholds: &AttendanceThresholds,
) -> Result<Vec<Option<AttendanceStatus>>> {
    Ok(attendance_values(df, schema)?
        .into_iter()
        .map(|value| value.map(|attendance| thresholds.classify(attendance)))
        .collect())
}

/// Rows matching `filter`, in their original order.
pub fn filter_by_attendance(
    df: &DataFrame,
    schema: &RosterSchema,
    thresholds: &AttendanceThresholds,
    filter: AttendanceFilter,
) -> Result<DataFrame> {
    let statuses = classify_attendance(df, schema, thresholds)?;
    let keep: Vec<bool> = statuses
        .iter()
        .map(|status| filter.matches(*status))
        .collect();
    let filtered = filter_rows(df, &keep)?;
    debug!(
        filter = %filter,
        matched = filtered.height(),
        total = df.height(),
        "attendance filter applied"
    );
    Ok(filtered)
}
