//! Schema coercion: every roster leaves here with the full numeric schema.

use polars::prelude::DataFrame;
use roster_model::{NumericAttribute, RosterSchema};
use tracing::debug;

use crate::attendance::parse_attendance_cell;
use crate::error::{Result, RosterError};
use crate::frame::{cell, has_column, numeric_column, set_f64_column, set_optional_f64_column};

/// Produce a schema-conformant copy of `df`.
///
/// - identity columns must exist (`MissingColumn` otherwise)
/// - each of the ten numeric columns is present afterwards; missing columns
///   are synthesized as zeros and unreadable or non-finite cells become 0.0
/// - attendance, when present, is parsed from percentage strings; unreadable
///   cells become null
///
/// Other columns pass through untouched.
pub fn coerce_roster(df: &DataFrame, schema: &RosterSchema) -> Result<DataFrame> {
    for column in schema.identity_columns() {
        if !has_column(df, column) {
            return Err(RosterError::missing_column(column));
        }
    }
    let mut coerced = df.clone();
    for attribute in NumericAttribute::ALL {
        let column = schema.column(attribute);
        let values = if has_column(df, column) {
            let raw = numeric_column(df, column)?;
            let mut zeroed = 0usize;
            let values: Vec<f64> = raw
                .into_iter()
                .map(|value| match value {
                    Some(number) if number.is_finite() => number,
                    _ => {
                        zeroed += 1;
                        0.0
                    }
                })
                .collect();
            if zeroed > 0 {
                debug!(column, zeroed, "coerced missing or unparseable cells to zero");
            }
            values
        } else {
            debug!(column, "column absent; filled with zeros");
            vec![0.0; df.height()]
        };
        set_f64_column(&mut coerced, column, values)?;
    }
    if has_column(df, &schema.attendance) {
        let column = df.column(&schema.attendance)?;
        let values: Vec<Option<f64>> = (0..df.height())
            .map(|idx| parse_attendance_cell(cell(column, idx)))
            .collect();
        set_optional_f64_column(&mut coerced, &schema.attendance, values)?;
    }
    Ok(coerced)
}
