//! Column access helpers over Polars data frames.

use polars::prelude::{
    AnyValue, BooleanChunked, Column, DataFrame, NamedFrom, NewChunkedArray, Series,
    UInt32Chunked,
};
use roster_common::{any_to_f64, any_to_string};

use crate::error::{Result, RosterError};

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Look up a column, reporting absence as [`RosterError::MissingColumn`].
pub fn required_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| RosterError::missing_column(name))
}

pub(crate) fn cell(column: &Column, idx: usize) -> AnyValue<'_> {
    column.get(idx).unwrap_or(AnyValue::Null)
}

pub fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = required_column(df, name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string(cell(column, idx)).trim().to_string());
    }
    Ok(values)
}

pub fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = required_column(df, name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_f64(cell(column, idx)));
    }
    Ok(values)
}

/// Numeric column with missing cells read as zero.
pub fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    Ok(numeric_column(df, name)?
        .into_iter()
        .map(|value| value.unwrap_or(0.0))
        .collect())
}

pub(crate) fn set_f64_column(df: &mut DataFrame, name: &str, values: Vec<f64>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

pub(crate) fn set_optional_f64_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<f64>>,
) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

pub(crate) fn set_u32_column(df: &mut DataFrame, name: &str, values: Vec<u32>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Reorder rows by position.
pub(crate) fn take_rows(df: &DataFrame, indices: Vec<u32>) -> Result<DataFrame> {
    let idx = UInt32Chunked::from_vec("idx".into(), indices);
    Ok(df.take(&idx)?)
}

pub(crate) fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(df.filter(&mask)?)
}
