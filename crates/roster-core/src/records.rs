//! Typed views over roster frames.

use polars::prelude::{Column, DataFrame};
use roster_common::{any_to_f64, any_to_string};
use roster_model::{
    AttributeValues, FORMATTED_SCORE, NumericAttribute, OVERALL_SCORE, RANK, RosterSchema,
    SCALED_OVERALL_SCORE, ScoredStudent, StudentRecord,
};

use crate::attendance::parse_attendance_cell;
use crate::error::Result;
use crate::frame::{cell, required_column};

struct RecordColumns<'a> {
    student_id: &'a Column,
    name: &'a Column,
    branch: &'a Column,
    numeric: Vec<&'a Column>,
    attendance: Option<&'a Column>,
}

impl<'a> RecordColumns<'a> {
    fn new(df: &'a DataFrame, schema: &RosterSchema) -> Result<Self> {
        let numeric = NumericAttribute::ALL
            .iter()
            .map(|attribute| required_column(df, schema.column(*attribute)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            student_id: required_column(df, &schema.student_id)?,
            name: required_column(df, &schema.name)?,
            branch: required_column(df, &schema.branch)?,
            numeric,
            attendance: df.column(&schema.attendance).ok(),
        })
    }

    fn record(&self, idx: usize) -> StudentRecord {
        let mut attributes = AttributeValues::default();
        for (attribute, column) in NumericAttribute::ALL.iter().zip(&self.numeric) {
            attributes.set(*attribute, any_to_f64(cell(column, idx)).unwrap_or(0.0));
        }
        StudentRecord {
            student_id: any_to_string(cell(self.student_id, idx)).trim().to_string(),
            name: any_to_string(cell(self.name, idx)),
            branch: any_to_string(cell(self.branch, idx)),
            attributes,
            attendance: self
                .attendance
                .and_then(|column| parse_attendance_cell(cell(column, idx))),
        }
    }
}

struct ScoreColumns<'a> {
    overall: &'a Column,
    scaled: &'a Column,
    rank: &'a Column,
    formatted: &'a Column,
}

impl<'a> ScoreColumns<'a> {
    fn new(df: &'a DataFrame) -> Result<Self> {
        Ok(Self {
            overall: required_column(df, OVERALL_SCORE)?,
            scaled: required_column(df, SCALED_OVERALL_SCORE)?,
            rank: required_column(df, RANK)?,
            formatted: required_column(df, FORMATTED_SCORE)?,
        })
    }

    fn score(&self, record: StudentRecord, idx: usize) -> ScoredStudent {
        let number = |column: &Column| any_to_f64(cell(column, idx)).unwrap_or(0.0);
        ScoredStudent {
            record,
            overall_score: number(self.overall),
            scaled_overall_score: number(self.scaled),
            rank: number(self.rank) as u32,
            formatted_score: number(self.formatted),
        }
    }
}

/// Every row of a coerced roster as a [`StudentRecord`].
pub fn student_records(df: &DataFrame, schema: &RosterSchema) -> Result<Vec<StudentRecord>> {
    let columns = RecordColumns::new(df, schema)?;
    Ok((0..df.height()).map(|idx| columns.record(idx)).collect())
}

/// Every row of a ranked roster as a [`ScoredStudent`], in table order.
pub fn scored_students(df: &DataFrame, schema: &RosterSchema) -> Result<Vec<ScoredStudent>> {
    let records = RecordColumns::new(df, schema)?;
    let scores = ScoreColumns::new(df)?;
    Ok((0..df.height())
        .map(|idx| scores.score(records.record(idx), idx))
        .collect())
}

pub(crate) fn scored_student_at(
    df: &DataFrame,
    schema: &RosterSchema,
    idx: usize,
) -> Result<ScoredStudent> {
    let records = RecordColumns::new(df, schema)?;
    let scores = ScoreColumns::new(df)?;
    Ok(scores.score(records.record(idx), idx))
}
