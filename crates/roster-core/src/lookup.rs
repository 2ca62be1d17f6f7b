//! Single-student lookup by identifier.

use polars::prelude::DataFrame;
use roster_common::format_numeric;
use roster_model::{NumericAttribute, RosterSchema, ScoredStudent};
use serde::Serialize;

use crate::error::{Result, RosterError};
use crate::frame::string_column;
use crate::records::scored_student_at;

/// Find the first row of a ranked roster whose identifier equals `query`.
///
/// Stored identifiers are compared by their string form, so an integer
/// column value `101` matches `"101"`. The query is trimmed; an empty query
/// is an [`RosterError::InvalidQuery`]. No match is `Ok(None)`.
pub fn find_student(
    ranked: &DataFrame,
    schema: &RosterSchema,
    query: &str,
) -> Result<Option<ScoredStudent>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(RosterError::InvalidQuery(
            "student identifier is empty".to_string(),
        ));
    }
    let ids = string_column(ranked, &schema.student_id)?;
    match ids.iter().position(|id| id == query) {
        Some(idx) => Ok(Some(scored_student_at(ranked, schema, idx)?)),
        None => Ok(None),
    }
}

/// One line of the student details listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub attribute: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(attribute: &'static str, value: impl Into<String>) -> Self {
        Self {
            attribute,
            value: value.into(),
        }
    }
}

/// Attribute/value listing shown for a lookup hit.
///
/// A GPA of zero means the roster had no usable GPA and reads "Not
/// Provided". The attendance line appears only when the roster has an
/// attendance column.
pub fn student_details(student: &ScoredStudent, with_attendance: bool) -> Vec<DetailRow> {
    let record = &student.record;
    let gpa = record.attribute(NumericAttribute::Gpa);
    let mut rows = vec![
        DetailRow::new("Name", record.name.clone()),
        DetailRow::new("Branch", record.branch.clone()),
        DetailRow::new("Rank", student.rank.to_string()),
        DetailRow::new("Overall Score", format!("{:.2}", student.formatted_score)),
        DetailRow::new(
            "GPA",
            if gpa != 0.0 {
                format!("{gpa:.2}")
            } else {
                "Not Provided".to_string()
            },
        ),
    ];
    for attribute in [
        NumericAttribute::Hackathons,
        NumericAttribute::Projects,
        NumericAttribute::Internships,
    ] {
        rows.push(DetailRow::new(
            attribute.default_column(),
            format_numeric(record.attribute(attribute)),
        ));
    }
    if with_attendance {
        let attendance = record
            .attendance
            .map(|value| format!("{}%", format_numeric(value)))
            .unwrap_or_else(|| "Not Provided".to_string());
        rows.push(DetailRow::new("Attendance", attendance));
    }
    rows
}
