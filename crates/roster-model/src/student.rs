use serde::Serialize;

use crate::attribute::{AttributeValues, NumericAttribute};

/// One coerced roster row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub student_id: String,
    pub name: String,
    pub branch: String,
    pub attributes: AttributeValues,
    /// Attendance percentage; `None` when the column is absent or the cell unparseable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<f64>,
}

impl StudentRecord {
    pub fn attribute(&self, attribute: NumericAttribute) -> f64 {
        self.attributes.get(attribute)
    }
}

/// A record with its derived score and position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredStudent {
    #[serde(flatten)]
    pub record: StudentRecord,
    pub overall_score: f64,
    pub scaled_overall_score: f64,
    pub rank: u32,
    pub formatted_score: f64,
}
