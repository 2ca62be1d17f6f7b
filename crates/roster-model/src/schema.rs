//! Column names of the roster table.

use serde::{Deserialize, Serialize};

use crate::attribute::NumericAttribute;

/// Composite score column added by the score engine.
pub const OVERALL_SCORE: &str = "OverallScore";
/// Composite score remapped onto the display band.
pub const SCALED_OVERALL_SCORE: &str = "ScaledOverallScore";
/// 1-based position after ranking.
pub const RANK: &str = "Rank";
/// Scaled score rounded for display.
pub const FORMATTED_SCORE: &str = "FormattedScore";

/// Input header names the pipeline looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSchema {
    pub student_id: String,
    pub name: String,
    pub branch: String,
    pub attendance: String,
    /// Headers for the ten numeric attributes, in [`NumericAttribute::ALL`] order.
    pub numeric_columns: [String; 10],
}

impl Default for RosterSchema {
    fn default() -> Self {
        Self {
            student_id: "StudentID".to_string(),
            name: "Name".to_string(),
            branch: "Branch".to_string(),
            attendance: "Attendance".to_string(),
            numeric_columns: NumericAttribute::ALL
                .map(|attribute| attribute.default_column().to_string()),
        }
    }
}

impl RosterSchema {
    pub fn column(&self, attribute: NumericAttribute) -> &str {
        &self.numeric_columns[attribute.index()]
    }

    /// Identity columns that must be present in every roster.
    pub fn identity_columns(&self) -> [&str; 3] {
        [
            self.student_id.as_str(),
            self.name.as_str(),
            self.branch.as_str(),
        ]
    }
}
