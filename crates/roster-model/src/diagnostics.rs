use std::fmt;

use serde::Serialize;

use crate::attribute::NumericAttribute;

/// Input that made a min-max scaling step degenerate.
///
/// These are handled by policy (all values map to the band minimum) and are
/// reported for observability, never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "attribute", rename_all = "snake_case")]
pub enum DegenerateInput {
    /// Every row holds the same value for this attribute.
    ConstantColumn(NumericAttribute),
    /// Every row has the same composite score.
    ConstantScore,
}

impl fmt::Display for DegenerateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateInput::ConstantColumn(attribute) => {
                write!(f, "column '{attribute}' is constant; normalized to 0")
            }
            DegenerateInput::ConstantScore => {
                f.write_str("all overall scores are equal; scaled to the band minimum")
            }
        }
    }
}
