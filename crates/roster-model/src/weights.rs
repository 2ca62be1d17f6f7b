//! Weight table for the composite score.

use serde::{Deserialize, Serialize};

use crate::attribute::NumericAttribute;

/// Coefficient applied to each normalized attribute.
///
/// The default table sums to 1.325, not 1.0. It is applied as-is: the
/// composite is rescaled onto the display band afterwards, so only the
/// relative weights affect ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub gpa: f64,
    pub hackathons: f64,
    pub projects: f64,
    pub teacher_assistance: f64,
    pub core_engineering_score: f64,
    pub consistency: f64,
    pub extracurriculars: f64,
    pub internships: f64,
    pub leadership_roles: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            gpa: 0.70,
            hackathons: 0.20,
            projects: 0.10,
            teacher_assistance: 0.05,
            core_engineering_score: 0.10,
            consistency: 0.05,
            extracurriculars: 0.025,
            internships: 0.025,
            leadership_roles: 0.05,
        }
    }
}

impl Weights {
    /// Weight for `attribute`, or `None` for Papers, which is never scored.
    pub fn weight(&self, attribute: NumericAttribute) -> Option<f64> {
        match attribute {
            NumericAttribute::Gpa => Some(self.gpa),
            NumericAttribute::Hackathons => Some(self.hackathons),
            NumericAttribute::Projects => Some(self.projects),
            NumericAttribute::Papers => None,
            NumericAttribute::TeacherAssistance => Some(self.teacher_assistance),
            NumericAttribute::CoreEngineeringScore => Some(self.core_engineering_score),
            NumericAttribute::Consistency => Some(self.consistency),
            NumericAttribute::Extracurriculars => Some(self.extracurriculars),
            NumericAttribute::Internships => Some(self.internships),
            NumericAttribute::LeadershipRoles => Some(self.leadership_roles),
        }
    }

    pub fn total(&self) -> f64 {
        NumericAttribute::SCORED
            .iter()
            .filter_map(|attribute| self.weight(*attribute))
            .sum()
    }

    /// Weighted sum of normalized values over the scored attributes.
    pub fn composite<F>(&self, normalized: F) -> f64
    where
        F: Fn(NumericAttribute) -> f64,
    {
        NumericAttribute::SCORED
            .iter()
            .map(|attribute| self.weight(*attribute).unwrap_or(0.0) * normalized(*attribute))
            .sum()
    }

    /// First weight that is negative or not finite.
    pub(crate) fn first_invalid(&self) -> Option<(NumericAttribute, f64)> {
        NumericAttribute::SCORED.iter().find_map(|attribute| {
            let weight = self.weight(*attribute)?;
            (!weight.is_finite() || weight < 0.0).then_some((*attribute, weight))
        })
    }
}
