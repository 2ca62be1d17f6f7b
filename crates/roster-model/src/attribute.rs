//! The fixed catalogue of numeric student attributes.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One of the ten numeric columns every coerced record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericAttribute {
    Gpa,
    Hackathons,
    Projects,
    Papers,
    TeacherAssistance,
    CoreEngineeringScore,
    Consistency,
    Extracurriculars,
    Internships,
    LeadershipRoles,
}

impl NumericAttribute {
    /// All attributes in schema order.
    pub const ALL: [NumericAttribute; 10] = [
        NumericAttribute::Gpa,
        NumericAttribute::Hackathons,
        NumericAttribute::Projects,
        NumericAttribute::Papers,
        NumericAttribute::TeacherAssistance,
        NumericAttribute::CoreEngineeringScore,
        NumericAttribute::Consistency,
        NumericAttribute::Extracurriculars,
        NumericAttribute::Internships,
        NumericAttribute::LeadershipRoles,
    ];

    /// Attributes that are normalized and weighted. Papers is carried but never scored.
    pub const SCORED: [NumericAttribute; 9] = [
        NumericAttribute::Gpa,
        NumericAttribute::Hackathons,
        NumericAttribute::Projects,
        NumericAttribute::TeacherAssistance,
        NumericAttribute::CoreEngineeringScore,
        NumericAttribute::Consistency,
        NumericAttribute::Extracurriculars,
        NumericAttribute::Internships,
        NumericAttribute::LeadershipRoles,
    ];

    /// Position within [`NumericAttribute::ALL`].
    pub fn index(self) -> usize {
        match self {
            NumericAttribute::Gpa => 0,
            NumericAttribute::Hackathons => 1,
            NumericAttribute::Projects => 2,
            NumericAttribute::Papers => 3,
            NumericAttribute::TeacherAssistance => 4,
            NumericAttribute::CoreEngineeringScore => 5,
            NumericAttribute::Consistency => 6,
            NumericAttribute::Extracurriculars => 7,
            NumericAttribute::Internships => 8,
            NumericAttribute::LeadershipRoles => 9,
        }
    }

    /// Header used in roster files when no schema override is configured.
    pub fn default_column(self) -> &'static str {
        match self {
            NumericAttribute::Gpa => "GPA",
            NumericAttribute::Hackathons => "Hackathons",
            NumericAttribute::Projects => "Projects",
            NumericAttribute::Papers => "Papers",
            NumericAttribute::TeacherAssistance => "Teacher Assistance",
            NumericAttribute::CoreEngineeringScore => "Core Engineering Score",
            NumericAttribute::Consistency => "Consistency",
            NumericAttribute::Extracurriculars => "Extracurriculars",
            NumericAttribute::Internships => "Internships",
            NumericAttribute::LeadershipRoles => "Leadership Roles",
        }
    }
}

impl fmt::Display for NumericAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_column())
    }
}

/// Values for all ten attributes, indexed by [`NumericAttribute::index`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttributeValues([f64; 10]);

impl AttributeValues {
    pub fn get(&self, attribute: NumericAttribute) -> f64 {
        self.0[attribute.index()]
    }

    pub fn set(&mut self, attribute: NumericAttribute, value: f64) {
        self.0[attribute.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (NumericAttribute, f64)> + '_ {
        NumericAttribute::ALL
            .iter()
            .map(move |attribute| (*attribute, self.get(*attribute)))
    }
}

impl Serialize for AttributeValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NumericAttribute::ALL.len()))?;
        for (attribute, value) in self.iter() {
            map.serialize_entry(&attribute, &value)?;
        }
        map.end()
    }
}
