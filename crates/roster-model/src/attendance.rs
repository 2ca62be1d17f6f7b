//! Attendance categories and the thresholds that separate them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Attendance category of a single student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Below the low threshold.
    Detained,
    /// At or above the low threshold but below the high one.
    Condonation,
    /// At or above the high threshold.
    Clear,
}

impl AttendanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Detained => "Detained",
            AttendanceStatus::Condonation => "Condonation",
            AttendanceStatus::Clear => "Clear",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentages splitting detained, condonation, and clear students.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceThresholds {
    pub low: f64,
    pub high: f64,
}

impl Default for AttendanceThresholds {
    fn default() -> Self {
        Self {
            low: 65.0,
            high: 75.0,
        }
    }
}

impl AttendanceThresholds {
    pub fn classify(&self, attendance: f64) -> AttendanceStatus {
        if attendance < self.low {
            AttendanceStatus::Detained
        } else if attendance < self.high {
            AttendanceStatus::Condonation
        } else {
            AttendanceStatus::Clear
        }
    }
}

/// Selector for the attendance listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceFilter {
    #[default]
    All,
    Detained,
    Condonation,
    Clear,
}

impl AttendanceFilter {
    /// Whether a row with the given classification passes the filter.
    ///
    /// Rows without a parseable attendance only pass [`AttendanceFilter::All`].
    pub fn matches(self, status: Option<AttendanceStatus>) -> bool {
        match self {
            AttendanceFilter::All => true,
            AttendanceFilter::Detained => status == Some(AttendanceStatus::Detained),
            AttendanceFilter::Condonation => status == Some(AttendanceStatus::Condonation),
            AttendanceFilter::Clear => status == Some(AttendanceStatus::Clear),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttendanceFilter::All => "All Students",
            AttendanceFilter::Detained => "Detained Students",
            AttendanceFilter::Condonation => "Condonation Students",
            AttendanceFilter::Clear => "Clear Students",
        }
    }
}

impl fmt::Display for AttendanceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown attendance filter: {0}")]
pub struct UnknownFilter(pub String);

impl FromStr for AttendanceFilter {
    type Err = UnknownFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" | "all students" | "all students' attendance" => Ok(AttendanceFilter::All),
            "detained" | "detained students" => Ok(AttendanceFilter::Detained),
            "condonation" | "condonation students" => Ok(AttendanceFilter::Condonation),
            "clear" | "clear students" => Ok(AttendanceFilter::Clear),
            _ => Err(UnknownFilter(value.to_string())),
        }
    }
}
