#![deny(unsafe_code)]

pub mod attendance;
pub mod attribute;
pub mod config;
pub mod diagnostics;
pub mod schema;
pub mod student;
pub mod weights;

pub use attendance::{AttendanceFilter, AttendanceStatus, AttendanceThresholds, UnknownFilter};
pub use attribute::{AttributeValues, NumericAttribute};
pub use config::{
    ConfigError, DEFAULT_LOWER_BOUND, DisplayOptions, RosterConfig, ScoreVariant, ScoringOptions,
    load_config,
};
pub use diagnostics::DegenerateInput;
pub use schema::{FORMATTED_SCORE, OVERALL_SCORE, RANK, RosterSchema, SCALED_OVERALL_SCORE};
pub use student::{ScoredStudent, StudentRecord};
pub use weights::Weights;
