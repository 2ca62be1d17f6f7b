//! Roster scoring pipeline.
//!
//! - **coerce**: guarantee the ten numeric columns and parse attendance
//! - **score**: min-max normalization, weighted composite, band rescaling
//! - **rank**: stable descending sort, 1-based ranks, display rounding
//! - **attendance**: detained / condonation / clear classification and filtering
//! - **lookup**: identifier lookup and the details listing
//! - **pipeline**: the stages wired together for one configuration

#![deny(unsafe_code)]

pub mod attendance;
pub mod coerce;
pub mod error;
pub mod frame;
pub mod lookup;
pub mod pipeline;
pub mod rank;
pub mod records;
pub mod score;

pub use attendance::{
    attendance_values, classify_attendance, filter_by_attendance, has_attendance,
};
pub use coerce::coerce_roster;
pub use error::{Result, RosterError};
pub use lookup::{DetailRow, find_student, student_details};
pub use pipeline::{AttendanceListing, RankedRoster, RosterPipeline};
pub use rank::{SCORE_DECIMALS, rank_order, rank_roster, top_n};
pub use records::{scored_students, student_records};
pub use score::{Rescaled, ScoreOutcome, min_max_normalize, rescale, score_roster};
