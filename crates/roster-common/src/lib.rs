//! Shared utilities for roster crates.
//!
//! This crate provides the value conversions used across the roster
//! workspace: Polars `AnyValue` helpers, lenient numeric parsing, and
//! display rounding.

pub mod polars;

pub use polars::{
    any_to_f64, any_to_string, format_numeric, parse_f64, parse_percentage, round_half_away,
};
