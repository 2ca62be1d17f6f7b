//! CLI library components for the roster tool.

pub mod logging;
pub mod render;
