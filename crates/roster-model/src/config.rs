//! Pipeline configuration.
//!
//! Every constant the pipeline depends on lives here so the scoring band,
//! thresholds, weights and header names are set in one place. A
//! configuration file only needs the keys it overrides:
//!
//! ```toml
//! [scoring]
//! upper_bound = 9.6
//!
//! [attendance]
//! low = 60.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::attendance::AttendanceThresholds;
use crate::schema::RosterSchema;
use crate::weights::Weights;

/// Lower end of the display band shared by every deployment.
pub const DEFAULT_LOWER_BOUND: f64 = 6.0;

/// Deployment flavor, which fixes the top of the display band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreVariant {
    /// Ranking shown alongside attendance; band tops out at 9.8.
    #[default]
    AttendanceAware,
    /// Ranking computed without attendance in view; band tops out at 9.6.
    Decoupled,
}

impl ScoreVariant {
    pub fn upper_bound(self) -> f64 {
        match self {
            ScoreVariant::AttendanceAware => 9.8,
            ScoreVariant::Decoupled => 9.6,
        }
    }
}

/// Score band and weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub weights: Weights,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self::for_variant(ScoreVariant::default())
    }
}

impl ScoringOptions {
    pub fn for_variant(variant: ScoreVariant) -> Self {
        Self {
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: variant.upper_bound(),
            weights: Weights::default(),
        }
    }

    #[must_use]
    pub fn with_variant(mut self, variant: ScoreVariant) -> Self {
        self.upper_bound = variant.upper_bound();
        self
    }
}

/// Options for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Top-N sizes offered to the user.
    pub top_choices: Vec<usize>,
    pub default_top: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            top_choices: vec![3, 10, 30, 50],
            default_top: 3,
        }
    }
}

/// Complete configuration for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub scoring: ScoringOptions,
    pub attendance: AttendanceThresholds,
    pub schema: RosterSchema,
    pub display: DisplayOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

impl RosterConfig {
    /// Parse and validate a TOML document. `origin` is only used in error messages.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: RosterConfig = toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        if !scoring.lower_bound.is_finite() || !scoring.upper_bound.is_finite() {
            return Err(ConfigError::invalid("scoring bounds must be finite"));
        }
        if scoring.lower_bound >= scoring.upper_bound {
            return Err(ConfigError::invalid(format!(
                "scoring.lower_bound ({}) must be below scoring.upper_bound ({})",
                scoring.lower_bound, scoring.upper_bound
            )));
        }
        if let Some((attribute, weight)) = scoring.weights.first_invalid() {
            return Err(ConfigError::invalid(format!(
                "weight for '{attribute}' must be a non-negative number, got {weight}"
            )));
        }
        let thresholds = &self.attendance;
        if !thresholds.low.is_finite() || !thresholds.high.is_finite() {
            return Err(ConfigError::invalid("attendance thresholds must be finite"));
        }
        if thresholds.low > thresholds.high {
            return Err(ConfigError::invalid(format!(
                "attendance.low ({}) must not exceed attendance.high ({})",
                thresholds.low, thresholds.high
            )));
        }
        if !self.display.top_choices.contains(&self.display.default_top) {
            return Err(ConfigError::invalid(format!(
                "display.default_top ({}) must be one of {:?}",
                self.display.default_top, self.display.top_choices
            )));
        }
        Ok(())
    }
}

/// Load a configuration file, validating it before returning.
pub fn load_config(path: &Path) -> Result<RosterConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    RosterConfig::from_toml_str(&content, path)
}
