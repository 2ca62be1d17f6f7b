//! Composite scoring: min-max normalization, weighting, and band rescaling.

use polars::prelude::DataFrame;
use roster_model::{
    DegenerateInput, NumericAttribute, OVERALL_SCORE, RosterSchema, SCALED_OVERALL_SCORE,
    ScoringOptions,
};
use tracing::{debug, warn};

use crate::error::Result;
use crate::frame::{f64_column, set_f64_column};

/// Result of a linear rescale.
#[derive(Debug, Clone, PartialEq)]
pub struct Rescaled {
    pub values: Vec<f64>,
    /// True when every input was equal and all outputs were pinned to the lower bound.
    pub degenerate: bool,
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    }))
}

/// Map `values` linearly from their own [min, max] onto [lower, upper].
///
/// When min == max every value maps to `lower`.
pub fn rescale(values: &[f64], lower: f64, upper: f64) -> Rescaled {
    let Some((min, max)) = bounds(values) else {
        return Rescaled {
            values: Vec::new(),
            degenerate: false,
        };
    };
    let span = upper - lower;
    let range = max - min;
    if range.is_finite() {
        if range <= 0.0 {
            return Rescaled {
                values: vec![lower; values.len()],
                degenerate: true,
            };
        }
        return Rescaled {
            values: values
                .iter()
                .map(|value| lower + (value - min) / range * span)
                .collect(),
            degenerate: false,
        };
    }
    // max - min overflowed; halved operands keep every difference finite.
    let half_range = max / 2.0 - min / 2.0;
    Rescaled {
        values: values
            .iter()
            .map(|value| lower + (value / 2.0 - min / 2.0) / half_range * span)
            .collect(),
        degenerate: false,
    }
}

/// Scale `values` onto [0, 1]; a constant column maps to all zeros.
pub fn min_max_normalize(values: &[f64]) -> Rescaled {
    rescale(values, 0.0, 1.0)
}

/// A scored roster and the degenerate inputs met along the way.
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    pub frame: DataFrame,
    pub degenerate: Vec<DegenerateInput>,
}

/// Add `OverallScore` and `ScaledOverallScore` to a coerced roster.
///
/// Papers is neither normalized nor weighted. A zero-row roster scores to a
/// zero-row frame.
pub fn score_roster(
    df: &DataFrame,
    options: &ScoringOptions,
    schema: &RosterSchema,
) -> Result<ScoreOutcome> {
    let mut degenerate = Vec::new();
    let mut normalized: [Vec<f64>; 10] = Default::default();
    for attribute in NumericAttribute::SCORED {
        let column = schema.column(attribute);
        let scaled = min_max_normalize(&f64_column(df, column)?);
        if scaled.degenerate {
            debug!(column, "constant column normalized to zero");
            degenerate.push(DegenerateInput::ConstantColumn(attribute));
        }
        normalized[attribute.index()] = scaled.values;
    }

    let overall: Vec<f64> = (0..df.height())
        .map(|row| {
            options
                .weights
                .composite(|attribute| normalized[attribute.index()][row])
        })
        .collect();

    let scaled = rescale(&overall, options.lower_bound, options.upper_bound);
    if scaled.degenerate {
        warn!(
            rows = df.height(),
            lower_bound = options.lower_bound,
            "all overall scores are equal; every student scaled to the lower bound"
        );
        degenerate.push(DegenerateInput::ConstantScore);
    }

    let mut frame = df.clone();
    set_f64_column(&mut frame, OVERALL_SCORE, overall)?;
    set_f64_column(&mut frame, SCALED_OVERALL_SCORE, scaled.values)?;
    Ok(ScoreOutcome { frame, degenerate })
}
