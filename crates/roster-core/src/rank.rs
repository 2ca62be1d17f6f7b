//! Ranking by scaled score.

use polars::prelude::DataFrame;
use roster_common::round_half_away;
use roster_model::{FORMATTED_SCORE, RANK, SCALED_OVERALL_SCORE};

use crate::error::Result;
use crate::frame::{f64_column, set_f64_column, set_u32_column, take_rows};

/// Decimal places kept in `FormattedScore`.
pub const SCORE_DECIMALS: u32 = 2;

fn sort_key(score: f64) -> f64 {
    if score.is_finite() {
        score
    } else {
        f64::NEG_INFINITY
    }
}

/// Row positions ordered by descending score; equal scores keep input order.
///
/// Non-finite scores sort after every finite one.
pub fn rank_order(scores: &[f64]) -> Vec<u32> {
    let mut indices: Vec<u32> = (0..scores.len()).map(|idx| idx as u32).collect();
    // `sort_by` is stable, which is what breaks ties by input order.
    indices.sort_by(|a, b| {
        let left = sort_key(scores[*a as usize]);
        let right = sort_key(scores[*b as usize]);
        right.total_cmp(&left)
    });
    indices
}

/// Sort a scored roster and add `Rank` and `FormattedScore`.
///
/// Ranks are 1-based positions computed from the unrounded scaled score;
/// `FormattedScore` rounds half away from zero.
pub fn rank_roster(df: &DataFrame) -> Result<DataFrame> {
    let scores = f64_column(df, SCALED_OVERALL_SCORE)?;
    let order = rank_order(&scores);
    let formatted: Vec<f64> = order
        .iter()
        .map(|idx| round_half_away(scores[*idx as usize], SCORE_DECIMALS))
        .collect();
    let ranks: Vec<u32> = (1..=order.len() as u32).collect();
    let mut ranked = take_rows(df, order)?;
    set_u32_column(&mut ranked, RANK, ranks)?;
    set_f64_column(&mut ranked, FORMATTED_SCORE, formatted)?;
    Ok(ranked)
}

/// The first `n` rows of a ranked roster (all rows when `n` exceeds its height).
pub fn top_n(ranked: &DataFrame, n: usize) -> DataFrame {
    ranked.head(Some(n))
}
