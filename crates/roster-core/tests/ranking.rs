use polars::prelude::{Column, DataFrame};

use roster_core::frame::{f64_column, string_column};
use roster_core::{rank_roster, top_n};
use roster_model::{FORMATTED_SCORE, RANK, SCALED_OVERALL_SCORE};

fn scored(ids: &[&str], scores: &[f64]) -> DataFrame {
    DataFrame::new(vec![
        Column::new("StudentID".into(), ids),
        Column::new(SCALED_OVERALL_SCORE.into(), scores),
    ])
    .expect("df")
}

#[test]
fn best_score_takes_rank_one() {
    let df = scored(&["a", "b", "c"], &[6.0, 9.8, 7.9]);
    let ranked = rank_roster(&df).expect("rank");

    assert_eq!(
        string_column(&ranked, "StudentID").expect("ids"),
        vec!["b", "c", "a"]
    );
    assert_eq!(f64_column(&ranked, RANK).expect("rank"), vec![1.0, 2.0, 3.0]);
}

#[test]
fn ties_keep_input_order_with_distinct_ranks() {
    let df = scored(&["a", "b", "c", "d"], &[7.0, 9.0, 7.0, 9.0]);
    let ranked = rank_roster(&df).expect("rank");

    assert_eq!(
        string_column(&ranked, "StudentID").expect("ids"),
        vec!["b", "d", "a", "c"]
    );
    assert_eq!(
        f64_column(&ranked, RANK).expect("rank"),
        vec![1.0, 2.0, 3.0, 4.0]
    );
}

#[test]
fn formatted_score_rounds_half_away_from_zero() {
    let df = scored(&["a", "b", "c"], &[9.125, 8.0049, 6.0]);
    let ranked = rank_roster(&df).expect("rank");

    assert_eq!(
        f64_column(&ranked, FORMATTED_SCORE).expect("formatted"),
        vec![9.13, 8.0, 6.0]
    );
}

#[test]
fn ranking_uses_unrounded_scores() {
    let df = scored(&["a", "b"], &[8.004, 8.001]);
    let ranked = rank_roster(&df).expect("rank");

    assert_eq!(
        string_column(&ranked, "StudentID").expect("ids"),
        vec!["a", "b"]
    );
    assert_eq!(
        f64_column(&ranked, FORMATTED_SCORE).expect("formatted"),
        vec![8.0, 8.0]
    );
}

#[test]
fn top_n_clamps_to_roster_size() {
    let df = scored(&["a", "b", "c"], &[6.0, 9.8, 7.9]);
    let ranked = rank_roster(&df).expect("rank");

    assert_eq!(top_n(&ranked, 2).height(), 2);
    assert_eq!(top_n(&ranked, 50).height(), 3);
    assert_eq!(top_n(&ranked, 0).height(), 0);
}

#[test]
fn empty_roster_ranks_to_empty_frame() {
    let df = scored(&[], &[]);
    let ranked = rank_roster(&df).expect("rank");

    assert_eq!(ranked.height(), 0);
    assert!(ranked.column(RANK).is_ok());
}
