use std::io::Write;

use roster_core::{RosterError, RosterPipeline};
use roster_ingest::read_csv_table;
use roster_model::{
    AttendanceFilter, AttendanceStatus, DegenerateInput, RosterConfig, ScoreVariant,
};

const ROSTER: &str = "\
StudentID,Name,Branch,GPA,Hackathons,Attendance
S1,Asha,CSE,9,0,82%
S2,Ravi,ECE,7,0,70%
S3,Meera,ME,5,0,60%
";

fn decoupled() -> RosterPipeline {
    let mut config = RosterConfig::default();
    config.scoring = config.scoring.with_variant(ScoreVariant::Decoupled);
    RosterPipeline::new(config)
}

#[test]
fn ranks_a_csv_roster_end_to_end() {
    let pipeline = RosterPipeline::default();
    let ranked = pipeline.rank_reader(ROSTER.as_bytes()).expect("rank");
    let students = pipeline.students(&ranked).expect("students");

    let summary: Vec<(&str, u32, f64)> = students
        .iter()
        .map(|s| (s.record.student_id.as_str(), s.rank, s.formatted_score))
        .collect();
    assert_eq!(
        summary,
        vec![("S1", 1, 9.8), ("S2", 2, 7.9), ("S3", 3, 6.0)]
    );
    assert!(ranked.has_attendance);
    assert!(!ranked.degenerate.contains(&DegenerateInput::ConstantScore));
}

#[test]
fn decoupled_variant_uses_the_lower_band() {
    let pipeline = decoupled();
    let ranked = pipeline.rank_reader(ROSTER.as_bytes()).expect("rank");
    let scores: Vec<f64> = pipeline
        .students(&ranked)
        .expect("students")
        .iter()
        .map(|s| s.formatted_score)
        .collect();

    assert_eq!(scores, vec![9.6, 7.8, 6.0]);
}

#[test]
fn top_returns_best_first() {
    let pipeline = RosterPipeline::default();
    let ranked = pipeline.rank_reader(ROSTER.as_bytes()).expect("rank");

    let top = pipeline.top(&ranked, 2).expect("top");
    let names: Vec<&str> = top.iter().map(|s| s.record.name.as_str()).collect();
    assert_eq!(names, vec!["Asha", "Ravi"]);
}

#[test]
fn lookup_finds_ranked_student() {
    let pipeline = RosterPipeline::default();
    let ranked = pipeline.rank_reader(ROSTER.as_bytes()).expect("rank");

    let ravi = pipeline.lookup(&ranked, "S2").expect("lookup").expect("found");
    assert_eq!(ravi.rank, 2);
    assert_eq!(ravi.record.attendance, Some(70.0));
    assert!(pipeline.lookup(&ranked, "S9").expect("lookup").is_none());
}

#[test]
fn attendance_listing_classifies_in_input_order() {
    let pipeline = RosterPipeline::default();
    let table = read_csv_table(ROSTER.as_bytes()).expect("table");

    let listing = pipeline
        .attendance(&table, AttendanceFilter::All)
        .expect("attendance");
    let ids: Vec<&str> = listing
        .students
        .iter()
        .map(|s| s.student_id.as_str())
        .collect();
    assert_eq!(ids, vec!["S1", "S2", "S3"]);
    assert_eq!(
        listing.statuses,
        vec![
            Some(AttendanceStatus::Clear),
            Some(AttendanceStatus::Condonation),
            Some(AttendanceStatus::Detained),
        ]
    );

    let detained = pipeline
        .attendance(&table, AttendanceFilter::Detained)
        .expect("attendance");
    assert_eq!(detained.students.len(), 1);
    assert_eq!(detained.students[0].name, "Meera");
}

#[test]
fn attendance_without_column_is_missing_column() {
    let pipeline = RosterPipeline::default();
    let table = read_csv_table("StudentID,Name,Branch\nS1,Asha,CSE\n".as_bytes()).expect("table");

    let err = pipeline
        .attendance(&table, AttendanceFilter::All)
        .expect_err("no attendance column");
    assert!(matches!(err, RosterError::MissingColumn { .. }));
}

#[test]
fn single_student_lands_on_lower_bound() {
    let pipeline = RosterPipeline::default();
    let ranked = pipeline
        .rank_reader("StudentID,Name,Branch,GPA\nS1,Asha,CSE,9.4\n".as_bytes())
        .expect("rank");

    let students = pipeline.students(&ranked).expect("students");
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].rank, 1);
    assert_eq!(students[0].formatted_score, 6.0);
    assert!(ranked.degenerate.contains(&DegenerateInput::ConstantScore));
    assert!(!ranked.has_attendance);
}

#[test]
fn header_only_roster_ranks_to_nothing() {
    let pipeline = RosterPipeline::default();
    let ranked = pipeline
        .rank_reader("StudentID,Name,Branch,GPA\n".as_bytes())
        .expect("rank");

    assert_eq!(ranked.frame.height(), 0);
    assert!(pipeline.students(&ranked).expect("students").is_empty());
}

#[test]
fn malformed_csv_is_a_parse_error() {
    let pipeline = RosterPipeline::default();
    let err = pipeline
        .rank_reader("StudentID,Name,Branch\nS1,Asha\n".as_bytes())
        .expect_err("ragged rows");

    match err {
        RosterError::Ingest(inner) => assert!(inner.is_parse_error(), "{inner}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rank_path_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(ROSTER.as_bytes()).expect("write");

    let pipeline = RosterPipeline::default();
    let ranked = pipeline.rank_path(file.path()).expect("rank");
    assert_eq!(ranked.frame.height(), 3);
}

#[test]
fn missing_identity_column_fails_ranking() {
    let pipeline = RosterPipeline::default();
    let err = pipeline
        .rank_reader("StudentID,Name,GPA\nS1,Asha,9\n".as_bytes())
        .expect_err("branch is required");

    assert!(matches!(err, RosterError::MissingColumn { column } if column == "Branch"));
}

#[test]
fn extreme_finite_values_keep_scores_in_band() {
    let pipeline = RosterPipeline::default();
    let ranked = pipeline
        .rank_reader(
            "StudentID,Name,Branch,GPA,Hackathons\nA,a,X,9,1e308\nB,b,X,7,-1e308\nC,c,X,5,0\n"
                .as_bytes(),
        )
        .expect("rank");
    let students = pipeline.students(&ranked).expect("students");

    for student in &students {
        assert!(student.overall_score.is_finite(), "{student:?}");
        assert!((6.0..=9.8 + 1e-9).contains(&student.scaled_overall_score));
    }
    let order: Vec<&str> = students
        .iter()
        .map(|s| s.record.student_id.as_str())
        .collect();
    assert_eq!(order, vec!["A", "B", "C"]);
    assert_eq!(students[0].formatted_score, 9.8);
    assert_eq!(students[2].formatted_score, 6.0);
}

#[test]
fn repeated_percent_signs_are_accepted() {
    let pipeline = RosterPipeline::default();
    let table = read_csv_table(
        "StudentID,Name,Branch,Attendance\nS1,Asha,CSE,70%%\nS2,Ravi,ECE,50%\n".as_bytes(),
    )
    .expect("table");

    let listing = pipeline
        .attendance(&table, AttendanceFilter::All)
        .expect("attendance");
    assert_eq!(
        listing.statuses,
        vec![
            Some(AttendanceStatus::Condonation),
            Some(AttendanceStatus::Detained),
        ]
    );
}
