use polars::prelude::{Column, DataFrame};

use roster_core::{
    RosterError, coerce_roster, find_student, rank_roster, score_roster, student_details,
};
use roster_model::{RosterSchema, ScoringOptions};

fn ranked(attendance: bool) -> DataFrame {
    let mut columns = vec![
        Column::new("StudentID".into(), [101i64, 102, 103]),
        Column::new("Name".into(), ["Asha", "Ravi", "Meera"]),
        Column::new("Branch".into(), ["CSE", "ECE", "ME"]),
        Column::new("GPA".into(), [Some(9.0), Some(7.0), None]),
        Column::new("Hackathons".into(), [2.0, 1.0, 0.0]),
        Column::new("Internships".into(), [1.0, 0.0, 2.5]),
    ];
    if attendance {
        columns.push(Column::new(
            "Attendance".into(),
            [Some("82%"), None, Some("64")],
        ));
    }
    let schema = RosterSchema::default();
    let df = DataFrame::new(columns).expect("df");
    let coerced = coerce_roster(&df, &schema).expect("coerce");
    let scored = score_roster(&coerced, &ScoringOptions::default(), &schema).expect("score");
    rank_roster(&scored.frame).expect("rank")
}

#[test]
fn integer_identifiers_match_their_text() {
    let df = ranked(false);
    let student = find_student(&df, &RosterSchema::default(), "101")
        .expect("lookup")
        .expect("found");

    assert_eq!(student.record.name, "Asha");
    assert_eq!(student.rank, 1);
}

#[test]
fn query_is_trimmed() {
    let df = ranked(false);
    let student = find_student(&df, &RosterSchema::default(), "  102 ")
        .expect("lookup")
        .expect("found");

    assert_eq!(student.record.name, "Ravi");
}

#[test]
fn unknown_identifier_is_none() {
    let df = ranked(false);
    let student = find_student(&df, &RosterSchema::default(), "999").expect("lookup");

    assert!(student.is_none());
}

#[test]
fn empty_query_is_rejected() {
    let df = ranked(false);
    let err = find_student(&df, &RosterSchema::default(), "   ").expect_err("empty query");

    assert!(matches!(err, RosterError::InvalidQuery(_)));
}

#[test]
fn details_list_core_attributes() {
    let df = ranked(true);
    let student = find_student(&df, &RosterSchema::default(), "101")
        .expect("lookup")
        .expect("found");

    let rows: Vec<(&str, String)> = student_details(&student, true)
        .into_iter()
        .map(|row| (row.attribute, row.value))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Name", "Asha".to_string()),
            ("Branch", "CSE".to_string()),
            ("Rank", "1".to_string()),
            ("Overall Score", "9.80".to_string()),
            ("GPA", "9.00".to_string()),
            ("Hackathons", "2".to_string()),
            ("Projects", "0".to_string()),
            ("Internships", "1".to_string()),
            ("Attendance", "82%".to_string()),
        ]
    );
}

#[test]
fn missing_values_read_not_provided() {
    let df = ranked(true);
    let schema = RosterSchema::default();

    let meera = find_student(&df, &schema, "103")
        .expect("lookup")
        .expect("found");
    let details = student_details(&meera, true);
    let gpa = details.iter().find(|row| row.attribute == "GPA").expect("gpa");
    assert_eq!(gpa.value, "Not Provided");
    let internships = details
        .iter()
        .find(|row| row.attribute == "Internships")
        .expect("internships");
    assert_eq!(internships.value, "2.5");

    let ravi = find_student(&df, &schema, "102")
        .expect("lookup")
        .expect("found");
    let attendance = student_details(&ravi, true)
        .into_iter()
        .find(|row| row.attribute == "Attendance")
        .expect("attendance");
    assert_eq!(attendance.value, "Not Provided");
}

#[test]
fn attendance_line_needs_an_attendance_column() {
    let df = ranked(false);
    let student = find_student(&df, &RosterSchema::default(), "101")
        .expect("lookup")
        .expect("found");

    assert!(
        student_details(&student, false)
            .iter()
            .all(|row| row.attribute != "Attendance")
    );
}
