//! Output rendering for ranked rosters, lookups and attendance listings.

use roster_cli::render::{
    attendance_entries, write_attendance_csv, write_details_csv, write_json, write_preview_csv,
    write_ranking_csv,
};
use roster_core::{RankedRoster, RosterPipeline, student_details};
use roster_ingest::{CsvTable, read_csv_table};
use roster_model::AttendanceFilter;

const ROSTER: &str = "\
StudentID,Name,Branch,GPA,Hackathons,Attendance
S1,Asha,CSE,9,0,82%
S2,Ravi,ECE,7,0,70%
S3,Meera,ME,5,0,60%
";

fn table() -> CsvTable {
    read_csv_table(ROSTER.as_bytes()).expect("table")
}

fn ranked_roster(pipeline: &RosterPipeline) -> RankedRoster {
    pipeline.rank(&table()).expect("rank")
}

fn text(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("utf8")
}

#[test]
fn ranking_csv_lists_best_first() {
    let pipeline = RosterPipeline::default();
    let ranked = ranked_roster(&pipeline);
    let students = pipeline.students(&ranked).expect("students");

    let mut buffer = Vec::new();
    write_ranking_csv(&mut buffer, &students, ranked.has_attendance).expect("csv");

    insta::assert_snapshot!(text(buffer).trim_end(), @r"
    Rank,StudentID,Name,Branch,Score,Attendance
    1,S1,Asha,CSE,9.80,82%
    2,S2,Ravi,ECE,7.90,70%
    3,S3,Meera,ME,6.00,60%
    ");
}

#[test]
fn ranking_csv_omits_attendance_when_absent() {
    let pipeline = RosterPipeline::default();
    let ranked = pipeline
        .rank_reader("StudentID,Name,Branch,GPA\n7,Ira,CSE,8\n8,Dev,IT,6\n".as_bytes())
        .expect("rank");
    let students = pipeline.top(&ranked, 1).expect("top");

    let mut buffer = Vec::new();
    write_ranking_csv(&mut buffer, &students, ranked.has_attendance).expect("csv");

    insta::assert_snapshot!(text(buffer).trim_end(), @r"
    Rank,StudentID,Name,Branch,Score
    1,7,Ira,CSE,9.80
    ");
}

#[test]
fn details_csv_lists_attributes() {
    let pipeline = RosterPipeline::default();
    let ranked = ranked_roster(&pipeline);
    let student = pipeline
        .lookup(&ranked, "S2")
        .expect("lookup")
        .expect("found");

    let mut buffer = Vec::new();
    write_details_csv(&mut buffer, &student_details(&student, ranked.has_attendance))
        .expect("csv");

    insta::assert_snapshot!(text(buffer).trim_end(), @r"
    Attribute,Value
    Name,Ravi
    Branch,ECE
    Rank,2
    Overall Score,7.90
    GPA,7.00
    Hackathons,0
    Projects,0
    Internships,0
    Attendance,70%
    ");
}

#[test]
fn attendance_csv_keeps_input_order() {
    let pipeline = RosterPipeline::default();
    let listing = pipeline
        .attendance(&table(), AttendanceFilter::All)
        .expect("attendance");

    let mut buffer = Vec::new();
    write_attendance_csv(&mut buffer, &listing).expect("csv");

    insta::assert_snapshot!(text(buffer).trim_end(), @r"
    StudentID,Name,Attendance,Status
    S1,Asha,82%,Clear
    S2,Ravi,70%,Condonation
    S3,Meera,60%,Detained
    ");
}

#[test]
fn preview_csv_shows_raw_rows() {
    let mut buffer = Vec::new();
    write_preview_csv(&mut buffer, &table(), 1).expect("csv");

    insta::assert_snapshot!(text(buffer).trim_end(), @r"
    StudentID,Name,Branch,GPA,Hackathons,Attendance
    S1,Asha,CSE,9,0,82%
    ");
}

#[test]
fn ranking_json_flattens_records() {
    let pipeline = RosterPipeline::default();
    let ranked = ranked_roster(&pipeline);
    let students = pipeline.top(&ranked, 3).expect("top");

    let mut buffer = Vec::new();
    write_json(&mut buffer, &students).expect("json");
    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("parse");

    assert_eq!(value[0]["student_id"], "S1");
    assert_eq!(value[0]["rank"], 1);
    assert_eq!(value[0]["attributes"]["gpa"], 9.0);
    assert_eq!(value[0]["attendance"], 82.0);
    assert_eq!(value[2]["formatted_score"], 6.0);
}

#[test]
fn attendance_json_carries_status() {
    let pipeline = RosterPipeline::default();
    let listing = pipeline
        .attendance(&table(), AttendanceFilter::Detained)
        .expect("attendance");

    let mut buffer = Vec::new();
    write_json(&mut buffer, &attendance_entries(&listing)).expect("json");
    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("parse");

    let entries = value.as_array().expect("array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Meera");
    assert_eq!(entries[0]["status"], "detained");
}
