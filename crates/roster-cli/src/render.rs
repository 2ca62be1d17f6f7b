//! Machine-readable output: CSV and JSON writers plus the cell text shared
//! with the terminal tables.

use std::io::Write;

use anyhow::Result;
use roster_common::format_numeric;
use roster_core::{AttendanceListing, DetailRow};
use roster_ingest::CsvTable;
use roster_model::{AttendanceStatus, ScoredStudent, StudentRecord};
use serde::Serialize;

pub fn ranking_headers(with_attendance: bool) -> Vec<&'static str> {
    let mut headers = vec!["Rank", "StudentID", "Name", "Branch", "Score"];
    if with_attendance {
        headers.push("Attendance");
    }
    headers
}

pub fn ranking_row(student: &ScoredStudent, with_attendance: bool) -> Vec<String> {
    let record = &student.record;
    let mut row = vec![
        student.rank.to_string(),
        record.student_id.clone(),
        record.name.clone(),
        record.branch.clone(),
        score_text(student.formatted_score),
    ];
    if with_attendance {
        row.push(attendance_text(record.attendance));
    }
    row
}

pub const ATTENDANCE_HEADERS: [&str; 4] = ["StudentID", "Name", "Attendance", "Status"];

pub fn attendance_row(record: &StudentRecord, status: Option<AttendanceStatus>) -> Vec<String> {
    vec![
        record.student_id.clone(),
        record.name.clone(),
        attendance_text(record.attendance),
        status.map(|status| status.label().to_string()).unwrap_or_default(),
    ]
}

/// Two-decimal score text.
pub fn score_text(score: f64) -> String {
    format!("{score:.2}")
}

/// `"82%"`, or empty when there is no usable attendance value.
pub fn attendance_text(attendance: Option<f64>) -> String {
    attendance
        .map(|value| format!("{}%", format_numeric(value)))
        .unwrap_or_default()
}

pub fn write_ranking_csv<W: Write>(
    writer: W,
    students: &[ScoredStudent],
    with_attendance: bool,
) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(ranking_headers(with_attendance))?;
    for student in students {
        csv.write_record(ranking_row(student, with_attendance))?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_details_csv<W: Write>(writer: W, rows: &[DetailRow]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Attribute", "Value"])?;
    for row in rows {
        csv.write_record([row.attribute, row.value.as_str()])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_attendance_csv<W: Write>(writer: W, listing: &AttendanceListing) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(ATTENDANCE_HEADERS)?;
    for (record, status) in listing.students.iter().zip(&listing.statuses) {
        csv.write_record(attendance_row(record, *status))?;
    }
    csv.flush()?;
    Ok(())
}

/// Raw rows as loaded, before any coercion.
pub fn write_preview_csv<W: Write>(writer: W, table: &CsvTable, rows: usize) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&table.headers)?;
    for row in table.rows.iter().take(rows) {
        csv.write_record(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// One attendance line in JSON output.
#[derive(Debug, Serialize)]
pub struct AttendanceEntry<'a> {
    #[serde(flatten)]
    pub student: &'a StudentRecord,
    pub status: Option<AttendanceStatus>,
}

pub fn attendance_entries(listing: &AttendanceListing) -> Vec<AttendanceEntry<'_>> {
    listing
        .students
        .iter()
        .zip(&listing.statuses)
        .map(|(student, status)| AttendanceEntry {
            student,
            status: *status,
        })
        .collect()
}

/// Pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}
