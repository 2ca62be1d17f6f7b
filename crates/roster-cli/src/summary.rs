use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_cli::render::{ATTENDANCE_HEADERS, attendance_row, ranking_headers, ranking_row};
use roster_core::{AttendanceListing, DetailRow};
use roster_ingest::CsvTable;
use roster_model::{AttendanceStatus, ScoredStudent};

pub fn print_ranking(students: &[ScoredStudent], with_attendance: bool, styled: bool) {
    let mut table = Table::new();
    table.set_header(
        ranking_headers(with_attendance)
            .into_iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_summary_table_style(&mut table, styled);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    if with_attendance {
        align_column(&mut table, 5, CellAlignment::Right);
    }
    for student in students {
        let mut row: Vec<Cell> = ranking_row(student, with_attendance)
            .into_iter()
            .map(Cell::new)
            .collect();
        if student.rank == 1 {
            row[0] = Cell::new(student.rank)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold);
        }
        if with_attendance && student.record.attendance.is_none() {
            row[5] = dim_cell("-");
        }
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_details(rows: &[DetailRow], styled: bool) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Attribute"), header_cell("Value")]);
    apply_table_style(&mut table, styled);
    for row in rows {
        let value = if row.value == "Not Provided" {
            dim_cell(&row.value)
        } else {
            Cell::new(&row.value)
        };
        table.add_row(vec![Cell::new(row.attribute).add_attribute(Attribute::Bold), value]);
    }
    println!("{table}");
}

pub fn print_attendance(listing: &AttendanceListing, styled: bool) {
    let mut table = Table::new();
    table.set_header(
        ATTENDANCE_HEADERS
            .into_iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_summary_table_style(&mut table, styled);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for (record, status) in listing.students.iter().zip(&listing.statuses) {
        let color = status.and_then(status_color);
        let cells = attendance_row(record, *status).into_iter().map(|text| {
            let cell = Cell::new(text);
            match color {
                Some(color) => cell.fg(color),
                None => cell,
            }
        });
        let mut row: Vec<Cell> = cells.collect();
        if status.is_none() {
            row[2] = dim_cell("-");
            row[3] = dim_cell("-");
        }
        table.add_row(row);
    }
    println!("{table}");
    print_status_counts(&listing.statuses);
}

fn print_status_counts(statuses: &[Option<AttendanceStatus>]) {
    let count = |wanted: AttendanceStatus| {
        statuses
            .iter()
            .filter(|status| **status == Some(wanted))
            .count()
    };
    println!(
        "Detained: {}  Condonation: {}  Clear: {}  Total: {}",
        count(AttendanceStatus::Detained),
        count(AttendanceStatus::Condonation),
        count(AttendanceStatus::Clear),
        statuses.len()
    );
}

pub fn print_preview(table_data: &CsvTable, rows: usize, styled: bool) {
    let mut table = Table::new();
    table.set_header(
        table_data
            .headers
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table, styled);
    for row in table_data.rows.iter().take(rows) {
        table.add_row(row.iter().map(|value| {
            if value.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(value)
            }
        }));
    }
    println!("{table}");
    println!(
        "Showing {} of {} rows",
        rows.min(table_data.rows.len()),
        table_data.rows.len()
    );
}

fn status_color(status: AttendanceStatus) -> Option<Color> {
    match status {
        AttendanceStatus::Detained => Some(Color::Red),
        AttendanceStatus::Condonation => Some(Color::Blue),
        AttendanceStatus::Clear => None,
    }
}

fn apply_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    apply_styling(table, styled);
}

fn apply_summary_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    apply_styling(table, styled);
}

fn apply_styling(table: &mut Table, styled: bool) {
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
