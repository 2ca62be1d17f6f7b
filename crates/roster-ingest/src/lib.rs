//! Roster ingestion: parse CSV rosters into tables.

pub mod csv_table;
pub mod error;

pub use csv_table::{CsvTable, read_csv_path, read_csv_table};
pub use error::IngestError;
