//! End-to-end roster pipeline: load, coerce, score, rank.
//!
//! Every run is a pure function of the input table and the configuration;
//! nothing is cached between runs.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use polars::prelude::DataFrame;
use roster_ingest::{CsvTable, read_csv_path, read_csv_table};
use roster_model::{
    AttendanceFilter, AttendanceStatus, DegenerateInput, RosterConfig, ScoredStudent,
    StudentRecord,
};
use tracing::{info, info_span};

use crate::attendance::{classify_attendance, filter_by_attendance, has_attendance};
use crate::coerce::coerce_roster;
use crate::error::Result;
use crate::lookup::find_student;
use crate::rank::{rank_roster, top_n};
use crate::records::{scored_students, student_records};
use crate::score::score_roster;

/// Runs the roster stages with one configuration.
#[derive(Debug, Clone, Default)]
pub struct RosterPipeline {
    config: RosterConfig,
}

/// Output of a full ranking run.
#[derive(Debug, Clone)]
pub struct RankedRoster {
    pub frame: DataFrame,
    pub degenerate: Vec<DegenerateInput>,
    pub has_attendance: bool,
}

/// A coerced roster classified by attendance.
#[derive(Debug, Clone)]
pub struct AttendanceListing {
    pub students: Vec<StudentRecord>,
    pub statuses: Vec<Option<AttendanceStatus>>,
}

impl RosterPipeline {
    pub fn new(config: RosterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Load and coerce without scoring.
    pub fn prepare(&self, table: &CsvTable) -> Result<DataFrame> {
        let span = info_span!("coerce", columns = table.headers.len());
        let _guard = span.enter();
        let start = Instant::now();
        let frame = table.to_frame()?;
        let coerced = coerce_roster(&frame, &self.config.schema)?;
        info!(
            rows = coerced.height(),
            duration_ms = start.elapsed().as_millis(),
            "coerce complete"
        );
        Ok(coerced)
    }

    /// Coerce, score and rank a parsed table.
    pub fn rank(&self, table: &CsvTable) -> Result<RankedRoster> {
        let coerced = self.prepare(table)?;

        let score_span = info_span!("score", rows = coerced.height());
        let start = Instant::now();
        let outcome = score_span
            .in_scope(|| score_roster(&coerced, &self.config.scoring, &self.config.schema))?;
        info!(
            rows = outcome.frame.height(),
            degenerate = outcome.degenerate.len(),
            upper_bound = self.config.scoring.upper_bound,
            duration_ms = start.elapsed().as_millis(),
            "score complete"
        );

        let rank_span = info_span!("rank", rows = outcome.frame.height());
        let frame = rank_span.in_scope(|| rank_roster(&outcome.frame))?;

        Ok(RankedRoster {
            has_attendance: has_attendance(&frame, &self.config.schema),
            frame,
            degenerate: outcome.degenerate,
        })
    }

    pub fn rank_reader<R: Read>(&self, source: R) -> Result<RankedRoster> {
        let table = read_csv_table(source)?;
        self.rank(&table)
    }

    pub fn rank_path(&self, path: &Path) -> Result<RankedRoster> {
        let table = read_csv_path(path)?;
        self.rank(&table)
    }

    /// Coerced records matching `filter`, in input order, with their categories.
    ///
    /// Fails with `MissingColumn` when the roster has no attendance column.
    pub fn attendance(
        &self,
        table: &CsvTable,
        filter: AttendanceFilter,
    ) -> Result<AttendanceListing> {
        let coerced = self.prepare(table)?;
        let schema = &self.config.schema;
        let thresholds = &self.config.attendance;
        let filtered = filter_by_attendance(&coerced, schema, thresholds, filter)?;
        Ok(AttendanceListing {
            statuses: classify_attendance(&filtered, schema, thresholds)?,
            students: student_records(&filtered, schema)?,
        })
    }

    /// Best `n` students of a ranked roster.
    pub fn top(&self, ranked: &RankedRoster, n: usize) -> Result<Vec<ScoredStudent>> {
        scored_students(&top_n(&ranked.frame, n), &self.config.schema)
    }

    /// All students of a ranked roster, best first.
    pub fn students(&self, ranked: &RankedRoster) -> Result<Vec<ScoredStudent>> {
        scored_students(&ranked.frame, &self.config.schema)
    }

    pub fn lookup(&self, ranked: &RankedRoster, query: &str) -> Result<Option<ScoredStudent>> {
        find_student(&ranked.frame, &self.config.schema, query)
    }
}
