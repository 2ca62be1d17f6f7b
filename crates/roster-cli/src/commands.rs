use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use roster_cli::logging::redact_value;
use roster_cli::render::{
    attendance_entries, write_attendance_csv, write_details_csv, write_json, write_preview_csv,
    write_ranking_csv,
};
use roster_core::{RankedRoster, RosterPipeline, student_details};
use roster_ingest::{CsvTable, read_csv_path};
use roster_model::{AttendanceFilter, RosterConfig, load_config};

use crate::cli::{AttendanceArgs, Cli, LookupArgs, OutputFormatArg, PreviewArgs, RankArgs};
use crate::summary::{print_attendance, print_details, print_preview, print_ranking};

/// Where and how command results are written.
#[derive(Clone, Copy)]
pub struct Output {
    pub format: OutputFormatArg,
    /// Apply colors to terminal tables.
    pub styled: bool,
}

/// Configuration file (or defaults) with command-line overrides applied.
pub fn resolve_config(cli: &Cli) -> Result<RosterConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path).context("load configuration")?,
        None => RosterConfig::default(),
    };
    if let Some(band) = cli.band {
        config.scoring = config.scoring.with_variant(band.into());
        config
            .validate()
            .context("apply --band to the configuration")?;
    }
    debug!(
        lower_bound = config.scoring.lower_bound,
        upper_bound = config.scoring.upper_bound,
        "configuration resolved"
    );
    Ok(config)
}

fn load_table(path: &Path) -> Result<CsvTable> {
    let span = info_span!("load", file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table = read_csv_path(path).with_context(|| format!("load {}", path.display()))?;
    info!(
        rows = table.rows.len(),
        columns = table.headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(table)
}

fn rank_table(pipeline: &RosterPipeline, path: &Path) -> Result<RankedRoster> {
    let table = load_table(path)?;
    let ranked = pipeline
        .rank(&table)
        .with_context(|| format!("rank {}", path.display()))?;
    Ok(ranked)
}

pub fn run_rank(pipeline: &RosterPipeline, args: &RankArgs, output: Output) -> Result<()> {
    let display = &pipeline.config().display;
    let top = args.top.unwrap_or(display.default_top);
    if !display.top_choices.contains(&top) {
        bail!(
            "--top must be one of {:?} (got {top})",
            display.top_choices
        );
    }
    let ranked = rank_table(pipeline, &args.csv)?;
    let students = pipeline.top(&ranked, top)?;
    info!(shown = students.len(), total = ranked.frame.height(), "ranking ready");
    match output.format {
        OutputFormatArg::Table => print_ranking(&students, ranked.has_attendance, output.styled),
        OutputFormatArg::Json => write_json(io::stdout().lock(), &students)?,
        OutputFormatArg::Csv => {
            write_ranking_csv(io::stdout().lock(), &students, ranked.has_attendance)?;
        }
    }
    Ok(())
}

/// Returns whether the student was found.
pub fn run_lookup(pipeline: &RosterPipeline, args: &LookupArgs, output: Output) -> Result<bool> {
    let ranked = rank_table(pipeline, &args.csv)?;
    let student = pipeline.lookup(&ranked, &args.student_id)?;
    info!(
        student_id = redact_value(&args.student_id),
        found = student.is_some(),
        "lookup complete"
    );
    let Some(student) = student else {
        return Ok(false);
    };
    match output.format {
        OutputFormatArg::Table => {
            print_details(
                &student_details(&student, ranked.has_attendance),
                output.styled,
            );
        }
        OutputFormatArg::Json => write_json(io::stdout().lock(), &student)?,
        OutputFormatArg::Csv => write_details_csv(
            io::stdout().lock(),
            &student_details(&student, ranked.has_attendance),
        )?,
    }
    Ok(true)
}

pub fn run_attendance(
    pipeline: &RosterPipeline,
    args: &AttendanceArgs,
    output: Output,
) -> Result<()> {
    let table = load_table(&args.csv)?;
    let filter: AttendanceFilter = args.filter.into();
    let listing = pipeline
        .attendance(&table, filter)
        .with_context(|| format!("classify attendance in {}", args.csv.display()))?;
    info!(filter = %filter, matched = listing.students.len(), "attendance ready");
    match output.format {
        OutputFormatArg::Table => print_attendance(&listing, output.styled),
        OutputFormatArg::Json => write_json(io::stdout().lock(), &attendance_entries(&listing))?,
        OutputFormatArg::Csv => write_attendance_csv(io::stdout().lock(), &listing)?,
    }
    Ok(())
}

pub fn run_preview(args: &PreviewArgs, output: Output) -> Result<()> {
    let table = load_table(&args.csv)?;
    match output.format {
        OutputFormatArg::Table => print_preview(&table, args.rows, output.styled),
        OutputFormatArg::Json => {
            let rows: Vec<_> = table
                .rows
                .iter()
                .take(args.rows)
                .map(|row| {
                    table
                        .headers
                        .iter()
                        .zip(row)
                        .map(|(header, value)| {
                            (header.clone(), serde_json::Value::String(value.clone()))
                        })
                        .collect::<serde_json::Map<_, _>>()
                })
                .collect();
            write_json(io::stdout().lock(), &rows)?;
        }
        OutputFormatArg::Csv => write_preview_csv(io::stdout().lock(), &table, args.rows)?,
    }
    Ok(())
}

pub fn run_config(config: &RosterConfig, output: Output) -> Result<()> {
    match output.format {
        OutputFormatArg::Json => write_json(io::stdout().lock(), config)?,
        OutputFormatArg::Table | OutputFormatArg::Csv => {
            print!("{}", config.to_toml_string()?);
        }
    }
    Ok(())
}
