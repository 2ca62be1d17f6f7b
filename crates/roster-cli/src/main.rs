//! Roster CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_core::RosterPipeline;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    Output, resolve_config, run_attendance, run_config, run_lookup, run_preview, run_rank,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let output = Output {
        format: cli.format,
        styled: use_color(cli.color.color, io::stdout().is_terminal()),
    };
    let exit_code = match run(&cli, output) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli, output: Output) -> anyhow::Result<i32> {
    let config = resolve_config(cli)?;
    if matches!(cli.command, Command::Config) {
        run_config(&config, output)?;
        return Ok(0);
    }
    let pipeline = RosterPipeline::new(config);
    match &cli.command {
        Command::Rank(args) => run_rank(&pipeline, args, output)?,
        Command::Lookup(args) => {
            if !run_lookup(&pipeline, args, output)? {
                eprintln!("Student not found");
                return Ok(1);
            }
        }
        Command::Attendance(args) => run_attendance(&pipeline, args, output)?,
        Command::Preview(args) => run_preview(args, output)?,
        Command::Config => {}
    }
    Ok(0)
}

fn use_color(choice: ColorChoice, is_terminal: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => is_terminal,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = use_color(
        cli.color.color,
        cli.log_file.is_none() && io::stderr().is_terminal(),
    );
    config
}
