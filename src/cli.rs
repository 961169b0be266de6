//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::report_file_adapter::ReportFileAdapter;
use crate::adapters::statement_file_adapter::StatementFileAdapter;
use crate::domain::error::ReconError;
use crate::domain::ledger::CASH_SYMBOL;
use crate::domain::reconcile::reconcile;
use crate::domain::statement::ReconStatement;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use crate::ports::statement_port::StatementPort;

pub const DEFAULT_INPUT: &str = "recon.in";
pub const DEFAULT_OUTPUT: &str = "recon.out";

#[derive(Parser, Debug)]
#[command(name = "posrecon", about = "End-of-day position reconciliation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reconcile projected positions against the reported snapshot
    Reconcile {
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the diff to stdout instead of writing the report file
        #[arg(long)]
        stdout: bool,
    },
    /// Print the projected end-of-day positions without diffing
    Project {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Check that a statement file parses cleanly
    Validate {
        #[arg(short, long)]
        input: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Reconcile {
            input,
            output,
            config,
            stdout,
        } => run_reconcile(input, output, config.as_ref(), stdout),
        Command::Project { input } => run_project(&input),
        Command::Validate { input } => run_validate(&input),
    }
}

fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = ReconError::Io(e);
        eprintln!("error: failed to read config {}: {err}", path.display());
        ExitCode::from(&err)
    })
}

/// Path resolution order: CLI flag, then config key, then built-in default.
pub fn resolve_paths(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<&dyn ConfigPort>,
) -> (PathBuf, PathBuf) {
    let input = input
        .or_else(|| {
            config
                .and_then(|c| c.get_string("reconcile", "input"))
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output = output
        .or_else(|| {
            config
                .and_then(|c| c.get_string("reconcile", "output"))
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    (input, output)
}

fn load_statement(path: &PathBuf) -> Result<ReconStatement, ExitCode> {
    eprintln!("Loading statement from {}", path.display());
    StatementFileAdapter::new(path.clone()).load().map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

pub fn run_reconcile(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config_path: Option<&PathBuf>,
    stdout: bool,
) -> ExitCode {
    let adapter = match config_path {
        Some(path) => match load_config(path) {
            Ok(a) => Some(a),
            Err(code) => return code,
        },
        None => None,
    };
    let config = adapter.as_ref().map(|a| a as &dyn ConfigPort);

    let (input, output) = resolve_paths(input, output, config);
    let to_stdout = stdout
        || config
            .map(|c| c.get_bool("report", "stdout", false))
            .unwrap_or(false);

    let statement = match load_statement(&input) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let projected = match statement.project() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(&e);
        }
    };

    let diff = reconcile(&projected, &statement.reported);
    if diff.is_empty() {
        eprintln!("Positions reconcile cleanly");
    } else {
        eprintln!("{} symbol(s) with breaks", diff.len());
    }

    if to_stdout {
        print!("{}", ReportFileAdapter::format(&diff));
        return ExitCode::SUCCESS;
    }

    match ReportFileAdapter::new(output.clone()).write(&diff) {
        Ok(()) => {
            eprintln!("Report written to: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(&e)
        }
    }
}

pub fn run_project(input: &PathBuf) -> ExitCode {
    let statement = match load_statement(input) {
        Ok(s) => s,
        Err(code) => return code,
    };

    match statement.project() {
        Ok(projected) => {
            print!("{}", ReportFileAdapter::format(&projected));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(&e)
        }
    }
}

pub fn run_validate(input: &PathBuf) -> ExitCode {
    eprintln!("Validating statement: {}", input.display());
    let statement = match StatementFileAdapter::new(input.clone()).load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(&e);
        }
    };

    eprintln!("  {} opening positions", statement.opening.len());
    eprintln!("  {} transactions", statement.transactions.len());
    eprintln!("  {} reported positions", statement.reported.len());

    if !statement.transactions.is_empty() && !statement.opening.contains(CASH_SYMBOL) {
        eprintln!("warning: opening positions have no {CASH_SYMBOL} entry");
    }

    eprintln!("Statement file is valid.");
    ExitCode::SUCCESS
}
