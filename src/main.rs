//! toy-robot - run a command file against a robot on a board.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use toy_robot::core::{Board, DEFAULT_MAX, DEFAULT_MIN};
use toy_robot::driver::{run_lines, OutputFormat, ReportWriter, RunError};
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Diagnostic printed when the command file contains a malformed line.
const ABORT_MESSAGE: &str = "invalid command encountered, aborting";

/// Simulate a toy robot on a rectangular board
#[derive(Parser, Debug)]
#[command(name = "toy-robot")]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// File with one command per line (`-` reads stdin)
    input: PathBuf,

    /// Smallest legal x coordinate
    #[arg(long, default_value_t = DEFAULT_MIN)]
    x_min: i64,

    /// Largest legal x coordinate
    #[arg(long, default_value_t = DEFAULT_MAX)]
    x_max: i64,

    /// Smallest legal y coordinate
    #[arg(long, default_value_t = DEFAULT_MIN)]
    y_min: i64,

    /// Largest legal y coordinate
    #[arg(long, default_value_t = DEFAULT_MAX)]
    y_max: i64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit reports as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(RunError::Parse(parse_err)) = err.downcast_ref::<RunError>() {
                error!(line = parse_err.line(), line_number = ?parse_err.line_number(), "aborting run");
                eprintln!("{ABORT_MESSAGE}");
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let board = Board::builder()
        .x_range(cli.x_min, cli.x_max)
        .y_range(cli.y_min, cli.y_max)
        .build()
        .context("invalid board configuration")?;

    let source = read_source(&cli.input)?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut out = ReportWriter::new(io::stdout().lock(), format);

    run_lines(source.lines().map(str::trim_end), board, &mut out)?;
    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read commands from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path)
        .with_context(|| format!("failed to read command file {}", path.display()))
}
