//! Run driver: feeds a command sequence through the robot.
//!
//! This is the imperative shell around the pure core. It owns the
//! [`Board`] and the [`Robot`], applies commands strictly in order,
//! writes each report the moment it executes, and logs every rejection
//! before moving on to the next command.

mod journal;

pub use journal::{Journal, JournalEntry};

use crate::command::{read_sequence, Command, ParseError};
use crate::core::Board;
use crate::robot::{Outcome, Report, Robot};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that end a run early.
#[derive(Debug, Error)]
pub enum RunError {
    /// Malformed command text; nothing further is executed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// How reports are rendered on the output sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `x,y,FACING` or the not-placed message
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Sink that writes each report as soon as it is emitted.
#[derive(Debug)]
pub struct ReportWriter<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Write one report followed by a line terminator, then flush.
    pub fn emit(&mut self, report: &Report) -> Result<(), RunError> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{report}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, report)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Totals for a finished run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub board: Board,
    pub applied: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// What a `REPORT` would emit after the last command
    pub final_report: Report,
}

/// One board, one robot, one command stream.
///
/// # Example
///
/// ```rust
/// use toy_robot::command::read_sequence;
/// use toy_robot::core::Board;
/// use toy_robot::driver::{OutputFormat, ReportWriter, Simulation};
///
/// let commands = read_sequence(["PLACE 0,0,NORTH", "MOVE", "REPORT"]).unwrap();
/// let mut out = ReportWriter::new(Vec::new(), OutputFormat::Text);
///
/// let mut simulation = Simulation::new(Board::default());
/// simulation.run(commands, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "0,1,NORTH\n");
/// ```
#[derive(Debug)]
pub struct Simulation {
    board: Board,
    robot: Robot,
    journal: Journal,
}

impl Simulation {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            robot: Robot::new(),
            journal: Journal::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Apply a single command, emitting its report if it has one.
    pub fn step<W: Write>(
        &mut self,
        command: Command,
        out: &mut ReportWriter<W>,
    ) -> Result<Outcome, RunError> {
        let outcome = self.robot.apply(&command, &self.board);
        let sequence = self.journal.record(command, outcome).sequence;
        debug!(sequence, %command, ?outcome, "applied command");

        match outcome {
            Outcome::Accepted => {
                if let Command::Place { x, y, facing } = command {
                    info!(x, y, %facing, "robot placed");
                }
            }
            Outcome::Reported(report) => out.emit(&report)?,
            Outcome::Rejected(reason) => {
                warn!(sequence, %command, %reason, "command rejected, skipping");
            }
        }
        Ok(outcome)
    }

    /// Apply every command in order. Rejections never stop the run.
    pub fn run<I, W>(&mut self, commands: I, out: &mut ReportWriter<W>) -> Result<(), RunError>
    where
        I: IntoIterator<Item = Command>,
        W: Write,
    {
        for command in commands {
            self.step(command, out)?;
        }
        Ok(())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            board: self.board,
            applied: self.journal.len(),
            accepted: self.journal.accepted(),
            rejected: self.journal.rejected(),
            final_report: self.robot.report(),
        }
    }
}

/// Parse `lines` in full, then run them on `board`.
///
/// The whole sequence is read before anything executes, so a malformed
/// line anywhere aborts the run without emitting a single report.
pub fn run_lines<L, W>(
    lines: L,
    board: Board,
    out: &mut ReportWriter<W>,
) -> Result<RunSummary, RunError>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
    W: Write,
{
    let commands = read_sequence(lines)?;
    debug!(count = commands.len(), "read command sequence");

    let mut simulation = Simulation::new(board);
    simulation.run(commands, out)?;

    let summary = simulation.summary();
    info!(
        applied = summary.applied,
        accepted = summary.accepted,
        rejected = summary.rejected,
        "run complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Orientation;
    use crate::robot::Rejection;

    fn run_text(lines: &[&str]) -> (Result<RunSummary, RunError>, String) {
        let mut out = ReportWriter::new(Vec::new(), OutputFormat::Text);
        let result = run_lines(lines.iter().copied(), Board::default(), &mut out);
        let text = String::from_utf8(out.into_inner()).unwrap();
        (result, text)
    }

    #[test]
    fn place_move_report() {
        let (result, text) = run_text(&["PLACE 0,0,NORTH", "MOVE", "REPORT"]);
        assert!(result.is_ok());
        assert_eq!(text, "0,1,NORTH\n");
    }

    #[test]
    fn place_left_report() {
        let (_, text) = run_text(&["PLACE 0,0,NORTH", "LEFT", "REPORT"]);
        assert_eq!(text, "0,0,WEST\n");
    }

    #[test]
    fn report_before_placement_is_not_fatal() {
        let (result, text) = run_text(&["MOVE", "REPORT"]);
        let summary = result.unwrap();
        assert_eq!(text, "Robot not placed\n");
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.final_report, Report::NotPlaced);
    }

    #[test]
    fn second_place_is_ignored() {
        let (result, text) = run_text(&["PLACE 1,2,EAST", "PLACE 3,3,NORTH", "REPORT"]);
        assert_eq!(text, "1,2,EAST\n");
        assert_eq!(result.unwrap().rejected, 1);
    }

    #[test]
    fn invalid_line_aborts_before_any_report() {
        let (result, text) = run_text(&["PLACE 0,0,NORTH", "REPORT", "JUMP", "REPORT"]);
        match result {
            Err(RunError::Parse(err)) => {
                assert_eq!(err.line(), "JUMP");
                assert_eq!(err.line_number(), Some(3));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(text.is_empty());
    }

    #[test]
    fn empty_line_ends_the_run() {
        let (result, text) = run_text(&["PLACE 0,0,NORTH", "REPORT", "", "MOVE", "REPORT"]);
        assert_eq!(text, "0,0,NORTH\n");
        assert_eq!(result.unwrap().applied, 2);
    }

    #[test]
    fn multiple_reports_are_emitted_in_order() {
        let (_, text) = run_text(&[
            "REPORT",
            "PLACE 1,2,EAST",
            "MOVE",
            "MOVE",
            "LEFT",
            "MOVE",
            "REPORT",
        ]);
        assert_eq!(text, "Robot not placed\n3,3,NORTH\n");
    }

    #[test]
    fn rejections_are_skipped_and_run_continues() {
        let (result, text) = run_text(&[
            "PLACE 9,9,NORTH",
            "PLACE 0,5,NORTH",
            "MOVE",
            "RIGHT",
            "MOVE",
            "REPORT",
        ]);
        let summary = result.unwrap();
        assert_eq!(text, "1,5,EAST\n");
        assert_eq!(summary.applied, 6);
        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.accepted, 4);
    }

    #[test]
    fn json_format_writes_one_object_per_report() {
        let mut out = ReportWriter::new(Vec::new(), OutputFormat::Json);
        run_lines(["REPORT", "PLACE 2,3,SOUTH", "REPORT"], Board::default(), &mut out).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["status"], "not_placed");
        assert_eq!(lines[1]["x"], 2);
        assert_eq!(lines[1]["facing"], "SOUTH");
    }

    #[test]
    fn simulation_journals_every_step() {
        let mut out = ReportWriter::new(io::sink(), OutputFormat::Text);
        let mut simulation = Simulation::new(Board::default());
        let outcome = simulation.step(Command::Move, &mut out).unwrap();
        assert_eq!(outcome, Outcome::Rejected(Rejection::NotPlaced));

        simulation
            .step(
                Command::Place {
                    x: 4,
                    y: 4,
                    facing: Orientation::East,
                },
                &mut out,
            )
            .unwrap();

        assert_eq!(simulation.journal().len(), 2);
        assert_eq!(simulation.robot().position(), Some((4, 4, Orientation::East)));
        assert_eq!(simulation.summary().accepted, 1);
    }

    #[test]
    fn custom_board_bounds_apply() {
        let board = Board::new(0, 0, 1, 1).unwrap();
        let mut out = ReportWriter::new(Vec::new(), OutputFormat::Text);
        run_lines(["PLACE 1,1,NORTH", "MOVE", "REPORT"], board, &mut out).unwrap();
        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "1,1,NORTH\n");
    }
}
