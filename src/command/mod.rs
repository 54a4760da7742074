//! Typed robot commands and their textual form.
//!
//! Input arrives as one command per line. [`parse`] turns a single line
//! into a [`Command`], [`Commands`] walks a whole source lazily and
//! [`read_sequence`] collects it eagerly. An empty line ends the sequence;
//! anything unrecognised is a fatal [`ParseError`].

mod error;
mod parse;

pub use error::ParseError;
pub use parse::{parse, read_sequence, Commands};

use crate::core::Orientation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single instruction for the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Put the robot on the board at `(x, y)` facing `facing`.
    Place {
        x: i64,
        y: i64,
        facing: Orientation,
    },
    /// Step one cell forward.
    Move,
    /// Quarter turn counter-clockwise.
    TurnLeft,
    /// Quarter turn clockwise.
    TurnRight,
    /// Announce the current position.
    Report,
}

impl Command {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Place { .. } => "PLACE",
            Self::Move => "MOVE",
            Self::TurnLeft => "LEFT",
            Self::TurnRight => "RIGHT",
            Self::Report => "REPORT",
        }
    }
}

/// Renders the canonical line the command parses from.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place { x, y, facing } => write!(f, "PLACE {x},{y},{facing}"),
            other => f.write_str(other.name()),
        }
    }
}
