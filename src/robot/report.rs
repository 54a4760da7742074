//! What a `REPORT` command emits.

use crate::core::Orientation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed text reported by an unplaced robot.
pub const NOT_PLACED_MESSAGE: &str = "Robot not placed";

/// Content of one report.
///
/// Displays as `x,y,FACING` for a placed robot and as
/// [`NOT_PLACED_MESSAGE`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    At {
        x: i64,
        y: i64,
        facing: Orientation,
    },
    NotPlaced,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At { x, y, facing } => write!(f, "{x},{y},{facing}"),
            Self::NotPlaced => f.write_str(NOT_PLACED_MESSAGE),
        }
    }
}
