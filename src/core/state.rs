//! Lifecycle phase of the robot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the robot has been put on the board yet.
///
/// The only legal transition is `Unplaced -> Placed`; a placed robot
/// never becomes unplaced again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Unplaced,
    Placed,
}

impl Phase {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unplaced => "Unplaced",
            Self::Placed => "Placed",
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
