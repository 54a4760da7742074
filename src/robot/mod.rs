//! The robot state machine.
//!
//! A [`Robot`] consumes one [`Command`] at a time against a borrowed
//! [`Board`]. Every command yields an [`Outcome`]; illegal commands are
//! rejected with a [`Rejection`] and leave the robot exactly as it was.
//!
//! | Phase    | Command        | Guard              | Outcome                   |
//! |----------|----------------|--------------------|---------------------------|
//! | Unplaced | Place          | target on board    | Accepted, becomes Placed  |
//! | Unplaced | Place          | target off board   | Rejected(BadPlacement)    |
//! | Placed   | Place          |                    | Rejected(AlreadyPlaced)   |
//! | Unplaced | Move/Left/Right|                    | Rejected(NotPlaced)       |
//! | Unplaced | Report         |                    | Reported(NotPlaced)       |
//! | Placed   | Left/Right     |                    | Accepted                  |
//! | Placed   | Move           | next cell on board | Accepted                  |
//! | Placed   | Move           | next cell off board| Rejected(IllegalMove)     |
//! | Placed   | Report         |                    | Reported(At)              |

mod report;

pub use report::{Report, NOT_PLACED_MESSAGE};

use crate::command::Command;
use crate::core::{Board, Orientation, Phase};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a command was ignored. Always recoverable.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[error("robot has already been placed")]
    AlreadyPlaced,

    #[error("robot can't be placed at ({x}, {y}): out of bounds")]
    BadPlacement { x: i64, y: i64 },

    #[error("robot has not been placed")]
    NotPlaced,

    #[error("robot can't move {facing} from ({x}, {y}): would leave the board")]
    IllegalMove { x: i64, y: i64, facing: Orientation },
}

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The command was executed.
    Accepted,
    /// A report was executed; carries what must be emitted.
    Reported(Report),
    /// The command was skipped with state unchanged.
    Rejected(Rejection),
}

impl Outcome {
    /// Anything other than a rejection.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Position and facing of a placed robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Pose {
    x: i64,
    y: i64,
    facing: Orientation,
}

/// The robot. Starts unplaced.
///
/// # Example
///
/// ```rust
/// use toy_robot::command::Command;
/// use toy_robot::core::{Board, Orientation};
/// use toy_robot::robot::{Outcome, Rejection, Report, Robot};
///
/// let board = Board::default();
/// let mut robot = Robot::new();
///
/// assert_eq!(
///     robot.apply(&Command::Move, &board),
///     Outcome::Rejected(Rejection::NotPlaced)
/// );
///
/// let place = Command::Place { x: 0, y: 0, facing: Orientation::North };
/// assert_eq!(robot.apply(&place, &board), Outcome::Accepted);
/// assert_eq!(robot.apply(&Command::Move, &board), Outcome::Accepted);
/// assert_eq!(
///     robot.apply(&Command::Report, &board),
///     Outcome::Reported(Report::At { x: 0, y: 1, facing: Orientation::North })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pose: Option<Pose>,
}

impl Robot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.pose.is_some() {
            Phase::Placed
        } else {
            Phase::Unplaced
        }
    }

    pub fn is_placed(&self) -> bool {
        self.phase().is_placed()
    }

    /// `(x, y, facing)` once placed.
    pub fn position(&self) -> Option<(i64, i64, Orientation)> {
        self.pose.map(|p| (p.x, p.y, p.facing))
    }

    /// What a `REPORT` would emit right now.
    pub fn report(&self) -> Report {
        match self.pose {
            Some(Pose { x, y, facing }) => Report::At { x, y, facing },
            None => Report::NotPlaced,
        }
    }

    /// Apply one command against `board`.
    ///
    /// State is only written on the accepting paths; a rejected command
    /// leaves the robot untouched.
    pub fn apply(&mut self, command: &Command, board: &Board) -> Outcome {
        match (self.pose, *command) {
            (None, Command::Place { x, y, facing }) => {
                if !board.contains(x, y) {
                    return Outcome::Rejected(Rejection::BadPlacement { x, y });
                }
                self.pose = Some(Pose { x, y, facing });
                Outcome::Accepted
            }
            (Some(_), Command::Place { .. }) => Outcome::Rejected(Rejection::AlreadyPlaced),
            (None, Command::Move | Command::TurnLeft | Command::TurnRight) => {
                Outcome::Rejected(Rejection::NotPlaced)
            }
            (_, Command::Report) => Outcome::Reported(self.report()),
            (Some(pose), Command::TurnLeft) => {
                self.pose = Some(Pose {
                    facing: pose.facing.left(),
                    ..pose
                });
                Outcome::Accepted
            }
            (Some(pose), Command::TurnRight) => {
                self.pose = Some(Pose {
                    facing: pose.facing.right(),
                    ..pose
                });
                Outcome::Accepted
            }
            (Some(pose), Command::Move) => match next_cell(&pose) {
                Some((x, y)) if board.contains(x, y) => {
                    self.pose = Some(Pose { x, y, ..pose });
                    Outcome::Accepted
                }
                _ => Outcome::Rejected(Rejection::IllegalMove {
                    x: pose.x,
                    y: pose.y,
                    facing: pose.facing,
                }),
            },
        }
    }
}

/// Cell one step ahead, or `None` if the coordinate would overflow.
fn next_cell(pose: &Pose) -> Option<(i64, i64)> {
    let (dx, dy) = pose.facing.delta();
    Some((pose.x.checked_add(dx)?, pose.y.checked_add(dy)?))
}
