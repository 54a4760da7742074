//! Compass orientation of the robot.
//!
//! The four facings form a cyclic group of order four. The variant order
//! below is the single canonical label/ordinal mapping: parsing, rotation
//! and reporting all go through it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four compass directions, ordered clockwise from north.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::Orientation;
///
/// let facing = Orientation::North;
/// assert_eq!(facing.right(), Orientation::East);
/// assert_eq!(facing.left(), Orientation::West);
/// assert_eq!(facing.rotate(4), facing);
/// assert_eq!("SOUTH".parse::<Orientation>(), Ok(Orientation::South));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

/// Returned when a label does not name an orientation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown orientation '{0}'")]
pub struct UnknownOrientation(pub String);

impl Orientation {
    /// All orientations in clockwise order, indexed by ordinal.
    pub const ALL: [Orientation; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Canonical uppercase label used in commands and reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }

    /// Position in the clockwise cycle, `0..4`.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Orientation for any integer ordinal, taken modulo four.
    pub fn from_ordinal(ordinal: i64) -> Self {
        Self::ALL[ordinal.rem_euclid(4) as usize]
    }

    /// Rotate by a signed number of quarter turns. Positive is clockwise.
    pub fn rotate(self, step: i64) -> Self {
        Self::from_ordinal(self.ordinal() as i64 + step.rem_euclid(4))
    }

    /// One quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        self.rotate(-1)
    }

    /// One quarter turn clockwise.
    pub fn right(self) -> Self {
        self.rotate(1)
    }

    /// Unit `(dx, dy)` step taken when moving forward.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

impl FromStr for Orientation {
    type Err = UnknownOrientation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.label() == s)
            .ok_or_else(|| UnknownOrientation(s.to_string()))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
