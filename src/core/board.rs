//! The rectangular board the robot moves on.
//!
//! A board is an immutable set of inclusive integer bounds. Every boundary
//! check in the crate goes through [`Board::contains`].

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Default lower bound on both axes.
pub const DEFAULT_MIN: i64 = 0;
/// Default upper bound on both axes.
pub const DEFAULT_MAX: i64 = 5;

/// A single inconsistency in a pair of bounds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoundsViolation {
    #[error("x_min ({min}) is greater than x_max ({max})")]
    XRange { min: i64, max: i64 },

    #[error("y_min ({min}) is greater than y_max ({max})")]
    YRange { min: i64, max: i64 },
}

/// Board construction failed. Carries every violation found, not just the first.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid board bounds: {}", render(.violations))]
pub struct BoardError {
    pub violations: Vec<BoundsViolation>,
}

fn render(violations: &[BoundsViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Inclusive rectangular bounds on the integer grid.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::Board;
///
/// let board = Board::new(0, 0, 5, 5).unwrap();
/// assert!(board.contains(0, 0));
/// assert!(board.contains(5, 5));
/// assert!(!board.contains(-1, 3));
/// assert!(!board.contains(3, 6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    x_min: i64,
    y_min: i64,
    x_max: i64,
    y_max: i64,
}

impl Board {
    /// Create a board, rejecting inverted ranges on either axis.
    pub fn new(x_min: i64, y_min: i64, x_max: i64, y_max: i64) -> Result<Self, BoardError> {
        let checks = vec![
            check_range(x_min, x_max, |min, max| BoundsViolation::XRange { min, max }),
            check_range(y_min, y_max, |min, max| BoundsViolation::YRange { min, max }),
        ];

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(Self {
                x_min,
                y_min,
                x_max,
                y_max,
            }),
            Validation::Failure(errors) => Err(BoardError {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }

    /// Start a builder seeded with the default square.
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// True iff `(x, y)` lies within the inclusive bounds on both axes.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }

    pub fn x_min(&self) -> i64 {
        self.x_min
    }

    pub fn y_min(&self) -> i64 {
        self.y_min
    }

    pub fn x_max(&self) -> i64 {
        self.x_max
    }

    pub fn y_max(&self) -> i64 {
        self.y_max
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            x_min: DEFAULT_MIN,
            y_min: DEFAULT_MIN,
            x_max: DEFAULT_MAX,
            y_max: DEFAULT_MAX,
        }
    }
}

fn check_range(
    min: i64,
    max: i64,
    violation: impl FnOnce(i64, i64) -> BoundsViolation,
) -> Validation<(), NonEmptyVec<BoundsViolation>> {
    if min <= max {
        Validation::success(())
    } else {
        Validation::fail(violation(min, max))
    }
}

/// Fluent builder for [`Board`].
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    x: (i64, i64),
    y: (i64, i64),
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            x: (DEFAULT_MIN, DEFAULT_MAX),
            y: (DEFAULT_MIN, DEFAULT_MAX),
        }
    }

    /// Set the inclusive x range
    pub fn x_range(mut self, min: i64, max: i64) -> Self {
        self.x = (min, max);
        self
    }

    /// Set the inclusive y range
    pub fn y_range(mut self, min: i64, max: i64) -> Self {
        self.y = (min, max);
        self
    }

    /// Build the board, validating both ranges
    pub fn build(self) -> Result<Board, BoardError> {
        Board::new(self.x.0, self.y.0, self.x.1, self.y.1)
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_matches_inclusive_bounds() {
        let board = Board::new(0, 0, 5, 5).unwrap();
        let cases = [
            ((0, 0), true),
            ((5, 5), true),
            ((-1, -1), false),
            ((6, 6), false),
            ((1, 6), false),
            ((3, 5), true),
        ];
        for ((x, y), expected) in cases {
            assert_eq!(board.contains(x, y), expected, "({x}, {y})");
        }
    }

    #[test]
    fn contains_checks_each_edge_independently() {
        let board = Board::new(-2, 1, 3, 4).unwrap();
        assert!(!board.contains(-3, 2));
        assert!(!board.contains(4, 2));
        assert!(!board.contains(0, 0));
        assert!(!board.contains(0, 5));
        assert!(board.contains(-2, 1));
        assert!(board.contains(3, 4));
    }

    #[test]
    fn contains_handles_extreme_values() {
        let board = Board::default();
        assert!(!board.contains(i64::MIN, i64::MAX));
        assert!(!board.contains(i64::MAX, 0));
    }

    #[test]
    fn default_is_zero_to_five_square() {
        let board = Board::default();
        assert_eq!(board, Board::new(0, 0, 5, 5).unwrap());
        assert_eq!(Board::builder().build().unwrap(), board);
    }

    #[test]
    fn single_cell_board_is_allowed() {
        let board = Board::new(2, 2, 2, 2).unwrap();
        assert!(board.contains(2, 2));
        assert!(!board.contains(2, 3));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = Board::new(5, 0, 0, 5).unwrap_err();
        assert_eq!(
            err.violations,
            vec![BoundsViolation::XRange { min: 5, max: 0 }]
        );
    }

    #[test]
    fn both_inverted_ranges_are_reported() {
        let err = Board::builder()
            .x_range(3, 1)
            .y_range(9, -9)
            .build()
            .unwrap_err();

        assert_eq!(err.violations.len(), 2);
        assert!(err
            .violations
            .contains(&BoundsViolation::YRange { min: 9, max: -9 }));
        let message = err.to_string();
        assert!(message.contains("x_min (3)"));
        assert!(message.contains("y_min (9)"));
    }

    #[test]
    fn builder_sets_ranges() {
        let board = Board::builder().x_range(-1, 1).y_range(0, 10).build().unwrap();
        assert_eq!(board.x_min(), -1);
        assert_eq!(board.x_max(), 1);
        assert_eq!(board.y_min(), 0);
        assert_eq!(board.y_max(), 10);
    }
}
