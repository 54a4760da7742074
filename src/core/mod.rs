//! Pure geometric and enumerated types.
//!
//! This module holds the leaf values the rest of the crate is built on:
//! - `Board`: the inclusive rectangle of legal cells
//! - `Orientation`: the four facings as a cyclic group
//! - `Phase`: whether the robot has been placed
//!
//! Nothing in here performs I/O or logging.

mod board;
mod orientation;
mod state;

pub use board::{Board, BoardBuilder, BoardError, BoundsViolation, DEFAULT_MAX, DEFAULT_MIN};
pub use orientation::{Orientation, UnknownOrientation};
pub use state::Phase;
