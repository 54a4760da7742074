//! Toy robot: a single robot on a rectangular board, driven by text commands.
//!
//! The crate follows a "pure core, imperative shell" layout. The core
//! types and the robot's state machine have no side effects; the driver
//! wraps them with output and logging.
//!
//! # Core Concepts
//!
//! - **Board**: inclusive integer bounds with a single `contains` predicate
//! - **Command**: a closed set of instructions parsed from text lines
//! - **Robot**: a two-phase state machine that accepts or rejects commands
//! - **Driver**: runs a command sequence, emitting reports as they execute
//!
//! # Example
//!
//! ```rust
//! use toy_robot::core::Board;
//! use toy_robot::driver::{run_lines, OutputFormat, ReportWriter};
//!
//! let mut out = ReportWriter::new(Vec::new(), OutputFormat::Text);
//! let summary = run_lines(
//!     ["PLACE 1,2,EAST", "MOVE", "MOVE", "LEFT", "MOVE", "REPORT"],
//!     Board::default(),
//!     &mut out,
//! )
//! .unwrap();
//!
//! assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "3,3,NORTH\n");
//! assert_eq!(summary.rejected, 0);
//! ```

pub mod command;
pub mod core;
pub mod driver;
pub mod robot;

// Re-export commonly used types
pub use command::{parse, read_sequence, Command, ParseError};
pub use crate::core::{Board, Orientation, Phase};
pub use driver::{run_lines, RunError, Simulation};
pub use robot::{Outcome, Rejection, Report, Robot};
