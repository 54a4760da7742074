//! Parse errors for command text.

use thiserror::Error;

/// A line of input that is not a command. Fatal for the whole run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid command '{line}'")]
    InvalidCommand {
        line: String,
        /// 1-based position in the source, when read through [`super::Commands`].
        line_number: Option<usize>,
    },
}

impl ParseError {
    pub(crate) fn invalid(line: &str) -> Self {
        Self::InvalidCommand {
            line: line.to_string(),
            line_number: None,
        }
    }

    pub(crate) fn at_line(self, number: usize) -> Self {
        match self {
            Self::InvalidCommand { line, .. } => Self::InvalidCommand {
                line,
                line_number: Some(number),
            },
        }
    }

    /// The offending text.
    pub fn line(&self) -> &str {
        match self {
            Self::InvalidCommand { line, .. } => line,
        }
    }

    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::InvalidCommand { line_number, .. } => *line_number,
        }
    }
}
