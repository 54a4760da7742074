//! Line parser and command streams.

use super::{Command, ParseError};
use std::iter::FusedIterator;
use tracing::{debug, error};

const PLACE_PREFIX: &str = "PLACE ";

/// Parse one line, given without its line terminator.
///
/// Returns `Ok(None)` for an empty line, which marks the end of the
/// command sequence. Matching is exact and case-sensitive: no surrounding
/// or embedded whitespace is tolerated beyond the single space after `PLACE`.
///
/// # Example
///
/// ```rust
/// use toy_robot::command::{parse, Command};
/// use toy_robot::core::Orientation;
///
/// assert_eq!(parse("MOVE"), Ok(Some(Command::Move)));
/// assert_eq!(
///     parse("PLACE 1,2,EAST"),
///     Ok(Some(Command::Place { x: 1, y: 2, facing: Orientation::East }))
/// );
/// assert_eq!(parse(""), Ok(None));
/// assert!(parse("PLACE 1, 2,EAST").is_err());
/// ```
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let command = match line {
        "" => {
            debug!("end of command sequence");
            return Ok(None);
        }
        "MOVE" => Command::Move,
        "LEFT" => Command::TurnLeft,
        "RIGHT" => Command::TurnRight,
        "REPORT" => Command::Report,
        _ => parse_place(line).ok_or_else(|| {
            error!(line, "could not convert line into a command");
            ParseError::invalid(line)
        })?,
    };
    Ok(Some(command))
}

fn parse_place(line: &str) -> Option<Command> {
    let mut fields = line.strip_prefix(PLACE_PREFIX)?.split(',');
    let x = parse_coordinate(fields.next()?)?;
    let y = parse_coordinate(fields.next()?)?;
    let facing = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Command::Place { x, y, facing })
}

/// Unsigned decimal digits only; values beyond `i64` are rejected.
fn parse_coordinate(field: &str) -> Option<i64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Lazy command stream over a source of lines.
///
/// Yields commands until the first empty line or the end of the source.
/// After an error is yielded the stream is exhausted and no further lines
/// are pulled from the source.
#[derive(Debug)]
pub struct Commands<I> {
    lines: I,
    line_number: usize,
    done: bool,
}

impl<I: Iterator> Commands<I> {
    pub fn new<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            line_number: 0,
            done: false,
        }
    }
}

impl<I> Iterator for Commands<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<Command, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(line) = self.lines.next() else {
            self.done = true;
            return None;
        };
        self.line_number += 1;

        match parse(line.as_ref()) {
            Ok(Some(command)) => Some(Ok(command)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err.at_line(self.line_number)))
            }
        }
    }
}

impl<I> FusedIterator for Commands<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}

/// Eagerly read every command up to the end-of-sequence marker.
pub fn read_sequence<L>(lines: L) -> Result<Vec<Command>, ParseError>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    Commands::new(lines).collect()
}
