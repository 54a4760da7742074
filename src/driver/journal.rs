//! Ordered record of every command a simulation applied.

use crate::command::Command;
use crate::robot::{Outcome, Report};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One applied command and what came of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// 1-based position in the command sequence
    pub sequence: usize,
    /// The command that was applied
    pub command: Command,
    /// What the robot made of it
    pub outcome: Outcome,
    /// When it was applied
    pub timestamp: DateTime<Utc>,
}

/// Append-only log of applied commands, in application order.
///
/// # Example
///
/// ```rust
/// use toy_robot::command::Command;
/// use toy_robot::driver::Journal;
/// use toy_robot::robot::{Outcome, Rejection};
///
/// let mut journal = Journal::new();
/// journal.record(Command::Move, Outcome::Rejected(Rejection::NotPlaced));
/// journal.record(Command::Report, Outcome::Accepted);
///
/// assert_eq!(journal.len(), 2);
/// assert_eq!(journal.rejected(), 1);
/// assert_eq!(journal.entries()[1].sequence, 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current time.
    pub fn record(&mut self, command: Command, outcome: Outcome) -> &JournalEntry {
        let sequence = self.entries.len() + 1;
        self.entries.push(JournalEntry {
            sequence,
            command,
            outcome,
            timestamp: Utc::now(),
        });
        &self.entries[sequence - 1]
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that were not rejected.
    pub fn accepted(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome.is_accepted())
            .count()
    }

    pub fn rejected(&self) -> usize {
        self.len() - self.accepted()
    }

    /// Reports emitted so far, in order.
    pub fn reports(&self) -> Vec<Report> {
        self.entries
            .iter()
            .filter_map(|e| match e.outcome {
                Outcome::Reported(report) => Some(report),
                _ => None,
            })
            .collect()
    }

    /// Time between the first and last entry.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
