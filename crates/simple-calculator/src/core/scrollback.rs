//! Scrollback: the append-only log of applied operators
//!
//! One [`EquationLine`] is recorded per non-equals operator application.

use serde::{Serialize, Serializer};
use std::collections::VecDeque;
use std::fmt;

use crate::core::{Number, Operation};

/// One completed operator application: `lhs op operand = result`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquationLine {
    /// Running total before the operator
    pub lhs: Number,
    /// The operation applied
    pub operation: Operation,
    /// Operand exactly as it was typed
    pub operand: String,
    /// Running total after the operator
    pub result: Number,
}

impl EquationLine {
    /// Creates a new equation line
    #[must_use]
    pub fn new(lhs: Number, operation: Operation, operand: impl Into<String>, result: Number) -> Self {
        Self {
            lhs,
            operation,
            operand: operand.into(),
            result,
        }
    }

    /// Returns the formatted line, e.g. `0 + 5 = 5`
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EquationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs,
            self.operation.symbol(),
            self.operand,
            self.result
        )
    }
}

/// Bounded scrollback log.
///
/// The oldest lines are dropped once the capacity is reached. Serializes as
/// a JSON array of lines, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Scrollback {
    lines: VecDeque<EquationLine>,
    capacity: usize,
}

impl Default for Scrollback {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrollback {
    /// Default maximum number of lines
    pub const DEFAULT_CAPACITY: usize = 1000;

    /// Creates a scrollback with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a scrollback holding at most `capacity` lines (minimum 1)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Appends a line, evicting the oldest when full
    pub fn push(&mut self, line: EquationLine) {
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Returns the number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no lines have been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the maximum number of lines kept
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes every line
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &EquationLine> {
        self.lines.iter()
    }

    /// Returns the most recent line
    #[must_use]
    pub fn last(&self) -> Option<&EquationLine> {
        self.lines.back()
    }

    /// Returns the last `n` lines, oldest first
    #[must_use]
    pub fn tail(&self, n: usize) -> Vec<&EquationLine> {
        let skip = self.lines.len().saturating_sub(n);
        self.lines.iter().skip(skip).collect()
    }

    /// Exports the lines as newline-separated text
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.lines
            .iter()
            .map(EquationLine::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Serialize for Scrollback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.lines)
    }
}
