//! All kinds of errors in this crate.

use crate::cells::{Coord, State};
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Rule number {0} is out of range.
    InvalidRuleNumber(u32),
    /// Invalid rule: {0:?}.
    ParseRuleError(String),
    /// Bit width should be positive.
    NonPositiveBits,
    /// Width / height / history length / interval should be positive.
    NonPositiveError,
    /// The row is empty.
    EmptyRow,
    /// The grid is empty.
    EmptyGrid,
    /// Row {row} has {len} cells, expected {expected}.
    NonRectangular {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// The length of the first row.
        expected: usize,
    },
    /// Cell at {0:?} has invalid state: {1:?}.
    InvalidCell(Coord, State),
    /// The history is empty.
    EmptyHistory,
    /// Cell at {0:?} is out of bounds.
    OutOfBounds(Coord),
    /// Neighborhood pattern {0} has no entry in the rule table.
    PatternOutOfRange(usize),
}

/// The two classes of [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input. The caller can recover, and no state has been changed.
    InvalidArgument,
    /// Broken internal invariant. Unreachable with validated input.
    InvalidState,
}

impl Error {
    /// Which class the error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::PatternOutOfRange(_) => ErrorKind::InvalidState,
            _ => ErrorKind::InvalidArgument,
        }
    }
}
