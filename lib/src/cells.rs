//! Cells, rows and grids.

use crate::error::Error;
use std::{fmt::Debug, ops::Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a cell.
///
/// Only [`DEAD`] and [`ALIVE`] are valid. Other values can be constructed,
/// but every transition rejects them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State(pub u8);

/// The Dead state.
pub const DEAD: State = State(0);
/// The Alive state.
pub const ALIVE: State = State(1);

impl State {
    /// Whether the state is [`DEAD`] or [`ALIVE`].
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 <= 1
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            ALIVE => DEAD,
            _ => ALIVE,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            ALIVE
        } else {
            DEAD
        }
    }
}

/// The coordinates of a cell.
///
/// `(x, y)`, both 0-indexed, where `x` is the column.
///
/// For elementary automata, `y` is the index of a row in the history,
/// `0` being the earliest retained one.
pub type Coord = (usize, usize);

/// One generation of an elementary automaton.
pub type Row = Vec<State>;

/// One generation of a two-dimensional automaton, as a list of rows.
pub type Grid = Vec<Row>;

/// Moves `offset` steps from `index` on a ring of length `len`.
///
/// `len` must be positive.
#[inline]
pub(crate) fn wrap(index: usize, offset: isize, len: usize) -> usize {
    (index as isize + offset).rem_euclid(len as isize) as usize
}

/// Checks that a row is non-empty and only contains valid states.
///
/// `y` is only used to report the position of an invalid cell.
pub(crate) fn validate_row(row: &[State], y: usize) -> Result<(), Error> {
    if row.is_empty() {
        return Err(Error::EmptyRow);
    }
    match row.iter().position(|state| !state.is_valid()) {
        Some(x) => Err(Error::InvalidCell((x, y), row[x])),
        None => Ok(()),
    }
}

/// Checks that a grid is non-empty, rectangular, and only contains valid states.
pub(crate) fn validate_grid(grid: &[Row]) -> Result<(), Error> {
    let first = grid.first().ok_or(Error::EmptyGrid)?;
    let expected = first.len();
    for (y, row) in grid.iter().enumerate() {
        if row.len() != expected {
            return Err(Error::NonRectangular {
                row: y,
                len: row.len(),
                expected,
            });
        }
        validate_row(row, y)?;
    }
    Ok(())
}

/// A single generation: a [`Row`] or a [`Grid`].
pub trait Generation: Clone + Debug {
    /// The position of a cell inside the generation.
    type Pos: Copy + Debug;

    /// Checks the structure and the states of the generation.
    fn validate(&self) -> Result<(), Error>;

    /// Maps displayed coordinates to a position.
    ///
    /// A row is displayed as the line `y = 0`; any other `y` is rejected.
    fn locate(coord: Coord) -> Option<Self::Pos>;

    /// Gets the state of a cell. Returns `None` if there is no such cell.
    fn cell(&self, pos: Self::Pos) -> Option<State>;

    /// Flips a cell.
    ///
    /// Returns `false` and changes nothing if the position is out of bounds.
    fn toggle(&mut self, pos: Self::Pos) -> bool;

    /// Number of living cells.
    fn population(&self) -> usize;

    /// The generation as displayed lines.
    fn rows(&self) -> Vec<&[State]>;
}

impl Generation for Row {
    type Pos = usize;

    fn validate(&self) -> Result<(), Error> {
        validate_row(self, 0)
    }

    fn locate((x, y): Coord) -> Option<usize> {
        (y == 0).then(|| x)
    }

    fn cell(&self, pos: usize) -> Option<State> {
        self.as_slice().get(pos).copied()
    }

    fn toggle(&mut self, pos: usize) -> bool {
        match self.get_mut(pos) {
            Some(state) => {
                *state = !*state;
                true
            }
            None => false,
        }
    }

    fn population(&self) -> usize {
        self.iter().filter(|&&state| state == ALIVE).count()
    }

    fn rows(&self) -> Vec<&[State]> {
        vec![self.as_slice()]
    }
}

/// Positions in a grid are `(row, column)`.
impl Generation for Grid {
    type Pos = (usize, usize);

    fn validate(&self) -> Result<(), Error> {
        validate_grid(self)
    }

    fn locate((x, y): Coord) -> Option<(usize, usize)> {
        Some((y, x))
    }

    fn cell(&self, (r, c): (usize, usize)) -> Option<State> {
        self.as_slice()
            .get(r)
            .and_then(|row| row.as_slice().get(c))
            .copied()
    }

    fn toggle(&mut self, (r, c): (usize, usize)) -> bool {
        match self.get_mut(r).and_then(|row| row.get_mut(c)) {
            Some(state) => {
                *state = !*state;
                true
            }
            None => false,
        }
    }

    fn population(&self) -> usize {
        self.iter().map(Generation::population).sum()
    }

    fn rows(&self) -> Vec<&[State]> {
        self.iter().map(Vec::as_slice).collect()
    }
}
