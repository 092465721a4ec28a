//! Conway's Game of Life.

use crate::{
    cells::{validate_grid, wrap, Grid, Row, State, ALIVE, DEAD},
    error::Error,
    rules::Rule,
};
use std::fmt::{self, Display, Formatter};

/// Offsets of the eight neighbors, as `(row, column)`.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Conway's Game of Life, `B3/S23`.
///
/// The rule is fixed: a living cell survives with 2 or 3 living neighbors,
/// a dead cell becomes alive with exactly 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Life;

impl Life {
    /// The next state of a cell with `state` and `live_neighbors` living neighbors.
    #[inline]
    pub fn transition(state: State, live_neighbors: usize) -> State {
        match (state, live_neighbors) {
            (ALIVE, 2) | (ALIVE, 3) | (DEAD, 3) => ALIVE,
            _ => DEAD,
        }
    }
}

impl Display for Life {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "B3/S23")
    }
}

/// Counts the living neighbors of `(r, c)` on the torus.
fn live_neighbors(grid: &[Row], r: usize, c: usize) -> usize {
    let rows = grid.len();
    let cols = grid[0].len();
    NBHD.iter()
        .filter(|&&(dr, dc)| grid[wrap(r, dr, rows)][wrap(c, dc, cols)] == ALIVE)
        .count()
}

/// Computes the next generation of the Game of Life on a torus.
///
/// The grid must be non-empty and rectangular. Rows are never truncated
/// or padded; a ragged grid is rejected.
pub fn next_grid(current: &[Row]) -> Result<Grid, Error> {
    validate_grid(current)?;
    let next = current
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, &state)| Life::transition(state, live_neighbors(current, r, c)))
                .collect()
        })
        .collect();
    Ok(next)
}

impl Rule for Life {
    type Gen = Grid;

    fn evolve(&self, current: &Grid) -> Result<Grid, Error> {
        next_grid(current)
    }
}
