//! A trait for `World`.

use crate::{
    cells::{Coord, Generation, State, DEAD},
    config::Config,
    error::Error,
    rules::Rule,
    world::World,
};

#[cfg(feature = "serde")]
use crate::snapshot::Snapshot;

/// A trait for `World`.
///
/// So that we can switch between the two kinds of automata
/// using trait objects.
pub trait Simulate {
    /// Advances one generation. See [`World::tick`].
    fn tick(&mut self) -> Result<(), Error>;

    /// Flips the cell displayed at `coord` while paused. See [`World::toggle_at`].
    fn toggle(&mut self, coord: Coord) -> bool;

    /// Pauses and goes back to the initial generation.
    fn reset(&mut self);

    /// Starts running. Fails if the current generation is invalid.
    fn start(&mut self) -> Result<(), Error>;

    fn pause(&mut self);

    fn is_running(&self) -> bool;

    /// Number of generations computed since the start or the last reset.
    fn generation(&self) -> u64;

    /// World configuration.
    fn config(&self) -> &Config;

    /// The rule string, `W30` or `B3/S23`.
    fn rule_string(&self) -> String;

    /// Number of living cells in the current generation.
    fn population(&self) -> usize;

    /// Everything there is to display, one line per row.
    ///
    /// For elementary automata, all retained rows, oldest first.
    /// For the Game of Life, the rows of the current grid.
    fn rows(&self) -> Vec<&[State]>;

    #[cfg(feature = "serde")]
    /// Saves the displayed state as a [`Snapshot`],
    /// which can be easily serialized.
    fn snapshot(&self) -> Snapshot;

    /// Displays the world in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    fn plaintext(&self) -> String {
        let mut str = String::new();
        for row in self.rows() {
            for &state in row {
                str.push(if state == DEAD { '.' } else { 'o' });
            }
            str.push('\n');
        }
        str
    }
}

/// The `Simulate` trait is implemented for every `World`.
impl<R: Rule> Simulate for World<R> {
    fn tick(&mut self) -> Result<(), Error> {
        self.tick()
    }

    fn toggle(&mut self, coord: Coord) -> bool {
        self.toggle_at(coord)
    }

    fn reset(&mut self) {
        self.reset()
    }

    fn start(&mut self) -> Result<(), Error> {
        self.start()
    }

    fn pause(&mut self) {
        self.pause()
    }

    fn is_running(&self) -> bool {
        self.is_running()
    }

    fn generation(&self) -> u64 {
        self.generation()
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn rule_string(&self) -> String {
        self.rule().to_string()
    }

    fn population(&self) -> usize {
        self.current().map_or(0, Generation::population)
    }

    fn rows(&self) -> Vec<&[State]> {
        self.history().iter().flat_map(Generation::rows).collect()
    }

    #[cfg(feature = "serde")]
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            kind: self.config.kind,
            rule: self.rule_string(),
            generation: self.generation(),
            running: self.is_running(),
            rows: self.rows().into_iter().map(<[State]>::to_vec).collect(),
        }
    }
}
