//! The world.

use crate::{
    cells::{Coord, Generation},
    config::Config,
    error::Error,
    history::History,
    rules::Rule,
};
use log::{debug, trace, warn};

/// The world.
///
/// Owns the state of one automaton between ticks:
/// the retained generations, the generation counter, and whether
/// it is running.
///
/// Every generation is produced by the rule as a new value, and is
/// appended to the history. An elementary automaton keeps a window of
/// recent rows; the Game of Life only keeps the current grid.
#[derive(Clone, Debug)]
pub struct World<R: Rule> {
    /// World configuration.
    pub(crate) config: Config,

    /// The rule of the cellular automaton.
    rule: R,

    /// The initial generation, restored on [`reset`](World::reset).
    seed: R::Gen,

    /// Retained generations, oldest first. The last one is the current generation.
    history: History<R::Gen>,

    /// Number of successful transitions since the start or the last reset.
    generation: u64,

    /// Whether the world is advancing.
    ///
    /// Cells can only be toggled while it is `false`.
    running: bool,
}

impl<R: Rule> World<R> {
    /// Creates a new world, paused, with `seed` as its only generation.
    ///
    /// `capacity` is the number of generations to retain.
    pub fn new(config: &Config, rule: R, seed: R::Gen, capacity: usize) -> Result<Self, Error> {
        seed.validate()?;
        Ok(World {
            config: config.clone(),
            rule,
            history: History::with_initial(seed.clone(), capacity),
            seed,
            generation: 0,
            running: false,
        })
    }

    /// The rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// World configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The retained generations.
    pub fn history(&self) -> &History<R::Gen> {
        &self.history
    }

    /// The current generation.
    pub fn current(&self) -> Option<&R::Gen> {
        self.history.latest()
    }

    /// The earliest retained generation, the one that [`toggle`](World::toggle) edits.
    pub fn earliest(&self) -> Option<&R::Gen> {
        self.history.earliest()
    }

    /// Number of generations computed since the start or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances one generation.
    ///
    /// Either the new generation is appended and the counter incremented,
    /// or nothing changes and an error is returned. A running world halts
    /// on error.
    pub fn tick(&mut self) -> Result<(), Error> {
        let next = match self.history.latest() {
            Some(current) => self.rule.evolve(current),
            None => Err(Error::EmptyHistory),
        };
        match next {
            Ok(next) => {
                self.history.push(next);
                self.generation += 1;
                trace!("{} advanced to generation {}", self.rule, self.generation);
                Ok(())
            }
            Err(e) => {
                if self.running {
                    warn!("Halting {} at generation {}: {}", self.rule, self.generation, e);
                    self.running = false;
                }
                Err(e)
            }
        }
    }

    /// Advances `n` generations, stopping at the first error.
    pub fn steps(&mut self, n: u64) -> Result<(), Error> {
        for _ in 0..n {
            self.tick()?;
        }
        Ok(())
    }

    /// Starts running.
    ///
    /// Refuses to start if the current generation is invalid.
    pub fn start(&mut self) -> Result<(), Error> {
        let checked = match self.history.latest() {
            Some(current) => current.validate(),
            None => Err(Error::EmptyHistory),
        };
        if let Err(e) = checked {
            warn!("Cannot start {}: {}", self.rule, e);
            self.running = false;
            return Err(e);
        }
        self.running = true;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Flips a cell of the earliest retained generation.
    ///
    /// Does nothing while running, or when the position is out of bounds.
    /// Returns whether a cell was flipped.
    pub fn toggle(&mut self, pos: <R::Gen as Generation>::Pos) -> bool {
        if self.running {
            debug!("Ignored toggle at {:?}: {} is running", pos, self.rule);
            return false;
        }
        let toggled = self
            .history
            .earliest_mut()
            .map_or(false, |gen| gen.toggle(pos));
        if !toggled {
            debug!("Ignored toggle at {:?}: out of bounds", pos);
        }
        toggled
    }

    /// Flips the cell displayed at `coord`. See [`toggle`](World::toggle).
    pub fn toggle_at(&mut self, coord: Coord) -> bool {
        match <R::Gen as Generation>::locate(coord) {
            Some(pos) => self.toggle(pos),
            None => {
                debug!("Ignored toggle at {:?}: not in the earliest generation", coord);
                false
            }
        }
    }

    /// Pauses and goes back to the initial generation.
    pub fn reset(&mut self) {
        self.running = false;
        self.history = History::with_initial(self.seed.clone(), self.history.capacity());
        self.generation = 0;
        debug!("Reset {}", self.rule);
    }
}
