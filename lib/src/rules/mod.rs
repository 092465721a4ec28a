//! Cellular automata rules.
//!
//! Two families are supported:
//! - [elementary automata](https://en.wikipedia.org/wiki/Elementary_cellular_automaton),
//!   given by a [`RuleTable`] decoded from a Wolfram rule number;
//! - [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life),
//!   given by [`Life`].
//!
//! Both live on periodic boundaries: a row is a ring, a grid is a torus.

mod elementary;
mod life;

use crate::{cells::Generation, error::Error};
use std::fmt::Display;

pub use elementary::{decimal_to_bits, decode, next_row, RuleTable, RULE_BITS};
pub use life::{next_grid, Life};

/// A cellular automaton rule.
///
/// The [`Display`] form is the rule string.
pub trait Rule: Display {
    /// The kind of generation the rule acts on.
    type Gen: Generation;

    /// Computes the next generation.
    ///
    /// The input is validated first. It is never modified;
    /// a new generation is always allocated.
    fn evolve(&self, current: &Self::Gen) -> Result<Self::Gen, Error>;
}
