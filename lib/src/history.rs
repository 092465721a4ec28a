//! A bounded window of past generations.

use crate::{
    cells::{Row, State},
    error::Error,
};
use std::collections::{vec_deque, VecDeque};

/// Default number of generations kept by an elementary automaton.
pub const MAX_HISTORY_LENGTH: usize = 200;

/// Generations in insertion order, oldest first, at most `capacity` of them.
///
/// Once the history is full, appending a generation evicts the oldest one.
/// Stored generations are never modified by later ones;
/// the only way to change one is [`edit_earliest`](History::edit_earliest)
/// or [`earliest_mut`](History::earliest_mut).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History<G> {
    gens: VecDeque<G>,
    capacity: usize,
}

impl<G> History<G> {
    /// An empty history. A `capacity` of `0` is treated as `1`.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        History {
            gens: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// A history holding a single initial generation.
    pub fn with_initial(initial: G, capacity: usize) -> Self {
        let mut history = History::new(capacity);
        history.push(initial);
        history
    }

    /// Appends a generation.
    ///
    /// Returns the evicted generation if the history was full.
    /// The eviction happens before the insertion, so the length never
    /// exceeds the capacity.
    pub fn push(&mut self, gen: G) -> Option<G> {
        let evicted = if self.gens.len() >= self.capacity {
            self.gens.pop_front()
        } else {
            None
        };
        self.gens.push_back(gen);
        evicted
    }

    /// The oldest retained generation.
    pub fn earliest(&self) -> Option<&G> {
        self.gens.front()
    }

    /// The oldest retained generation, mutably.
    pub fn earliest_mut(&mut self) -> Option<&mut G> {
        self.gens.front_mut()
    }

    /// The most recent generation.
    pub fn latest(&self) -> Option<&G> {
        self.gens.back()
    }

    pub fn len(&self) -> usize {
        self.gens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gens.is_empty()
    }

    /// Maximal number of generations.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates from the oldest generation to the latest.
    pub fn iter(&self) -> vec_deque::Iter<'_, G> {
        self.gens.iter()
    }
}

impl History<Row> {
    /// Replaces one cell of the earliest row, leaving the other rows untouched.
    ///
    /// Fails without changing anything if the history is empty,
    /// if `index` is outside the row, or if `value` is not a valid state.
    pub fn edit_earliest(&mut self, index: usize, value: State) -> Result<(), Error> {
        if !value.is_valid() {
            return Err(Error::InvalidCell((index, 0), value));
        }
        let row = self.gens.front_mut().ok_or(Error::EmptyHistory)?;
        let cell = row.get_mut(index).ok_or(Error::OutOfBounds((index, 0)))?;
        *cell = value;
        Ok(())
    }
}

impl<'a, G> IntoIterator for &'a History<G> {
    type Item = &'a G;
    type IntoIter = vec_deque::Iter<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
