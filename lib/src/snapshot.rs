#![cfg(feature = "serde")]
//! Snapshots of the displayed state.

use crate::{cells::Row, config::Kind};
use serde::{Deserialize, Serialize};

/// A representation of what a world displays, which can be easily serialized.
///
/// Cells are written as `0` and `1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Which automaton.
    pub kind: Kind,

    /// The rule string.
    pub rule: String,

    /// Number of generations computed since the start or the last reset.
    pub generation: u64,

    /// Whether the world was running.
    pub running: bool,

    /// The displayed rows: the history window for `1d`, the grid for `2d`.
    pub rows: Vec<Row>,
}
