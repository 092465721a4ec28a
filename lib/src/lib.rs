//! Elementary cellular automata and Conway's Game of Life
//! on periodic boundaries.
//!
//! ```
//! use rcellular_lib::{Config, Kind};
//!
//! let mut world = Config::new(Kind::Elementary).set_width(7).world().unwrap();
//! world.tick().unwrap();
//! assert_eq!(world.plaintext(), "...o...\n..ooo..\n");
//! ```

mod cells;
mod config;
mod error;
mod history;
pub mod rules;
mod snapshot;
mod traits;
mod world;

pub use cells::{Coord, Generation, Grid, Row, State, ALIVE, DEAD};
pub use config::{Config, Kind, Seed};
pub use error::{Error, ErrorKind};
pub use history::{History, MAX_HISTORY_LENGTH};
#[cfg(feature = "serde")]
pub use snapshot::Snapshot;
pub use traits::Simulate;
pub use world::World;
