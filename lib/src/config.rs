//! World configuration.

use crate::{
    cells::{Grid, Row, State, ALIVE, DEAD},
    error::Error,
    history::MAX_HISTORY_LENGTH,
    rules::{Life, RuleTable},
    traits::Simulate,
    world::World,
};
use educe::Educe;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
    time::Duration,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default width of an elementary automaton.
const DEFAULT_WIDTH_1D: usize = 51;
/// Default width and height of a Game of Life grid.
const DEFAULT_SIZE_2D: usize = 50;

/// Which automaton to simulate.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// `1d`.
    ///
    /// An elementary automaton on a single row.
    #[educe(Default)]
    #[cfg_attr(feature = "serde", serde(rename = "1d"))]
    Elementary,
    /// `2d`.
    ///
    /// Conway's Game of Life on a rectangular grid.
    #[cfg_attr(feature = "serde", serde(rename = "2d"))]
    Life,
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" | "1D" | "elementary" => Ok(Kind::Elementary),
            "2d" | "2D" | "life" => Ok(Kind::Life),
            _ => Err(String::from("invalid Kind")),
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Kind::Elementary => "1d",
            Kind::Life => "2d",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

/// The initial generation.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Seed {
    /// A single living cell in the middle of the row for `1d`;
    /// a glider near the top left corner for `2d`.
    ///
    /// The glider needs both dimensions to be larger than 5.
    /// Smaller grids start empty.
    #[educe(Default)]
    Preset,
    /// Each cell is alive with probability `1/2`.
    Random,
    /// All cells are dead.
    Empty,
}

impl FromStr for Seed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preset" | "p" => Ok(Seed::Preset),
            "random" | "r" => Ok(Seed::Random),
            "empty" | "e" => Ok(Seed::Empty),
            _ => Err(String::from("invalid Seed")),
        }
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Seed::Preset => "preset",
            Seed::Random => "random",
            Seed::Empty => "empty",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Which automaton to simulate.
    pub kind: Kind,

    /// Width.
    ///
    /// `None` means 51 cells for `1d` and 50 for `2d`.
    pub width: Option<usize>,

    /// Height. Ignored for `1d`.
    ///
    /// `None` means 50.
    pub height: Option<usize>,

    /// The Wolfram rule number. Ignored for `2d`.
    #[educe(Default = 30)]
    pub rule: u32,

    /// Number of rows kept in the history. Ignored for `2d`,
    /// which only keeps the current generation.
    #[educe(Default = 200)]
    pub max_history: usize,

    /// Time between two generations when running, in milliseconds.
    #[educe(Default = 200)]
    pub interval_ms: u64,

    /// The initial generation.
    pub seed: Seed,

    /// Seed of the random number generator for [`Seed::Random`].
    ///
    /// `None` means a fresh random seed every time a world is created.
    pub random_seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration for the given kind of automaton.
    pub fn new(kind: Kind) -> Self {
        Config {
            kind,
            ..Config::default()
        }
    }

    /// Sets the kind of automaton.
    pub fn set_kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the width.
    pub fn set_width<T: Into<Option<usize>>>(mut self, width: T) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height.
    pub fn set_height<T: Into<Option<usize>>>(mut self, height: T) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the rule number.
    pub fn set_rule(mut self, rule: u32) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the number of rows kept in the history.
    pub fn set_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Sets the time between two generations, in milliseconds.
    pub fn set_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Sets the initial generation.
    pub fn set_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the seed of the random number generator.
    pub fn set_random_seed<T: Into<Option<u64>>>(mut self, random_seed: T) -> Self {
        self.random_seed = random_seed.into();
        self
    }

    /// `(width, height)` after applying the defaults.
    ///
    /// The height of an elementary automaton is always 1.
    pub fn dimensions(&self) -> (usize, usize) {
        match self.kind {
            Kind::Elementary => (self.width.unwrap_or(DEFAULT_WIDTH_1D), 1),
            Kind::Life => (
                self.width.unwrap_or(DEFAULT_SIZE_2D),
                self.height.unwrap_or(DEFAULT_SIZE_2D),
            ),
        }
    }

    /// Time between two generations.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    fn rng(&self) -> StdRng {
        match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generates the initial row of an elementary automaton.
    fn seed_row(&self, width: usize) -> Row {
        match self.seed {
            Seed::Preset => {
                let mut row = vec![DEAD; width];
                row[width / 2] = ALIVE;
                row
            }
            Seed::Random => random_row(&mut self.rng(), width),
            Seed::Empty => vec![DEAD; width],
        }
    }

    /// Generates the initial grid of the Game of Life.
    fn seed_grid(&self, width: usize, height: usize) -> Grid {
        match self.seed {
            Seed::Preset => {
                let mut grid = vec![vec![DEAD; width]; height];
                if width > 5 && height > 5 {
                    for &(r, c) in &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)] {
                        grid[r][c] = ALIVE;
                    }
                }
                grid
            }
            Seed::Random => {
                let mut rng = self.rng();
                (0..height).map(|_| random_row(&mut rng, width)).collect()
            }
            Seed::Empty => vec![vec![DEAD; width]; height],
        }
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if a size is not positive or the rule is invalid.
    pub fn world(&self) -> Result<Box<dyn Simulate>, Error> {
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 || self.max_history == 0 || self.interval_ms == 0 {
            return Err(Error::NonPositiveError);
        }
        match self.kind {
            Kind::Elementary => {
                let rule = RuleTable::decode(self.rule)?;
                let row = self.seed_row(width);
                Ok(Box::new(World::new(self, rule, row, self.max_history)?))
            }
            Kind::Life => {
                let grid = self.seed_grid(width, height);
                Ok(Box::new(World::new(self, Life, grid, 1)?))
            }
        }
    }
}

fn random_row<R: Rng>(rng: &mut R, width: usize) -> Row {
    (0..width).map(|_| State::from(rng.gen_bool(0.5))).collect()
}
