//! Parsing command-line arguments.

use clap::{
    crate_authors, crate_description, crate_name, crate_version,
    error::{ErrorKind, Result as ClapResult},
    value_parser, Arg, ArgAction, ArgMatches, Command, Error,
};
use log::LevelFilter;
use rcellular_lib::{Config, Kind, Seed};
use std::{fs, path::Path};

/// Output format of the batch mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Output {
    /// Dead cells as `.`, living cells as `o`.
    Plaintext,
    /// A JSON snapshot.
    Json,
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) generations: u64,
    pub(crate) output: Output,
    pub(crate) log_level: LevelFilter,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

/// Formats of configuration files, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Format::Toml),
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    fn parse(self, text: &str) -> Result<Config, String> {
        match self {
            Format::Toml => toml::from_str(text).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            Format::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// Reads a configuration file.
fn read_config(path: &Path) -> ClapResult<Config> {
    let format = Format::from_path(path).ok_or_else(|| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!(
                "Unknown config format '{}', expected .toml, .yaml or .json\n",
                path.display()
            ),
        )
    })?;
    let text = fs::read_to_string(path).map_err(|e| {
        Error::raw(
            ErrorKind::Io,
            format!("Cannot read '{}': {}\n", path.display(), e),
        )
    })?;
    format.parse(&text).map_err(|e| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!("Invalid config '{}': {}\n", path.display(), e),
        )
    })
}

fn positive<T>(s: &str) -> Result<T, String>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match s.parse::<T>() {
        Ok(n) if n != T::default() => Ok(n),
        _ => Err(String::from("must be a positive integer")),
    }
}

fn command() -> Command {
    let command = Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .long_about(
            "Elementary cellular automata and Conway's Game of Life\n\
             \n\
             Both live on periodic boundaries: the row of an elementary \n\
             automaton is a ring, the grid of the Game of Life is a torus.\n\
             \n\
             Worlds are displayed in Plaintext format.\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`.\n",
        )
        .arg(
            Arg::new("KIND")
                .help("Which automaton: 1d (elementary) or 2d (Game of Life)")
                .index(1)
                .value_parser(|s: &str| s.parse::<Kind>()),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a TOML, YAML or JSON file")
                .long_help(
                    "Reads the configuration from a TOML, YAML or JSON file\n\
                     The format is chosen by the file extension. \
                     Other options override the values in the file.\n",
                )
                .short('c')
                .long("config")
                .value_parser(value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("WIDTH")
                .help("Width of the world [default: 51 for 1d, 50 for 2d]")
                .short('W')
                .long("width")
                .value_parser(positive::<usize>),
        )
        .arg(
            Arg::new("HEIGHT")
                .help("Height of the world, 2d only [default: 50]")
                .short('H')
                .long("height")
                .value_parser(positive::<usize>),
        )
        .arg(
            Arg::new("RULE")
                .help("Wolfram rule number, 1d only [default: 30]")
                .short('r')
                .long("rule")
                .value_parser(value_parser!(u32).range(0..=255)),
        )
        .arg(
            Arg::new("HISTORY")
                .help("Number of rows kept in the history, 1d only [default: 200]")
                .long("history")
                .value_parser(positive::<usize>),
        )
        .arg(
            Arg::new("INTERVAL")
                .help("Milliseconds between two generations [default: 200]")
                .short('i')
                .long("interval")
                .value_parser(positive::<u64>),
        )
        .arg(
            Arg::new("SEED")
                .help("Initial generation [default: preset]")
                .long_help(
                    "Initial generation [default: preset]\n\
                     \"preset\" is a single living cell in the middle for 1d, \
                     and a glider for 2d.\n\
                     \"random\" makes each cell alive with probability 1/2.\n\
                     \"empty\" leaves all cells dead.\n",
                )
                .short('s')
                .long("seed")
                .value_parser(["preset", "random", "empty"]),
        )
        .arg(
            Arg::new("RANDOM_SEED")
                .help("Seed of the random number generator for --seed random")
                .long("random-seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to compute before printing")
                .short('g')
                .long("generations")
                .value_parser(value_parser!(u64))
                .default_value("0"),
        )
        .arg(
            Arg::new("JSON")
                .help("Prints a JSON snapshot instead of Plaintext")
                .long("json")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Logs more details to stderr; can be repeated")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        );

    #[cfg(feature = "tui")]
    let command = command.arg(
        Arg::new("NOTUI")
            .help("Prints the result immediately, without entering the TUI")
            .short('n')
            .long("no-tui")
            .action(ArgAction::SetTrue),
    );

    command
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        let matches = command().try_get_matches()?;
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> ClapResult<Self> {
        let mut config = match matches.get_one::<std::path::PathBuf>("CONFIG") {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };

        if let Some(&kind) = matches.get_one::<Kind>("KIND") {
            config = config.set_kind(kind);
        }
        if let Some(&width) = matches.get_one::<usize>("WIDTH") {
            config = config.set_width(width);
        }
        if let Some(&height) = matches.get_one::<usize>("HEIGHT") {
            config = config.set_height(height);
        }
        if let Some(&rule) = matches.get_one::<u32>("RULE") {
            config = config.set_rule(rule);
        }
        if let Some(&max_history) = matches.get_one::<usize>("HISTORY") {
            config = config.set_max_history(max_history);
        }
        if let Some(&interval) = matches.get_one::<u64>("INTERVAL") {
            config = config.set_interval_ms(interval);
        }
        if let Some(seed) = matches.get_one::<String>("SEED") {
            let seed: Seed = seed
                .parse()
                .map_err(|e: String| Error::raw(ErrorKind::InvalidValue, e))?;
            config = config.set_seed(seed);
        }
        if let Some(&random_seed) = matches.get_one::<u64>("RANDOM_SEED") {
            config = config.set_random_seed(random_seed);
        }

        let generations = matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(0);
        let output = if matches.get_flag("JSON") {
            Output::Json
        } else {
            Output::Plaintext
        };
        let log_level = match matches.get_count("VERBOSE") {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        Ok(Args {
            config,
            generations,
            output,
            log_level,
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}
