mod args;
#[cfg(feature = "tui")]
mod tui;

use args::{Args, Output};
use log::info;
use rcellular_lib::Simulate;
use simple_logger::SimpleLogger;
use std::{error::Error, process};

/// Computes the requested generations and prints the result.
fn run_batch(args: Args) -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().with_level(args.log_level).init()?;
    let mut world: Box<dyn Simulate> = args.config.world()?;
    info!(
        "Running {} on a {:?} world for {} generations",
        world.rule_string(),
        args.config.dimensions(),
        args.generations
    );
    for _ in 0..args.generations {
        world.tick()?;
    }
    match args.output {
        Output::Plaintext => print!("{}", world.plaintext()),
        Output::Json => println!("{}", serde_json::to_string_pretty(&world.snapshot())?),
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.no_tui {
        run_batch(args)
    } else {
        tui::run(args.config)
    }
}

#[cfg(not(feature = "tui"))]
fn run(args: Args) -> Result<(), Box<dyn Error>> {
    run_batch(args)
}

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
