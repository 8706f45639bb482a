//! `labyrinth`: search a street grid for closed walking loops.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use labyrinth_cli::{check, load_config, logging, run, LabyrinthConfig, Overrides};

#[derive(Parser)]
#[command(
    name = "labyrinth",
    version,
    about = "Search a street grid for closed walking loops"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for loops, writing each new or tying best to the output directory.
    Run {
        /// TOML configuration (Capitol Hill defaults if omitted).
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Validate a configuration and print grid statistics.
    Check {
        /// TOML configuration (Capitol Hill defaults if omitted).
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = dispatch() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn dispatch() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { config, overrides } => {
            let mut cfg = load(config)?;
            cfg.apply(&overrides);
            cfg.validate()?;
            let summary = run(&cfg)?;
            match summary.report.best {
                Some(best) => println!(
                    "best score {} ({} blocks, {} unique, {} crossings); {} result(s) in {}",
                    best.value,
                    best.length,
                    best.unique,
                    best.crossings,
                    summary.files.len(),
                    cfg.output.dir.display()
                ),
                None => println!("no loop found"),
            }
            Ok(())
        }
        Command::Check { config } => {
            let summary = check(&load(config)?)?;
            println!("corners:     {}", summary.corners);
            println!("block sides: {}", summary.block_sides);
            println!("segments:    {}", summary.segments);
            println!("exclusions:  {}", summary.exclusions);
            println!(
                "loop length: {}..={}",
                summary.bounds.min, summary.bounds.max
            );
            Ok(())
        }
    }
}

fn load(path: Option<PathBuf>) -> Result<LabyrinthConfig> {
    match path {
        Some(path) => load_config(&path),
        None => Ok(LabyrinthConfig::default()),
    }
}
