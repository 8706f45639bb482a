//! Command-line front end for the Labyrinth loop search.
//!
//! Loads a TOML configuration (defaulting to the Capitol Hill grid),
//! applies command-line overrides, runs the search and writes every new
//! or tying best loop to its own file.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod commands;
pub mod config;
pub mod logging;
pub mod sink;

pub use commands::{check, run, CheckSummary, RunSummary};
pub use config::{load_config, LabyrinthConfig, Overrides, Plan};
pub use sink::FileSink;
