//! # CSV Generator CLI
//!
//! This is the binary entry point for the `csv-generator` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initialising logging.
//! - Running the generator and reporting the written manifest path.
//!
//! Any error is returned from `main`, which prints it to stderr and exits
//! with a non-zero status. The core logic lives in the `csv_generator`
//! library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
