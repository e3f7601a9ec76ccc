//! # CLI Command Implementations
//!
//! The tool has a single operation, so there are no subcommands. The
//! `generate` module defines its arguments, derived using `clap`, and an
//! `execute` function that converts them into a
//! `csv_generator::config::GeneratorConfig` and runs the library.

pub mod generate;
