//! CLI argument parsing and logging setup

use anyhow::Result;
use clap::Parser;

use crate::commands;

/// Generate the versioned ClusterServiceVersion for the performance addon operator bundle
#[derive(Parser, Debug)]
#[command(name = "csv-generator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    generate: commands::generate::GenerateArgs,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "info",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        commands::generate::execute(self.generate)
    }
}

/// Log to stderr at `level`, unless `RUST_LOG` says otherwise.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
