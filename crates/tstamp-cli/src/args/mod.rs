mod commands;
mod common;

pub use commands::*;
pub use common::*;

use crate::types::LogLevel;
use clap::Parser;

#[derive(Parser)]
#[command(name = "tstamp")]
#[command(about = "Verify, timestamp and export file-timestamping records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to $TSTAMP_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
