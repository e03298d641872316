use clap::Args;
use std::path::PathBuf;

/// Which rows of a records file are checked.
#[derive(Debug, Clone, Args)]
pub struct SelectionArgs {
    /// JSON array of timestamp records
    #[arg(long)]
    pub records: PathBuf,

    /// Check the row with this file id (repeatable)
    #[arg(long = "select", value_name = "FILE_ID")]
    pub select: Vec<String>,

    /// Check every row
    #[arg(long, conflicts_with = "select")]
    pub all: bool,
}
