use super::common::SelectionArgs;
use crate::types::{FormatArg, LineEndingArg, SortArg};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Verify every stored file against its recorded timestamp")]
    Verify,

    #[command(about = "Add timestamps to the checked rows")]
    Add {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    #[command(about = "Download the checked rows as CSV, JSON or RDF/XML")]
    Export {
        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(long, value_enum)]
        format: FormatArg,

        /// Directory the download is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Force a line ending instead of the configured one
        #[arg(long, value_enum, conflicts_with = "user_agent")]
        line_ending: Option<LineEndingArg>,

        /// Pick the line ending for the client identified by this user agent
        #[arg(long)]
        user_agent: Option<String>,
    },

    #[command(about = "Show one page of the timestamp table")]
    List {
        /// JSON array of timestamp records
        #[arg(long)]
        records: PathBuf,

        /// Only rows verified by this user
        #[arg(long)]
        user: Option<String>,

        /// Only rows verified on or after this day
        #[arg(long)]
        since: Option<String>,

        /// Only rows verified on or before this day
        #[arg(long)]
        until: Option<String>,

        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        #[arg(long, requires = "sort")]
        desc: bool,

        #[arg(long, default_value = "1")]
        page: usize,

        /// Rows per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
    },
}
