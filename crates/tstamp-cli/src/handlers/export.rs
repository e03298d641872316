use super::selection::checked_table;
use crate::args::SelectionArgs;
use crate::console::ConsoleNotifier;
use anyhow::Result;
use std::path::Path;
use tstamp_engine::ExportFormat;
use tstamp_runtime::{Config, DirectorySink, ExportOutcome, ExportService};
use tstamp_types::LineEnding;

pub fn handle(
    config: &Config,
    selection: &SelectionArgs,
    format: ExportFormat,
    out_dir: &Path,
    line_ending: Option<LineEnding>,
    user_agent: Option<&str>,
) -> Result<()> {
    let table = checked_table(selection)?;

    let notifier = ConsoleNotifier::new();
    let sink = DirectorySink::new(out_dir);
    let mut service = ExportService::new(&config.export, &notifier, &sink);
    if let Some(line_ending) = line_ending {
        service = service.with_line_ending(line_ending);
    } else if let Some(user_agent) = user_agent {
        service = service.with_line_ending(LineEnding::from_user_agent(user_agent));
    }

    match service.download(&table.checked_records(), format)? {
        ExportOutcome::Saved { file_name, bytes } => {
            println!("Saved {} ({} bytes)", sink.path_for(&file_name).display(), bytes);
            Ok(())
        }
        ExportOutcome::NothingSelected => anyhow::bail!("Nothing to export"),
    }
}
