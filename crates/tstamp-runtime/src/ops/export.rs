use crate::Result;
use crate::config::ExportSettings;
use crate::host::{Notifier, Severity};
use crate::storage::DownloadSink;
use tracing::{info, warn};
use tstamp_engine::export::{self, CONTENT_TYPE, ExportFormat};
use tstamp_types::{FileRecord, LineEnding};

pub const EMPTY_SELECTION_TITLE: &str = "Timestamp";
pub const EMPTY_SELECTION_MESSAGE: &str = "Using the checkbox, please select the files to download.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved { file_name: String, bytes: usize },
    /// No rows were selected; the user was warned and nothing was written.
    NothingSelected,
}

/// Renders the selected rows and hands the payload to a [`DownloadSink`].
pub struct ExportService<'a> {
    settings: &'a ExportSettings,
    line_ending: LineEnding,
    notifier: &'a dyn Notifier,
    sink: &'a dyn DownloadSink,
}

impl<'a> ExportService<'a> {
    pub fn new(
        settings: &'a ExportSettings,
        notifier: &'a dyn Notifier,
        sink: &'a dyn DownloadSink,
    ) -> Self {
        Self {
            settings,
            line_ending: settings.line_ending.resolve(),
            notifier,
            sink,
        }
    }

    /// Override the line ending resolved from the settings.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn download(&self, records: &[&FileRecord], format: ExportFormat) -> Result<ExportOutcome> {
        if records.is_empty() {
            warn!(%format, "export requested with no rows selected");
            self.notifier.notify(
                EMPTY_SELECTION_TITLE,
                EMPTY_SELECTION_MESSAGE,
                Severity::Danger,
            );
            return Ok(ExportOutcome::NothingSelected);
        }

        let content = export::render(format, records, &self.settings.fields, self.line_ending)?;
        let file_name = format.file_name(&self.settings.base_name);
        self.sink.save(&file_name, CONTENT_TYPE, &content)?;

        info!(%format, file_name = %file_name, rows = records.len(), "export saved");
        Ok(ExportOutcome::Saved {
            file_name,
            bytes: content.len(),
        })
    }
}
