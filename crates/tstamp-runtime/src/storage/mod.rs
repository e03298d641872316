//! Destinations for downloaded export files.

use crate::Result;
use std::path::PathBuf;
use tracing::debug;

/// Saves a finished download under a file name.
pub trait DownloadSink {
    fn save(&self, file_name: &str, content_type: &str, content: &str) -> Result<()>;
}

/// Writes downloads into a directory, replacing files of the same name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, file_name: &str, content_type: &str, content: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(file_name);
        debug!(path = %path.display(), content_type, bytes = content.len(), "saving download");
        std::fs::write(path, content)?;
        Ok(())
    }
}
