//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Writing a configuration file and record files
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tstamp_types::FileRecord;

use crate::fixtures::write_records;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use tstamp_testing::{TestWorld, fixtures::sample_records};
///
/// let world = TestWorld::new().with_records("rows.json", &sample_records(3));
///
/// let result = world.run(&["list", "--records", "rows.json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    cwd: PathBuf,
    config_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    ///
    /// The configuration path points into the temp dir; until
    /// [`TestWorld::with_config`] writes it, the CLI runs on defaults.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();

        Self {
            cwd: base_path.clone(),
            config_path: base_path.join("config.toml"),
            temp_dir,
        }
    }

    /// Resolve `path` relative to the temp root.
    pub fn path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.temp_dir.path().join(path)
    }

    /// Write the configuration file the CLI is pointed at.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Write `records` as a JSON array into the working directory.
    pub fn with_records(self, name: &str, records: &[FileRecord]) -> Self {
        write_records(&self.cwd, name, records).expect("Failed to write records");
        self
    }

    /// Read a file relative to the temp root.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<String> {
        Ok(std::fs::read_to_string(self.path(path))?)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);

        cmd.current_dir(&self.cwd);
        cmd.env_remove("TSTAMP_CONFIG");
        cmd.env_remove("RUST_LOG");

        cmd
    }

    /// Execute a CLI command in this environment.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("tstamp")
            .map_err(|e| anyhow::anyhow!("Failed to find tstamp binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
