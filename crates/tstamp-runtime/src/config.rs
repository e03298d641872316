use crate::transport::HttpMethod;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tstamp_engine::export::DEFAULT_BASE_NAME;
use tstamp_engine::table::DEFAULT_PAGE_SIZE;
use tstamp_types::{FieldSpec, LineEnding};

/// Resolve the configuration file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TSTAMP_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`<config dir>/tstamp/config.toml`)
/// 4. ~/.tstamp/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TSTAMP_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("tstamp").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".tstamp").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Server endpoints used by the verify and add batches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Returns the per-provider file list to verify
    #[serde(default)]
    pub verify_list: String,
    /// Verifies one file
    #[serde(default)]
    pub verify_data: String,
    /// Adds a timestamp to one file
    #[serde(default)]
    pub add: String,
    #[serde(default)]
    pub method: HttpMethod,
}

impl Endpoints {
    /// The configured URL for `name`, or a configuration error if it is empty.
    pub fn require(&self, name: &str) -> Result<&str> {
        let url = match name {
            "verify_list" => &self.verify_list,
            "verify_data" => &self.verify_data,
            "add" => &self.add,
            _ => {
                return Err(Error::InvalidOperation(format!(
                    "Unknown endpoint: {}",
                    name
                )));
            }
        };
        if url.trim().is_empty() {
            return Err(Error::Config(format!("endpoints.{} is not set", name)));
        }
        Ok(url)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingSetting {
    #[default]
    Auto,
    Lf,
    Crlf,
}

impl LineEndingSetting {
    pub fn resolve(&self) -> LineEnding {
        match self {
            LineEndingSetting::Auto => LineEnding::detect(),
            LineEndingSetting::Lf => LineEnding::Lf,
            LineEndingSetting::Crlf => LineEnding::CrLf,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_base_name")]
    pub base_name: String,
    #[serde(default)]
    pub line_ending: LineEndingSetting,
    #[serde(default)]
    pub fields: FieldSpec,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            base_name: default_base_name(),
            line_ending: LineEndingSetting::default(),
            fields: FieldSpec::default(),
        }
    }
}

fn default_base_name() -> String {
    DEFAULT_BASE_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub table: TableSettings,
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
