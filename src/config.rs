//! Runtime settings loaded from an optional TOML file.
//!
//! Lookup order for the file: `$IMPACT_TRACKER_CONFIG`, then
//! `<config_home>/impact-tracker/config.toml`. A missing file yields the
//! defaults. `IMPACT_TRACKER_README` overrides the report path.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::error::TrackerError;

pub const CONFIG_ENV: &str = "IMPACT_TRACKER_CONFIG";
pub const README_ENV: &str = "IMPACT_TRACKER_README";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONTENT_LIMIT: usize = 1000;
const DEFAULT_REPORT_PATH: &str = "README.md";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fetch: FetchSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Maximum number of characters kept from the article body
    pub content_limit: usize,
    /// Honour HTTP(S)_PROXY environment variables
    pub use_system_proxy: bool,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            content_limit: DEFAULT_CONTENT_LIMIT,
            use_system_proxy: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub path: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

impl Settings {
    /// Load settings from the config file (if any) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut settings = match config_file_path() {
            Some(path) if path.exists() => {
                debug!("Loading settings from {}", path.display());
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_toml_str(&raw)
                    .with_context(|| format!("Invalid config file {}", path.display()))?
            }
            _ => Self::default(),
        };

        if let Some(path) = std::env::var_os(README_ENV) {
            settings.report.path = PathBuf::from(path);
        }

        Ok(settings)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(raw).map_err(|e| TrackerError::ConfigError(e.to_string()))?;
        if settings.fetch.timeout_secs == 0 {
            return Err(anyhow!(TrackerError::ConfigError(
                "fetch.timeout_secs must be greater than zero".to_string()
            )));
        }
        Ok(settings)
    }
}

fn config_file_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).map(PathBuf::from).or_else(|| {
        dir_spec::config_home().map(|dir| dir.join("impact-tracker").join("config.toml"))
    })
}
