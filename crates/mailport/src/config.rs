//! Application configuration.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use mailport_core::DraftDto;
use mailport_core::pagination::default_limit;

/// Default tracing filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "mailport=info,mailport_core=info,mailport_memory=info";

/// Which adapter backs the gateways.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Seeded in-process dataset.
    #[default]
    InMemory,
}

/// Settings read from `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Adapter selection.
    pub backend: Backend,
    /// Page size used when a command does not pass `--limit`.
    pub default_page_limit: NonZeroU32,
    /// Tracing filter directives, overridden by `RUST_LOG`.
    pub log_filter: String,
    /// Emails created at startup, on top of the backend's own data.
    pub extra_emails: Vec<DraftDto>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            default_page_limit: default_limit(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            extra_emails: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON document; absent keys keep their defaults.
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("invalid configuration")
    }

    /// Load the configuration.
    ///
    /// An explicit path (from `--config` or `MAILPORT_CONFIG`) must exist.
    /// The default location may be missing, in which case defaults apply.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !exists(path).await? {
                    bail!("config file {} does not exist", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let path = default_path();
                if !exists(&path).await? {
                    return Ok(Self::default());
                }
                path
            }
        };

        let contents = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("in {}", path.display()))
    }
}

/// Only a definite "not found" counts as missing; any other I/O error is
/// reported.
async fn exists(path: &Path) -> Result<bool> {
    tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("cannot access {}", path.display()))
}

/// `<config dir>/mailport/config.json`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mailport")
        .join("config.json")
}
