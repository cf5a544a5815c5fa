//! Configuration model and IO for the offers endpoint.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};

/// Bind address used when neither the config file nor the CLI provides one.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8081";

/// Configuration for the offers introspection server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ServerConfig {
    /// Optional bind address (for example, "127.0.0.1:8081"). When omitted,
    /// [`DEFAULT_BIND_ADDRESS`] is used.
    pub bind_address: Option<String>,
    /// Whether the fixed diagnostic sample offer is appended after the live
    /// snapshot in every response. Off unless explicitly enabled, so
    /// dashboards never see a fabricated offer mixed into real ones.
    pub include_sample_offer: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: Some(DEFAULT_BIND_ADDRESS.to_string()),
            include_sample_offer: false,
        }
    }
}

/// Returns the default path for the server configuration file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var("OFFERSCOPE_CONFIG")
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("offerscope")
        .join("server.json")
}

/// Loads the server configuration from the default path.
pub fn load_config() -> anyhow::Result<ServerConfig> {
    let path = default_config_path();
    load_config_from_path(&path)
}

/// Loads the server configuration from a specific path.
///
/// A missing file yields the defaults; a present but malformed file is an
/// error rather than a silent fallback.
pub fn load_config_from_path(path: &Path) -> anyhow::Result<ServerConfig> {
    if !path.exists() {
        return Ok(ServerConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: ServerConfig = serde_json::from_str(&content)?;
    Ok(config)
}
