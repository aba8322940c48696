//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use matchcal_sheets::SheetsConfig;

/// Environment variable overriding the config file location.
const CONFIG_PATH_ENV: &str = "MATCHCAL_CONFIG";

fn default_listen() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 4097))
}

/// Configuration at ~/.config/matchcal/config.toml
///
/// ```toml
/// listen = "127.0.0.1:4097"
///
/// [sheet]
/// sheet_id = "..."
/// ```
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    pub sheet: SheetsConfig,
}

impl ServerConfig {
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("matchcal");
        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }
}
