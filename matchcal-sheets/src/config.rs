//! Schedule sheet configuration.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable holding the Sheets API key. Takes precedence
/// over the key in the config file.
pub const API_KEY_ENV: &str = "GOOGLE_SHEETS_API_KEY";

fn default_range() -> String {
    // Rows 1-2 of the published sheet are headers
    "A3:H100".to_string()
}

/// Which sheet to read and how to authenticate.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    /// Spreadsheet id, from the sheet's URL.
    pub sheet_id: String,

    /// Cell range to read.
    #[serde(default = "default_range")]
    pub range: String,

    /// API key; usually supplied via the environment instead.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl SheetsConfig {
    /// The API key from the environment or the config file.
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                return Ok(key);
            }
        }
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .with_context(|| format!("Google Sheets API key not configured (set {API_KEY_ENV})"))
    }
}
