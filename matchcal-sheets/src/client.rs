//! Sheets values-API client.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::SheetsConfig;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Response body of `spreadsheets.values.get`. Only the cell grid is
/// interesting; a sheet with no data rows omits `values` entirely.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Client for reading the schedule sheet.
#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    config: SheetsConfig,
    api_key: String,
}

impl SheetsClient {
    /// Build a client, resolving the API key up front so a
    /// misconfigured deployment fails at startup rather than on the
    /// first request.
    pub fn new(config: SheetsConfig) -> Result<Self> {
        let api_key = config.resolve_api_key()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(SheetsClient {
            http,
            config,
            api_key,
        })
    }

    /// Fetch the raw cell grid. One attempt, no scheduled retry: a
    /// retry is simply the caller invoking this again.
    pub async fn fetch_rows(&self) -> Result<Vec<Vec<String>>> {
        let url = format!(
            "{SHEETS_API_BASE}/{}/values/{}",
            self.config.sheet_id, self.config.range
        );

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .context("Failed to reach the Sheets API")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Sheets API returned HTTP {status}");
        }

        let body: ValuesResponse = response
            .json()
            .await
            .context("Failed to decode the Sheets API response")?;

        tracing::debug!(rows = body.values.len(), "fetched sheet values");
        Ok(body.values)
    }
}
