//! Shared application state: the sheets client and the match snapshot.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::RwLock;

use matchcal_core::MatchRecord;
use matchcal_sheets::{SheetsClient, SheetsConfig};

/// How long a fetched snapshot stays fresh. Sheet edits show up within
/// five minutes without hammering the values API on every request.
const SNAPSHOT_TTL: Duration = Duration::from_secs(300);

struct Snapshot {
    matches: Arc<Vec<MatchRecord>>,
    fetched_at: Instant,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    sheets: SheetsClient,
    snapshot: Arc<RwLock<Option<Snapshot>>>,
}

impl AppState {
    pub fn new(config: SheetsConfig) -> Result<Self> {
        Ok(AppState {
            sheets: SheetsClient::new(config)?,
            snapshot: Arc::new(RwLock::new(None)),
        })
    }

    /// The current match collection, refreshed from the sheet when the
    /// cached snapshot is older than the TTL. Each refresh replaces the
    /// collection wholesale; a failed refresh propagates the error and
    /// leaves no partial state behind.
    pub async fn matches(&self) -> Result<Arc<Vec<MatchRecord>>> {
        if let Some(snapshot) = self.snapshot.read().await.as_ref() {
            if snapshot.fetched_at.elapsed() < SNAPSHOT_TTL {
                return Ok(snapshot.matches.clone());
            }
        }

        let mut guard = self.snapshot.write().await;
        // Another request may have refreshed while we waited for the lock
        if let Some(snapshot) = guard.as_ref() {
            if snapshot.fetched_at.elapsed() < SNAPSHOT_TTL {
                return Ok(snapshot.matches.clone());
            }
        }

        let rows = self.sheets.fetch_rows().await?;
        let matches = Arc::new(matchcal_core::from_rows(rows));
        tracing::info!(total = matches.len(), "refreshed match snapshot");
        *guard = Some(Snapshot {
            matches: matches.clone(),
            fetched_at: Instant::now(),
        });
        Ok(matches)
    }
}
