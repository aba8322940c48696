//! Match records and row normalization.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::moment;

/// Cells a sheet row must populate to be kept at all.
const MIN_ROW_CELLS: usize = 5;

/// Category label used when the category cell is blank.
pub const DEFAULT_CATEGORY: &str = "Otros";

/// One scheduled competitive match, as published in the schedule sheet.
///
/// Records are immutable once built: every fetch cycle rebuilds the
/// whole collection from the sheet and discards the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// 1-based position within the kept rows of one fetch cycle.
    pub id: u32,
    /// Game title, e.g. "League of Legends".
    pub category: String,
    /// Localized date text, "`<day> <Spanish month>`"; may be empty.
    pub date: String,
    /// 24-hour "HH:MM", or "TBD" while undetermined.
    pub time: String,
    /// The two competing sides, free text.
    #[serde(rename = "match")]
    pub matchup: String,
    /// Tournament phase, e.g. "Cuartos de final".
    pub phase: String,
    /// Tournament or league name.
    pub competition: String,
    /// Free-text stream channel references.
    pub stream: String,
    /// Direct hyperlink supplied by the sheet, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
}

impl MatchRecord {
    /// The match moment in local time, or `None` when the date/time
    /// cells cannot be resolved. Recomputed on every call because the
    /// result depends on the current year.
    pub fn moment(&self) -> Option<NaiveDateTime> {
        moment::parse_moment(&self.date, &self.time).ok()
    }
}

/// Normalize a raw sheet grid into match records.
///
/// Rows shorter than five cells or with an empty category cell are
/// dropped without error. Ids number the kept rows from 1 in input
/// order. Missing trailing cells become empty strings; date and time
/// cells are taken as-is, with any problems deferred to the parser.
pub fn from_rows(rows: Vec<Vec<String>>) -> Vec<MatchRecord> {
    rows.into_iter()
        .filter(|row| row.len() >= MIN_ROW_CELLS && !row[0].is_empty())
        .enumerate()
        .map(|(index, row)| {
            let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
            let category = match cell(0) {
                c if c.is_empty() => DEFAULT_CATEGORY.to_string(),
                c => c,
            };
            MatchRecord {
                id: index as u32 + 1,
                category,
                date: cell(1),
                time: cell(2),
                matchup: cell(3),
                phase: cell(4),
                competition: cell(5),
                stream: cell(6),
                stream_url: row
                    .get(7)
                    .map(|url| url.trim().to_string())
                    .filter(|url| !url.is_empty()),
            }
        })
        .collect()
}
