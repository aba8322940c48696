//! Google Sheets client for the matchcal schedule source.
//!
//! The schedule is maintained by hand in a shared spreadsheet; this
//! crate reads its cell grid through the Sheets values API and hands
//! the raw rows to `matchcal-core` for normalization.

pub mod client;
pub mod config;

pub use client::SheetsClient;
pub use config::SheetsConfig;
