//! Match schedule pipeline for matchcal.
//!
//! This crate holds the pure transformations between the schedule
//! sheet and the API surface:
//! - `record` for row normalization into typed match records
//! - `stream` for resolving free-text stream references into links
//! - `moment` for parsing the localized date/time cells
//! - `classify` for upcoming/past/undated display ordering
//! - `export` for the calendar export formats (deep links and .ics)

pub mod classify;
pub mod error;
pub mod export;
pub mod moment;
pub mod record;
pub mod stream;

// Re-export the main types at crate root for convenience
pub use classify::ALL_CATEGORIES;
pub use error::{MatchCalError, MatchCalResult};
pub use record::{MatchRecord, from_rows};
pub use stream::{Platform, StreamLink};
