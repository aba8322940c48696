//! Calendar export formats for a match.
//!
//! A schedule entry can be exported three ways: a Google Calendar
//! template URL, an Outlook web deep link, and a downloadable .ics
//! file. All three share the same resolved timing and copy; none is
//! produced at all when the match has no resolvable date/time.

mod ics;
mod links;

pub use ics::event_ics;
pub use links::{CalendarLinks, event_links};

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};

use crate::error::{MatchCalError, MatchCalResult};
use crate::moment;
use crate::record::MatchRecord;

/// Exported events block this long on the calendar.
const EVENT_DURATION_HOURS: i64 = 2;

/// Matches are broadcast, not attended.
const EVENT_LOCATION: &str = "Online";

/// Resolved timing and copy for one exportable match.
struct EventDetails {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    title: String,
    description: String,
}

fn event_details(record: &MatchRecord) -> MatchCalResult<EventDetails> {
    let local = moment::parse_moment(&record.date, &record.time)?;
    let start = to_utc(local)?;
    let end = start + Duration::hours(EVENT_DURATION_HOURS);
    Ok(EventDetails {
        start,
        end,
        title: format!("{} - {}", record.matchup, record.category),
        description: format!(
            "{} - {}\n\nStream: {}",
            record.phase, record.competition, record.stream
        ),
    })
}

/// Interpret a parsed sheet moment as local wall-clock time.
fn to_utc(local: NaiveDateTime) -> MatchCalResult<DateTime<Utc>> {
    Local
        .from_local_datetime(&local)
        .earliest()
        .map(|moment| moment.with_timezone(&Utc))
        .ok_or_else(|| {
            MatchCalError::InvalidMoment(format!("{local} does not exist in the local timezone"))
        })
}

/// Compact UTC "basic" timestamp shared by all three export formats.
fn format_compact(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}
