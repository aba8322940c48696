//! .ics generation for match events.

use chrono::Utc;
use icalendar::{Calendar, Component, EventLike};
use uuid::Uuid;

use crate::error::MatchCalResult;
use crate::record::MatchRecord;

use super::{EVENT_LOCATION, event_details, format_compact};

/// Generate a single-event VCALENDAR for a match.
///
/// The UID mixes the record id with a fresh uuid so repeated downloads
/// of the same match import as distinct events; everything else is
/// deterministic for a fixed record and clock.
pub fn event_ics(record: &MatchRecord) -> MatchCalResult<String> {
    let details = event_details(record)?;

    let mut event = icalendar::Event::new();
    event.uid(&format!("match-{}-{}@matchcal", record.id, Uuid::new_v4()));
    event.add_property("DTSTAMP", format_compact(Utc::now()));
    event.add_property("DTSTART", format_compact(details.start));
    event.add_property("DTEND", format_compact(details.end));
    event.summary(&details.title);
    event.description(&details.description);
    event.location(EVENT_LOCATION);

    let mut cal = Calendar::new();
    cal.push(event.done());
    let cal = cal.done();

    Ok(strip_generator_bloat(&cal.to_string()))
}

/// Clean up ICS output from the icalendar crate:
/// - brand the PRODID
/// - remove CALSCALE:GREGORIAN (it's the default)
fn strip_generator_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:MATCHCAL\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
