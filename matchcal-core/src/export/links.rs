//! Calendar deep links (Google Calendar and Outlook web).

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::error::MatchCalResult;
use crate::record::MatchRecord;

use super::{EVENT_LOCATION, event_details, format_compact};

const GOOGLE_RENDER_URL: &str = "https://calendar.google.com/calendar/render";
const OUTLOOK_COMPOSE_URL: &str = "https://outlook.live.com/calendar/0/deeplink/compose";

/// Characters left bare in an encoded query component.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

/// Prefilled "add to calendar" URLs for one match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarLinks {
    pub google_url: String,
    pub outlook_url: String,
}

/// Build both deep links, or fail when the match has no resolvable
/// date/time. The output is deterministic for a fixed record and clock
/// year.
pub fn event_links(record: &MatchRecord) -> MatchCalResult<CalendarLinks> {
    let details = event_details(record)?;
    let start = format_compact(details.start);
    let end = format_compact(details.end);

    let google_url = format!(
        "{GOOGLE_RENDER_URL}?action=TEMPLATE&text={}&dates={start}/{end}&details={}&location={}",
        encode(&details.title),
        encode(&details.description),
        encode(EVENT_LOCATION),
    );

    let outlook_url = format!(
        "{OUTLOOK_COMPOSE_URL}?subject={}&startdt={start}&enddt={end}&body={}&location={}",
        encode(&details.title),
        encode(&details.description),
        encode(EVENT_LOCATION),
    );

    Ok(CalendarLinks {
        google_url,
        outlook_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MatchRecord {
        MatchRecord {
            id: 3,
            category: "LoL".to_string(),
            date: "15 junio".to_string(),
            time: "18:00".to_string(),
            matchup: "KOI vs G2".to_string(),
            phase: "Final".to_string(),
            competition: "LEC".to_string(),
            stream: "caedrel".to_string(),
            stream_url: None,
        }
    }

    #[test]
    fn test_google_link_shape() {
        let links = event_links(&record()).unwrap();
        assert!(
            links
                .google_url
                .starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE&text="),
            "unexpected google url: {}",
            links.google_url
        );
        // Free text is percent-encoded, spaces included
        assert!(links.google_url.contains("text=KOI%20vs%20G2%20-%20LoL"));
        assert!(links.google_url.contains("%0A%0AStream%3A%20caedrel"));
        assert!(links.google_url.contains("&location=Online"));
        // Start and end are separated by a literal slash
        assert!(links.google_url.contains("Z/"));
    }

    #[test]
    fn test_outlook_link_shape() {
        let links = event_links(&record()).unwrap();
        assert!(
            links
                .outlook_url
                .starts_with("https://outlook.live.com/calendar/0/deeplink/compose?subject="),
            "unexpected outlook url: {}",
            links.outlook_url
        );
        assert!(links.outlook_url.contains("&startdt="));
        assert!(links.outlook_url.contains("&enddt="));
        assert!(links.outlook_url.contains("&body=Final%20-%20LEC"));
        assert!(links.outlook_url.contains("&location=Online"));
    }

    #[test]
    fn test_links_are_deterministic() {
        let record = record();
        assert_eq!(event_links(&record).unwrap(), event_links(&record).unwrap());
    }

    #[test]
    fn test_ampersand_in_copy_is_encoded() {
        let mut rec = record();
        rec.matchup = "KOI & friends".to_string();
        let links = event_links(&rec).unwrap();
        assert!(links.google_url.contains("text=KOI%20%26%20friends"));
    }

    #[test]
    fn test_unresolvable_record_yields_no_links() {
        let mut rec = record();
        rec.time = "TBD".to_string();
        assert!(event_links(&rec).is_err());
    }
}
