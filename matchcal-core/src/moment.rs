//! Parsing of the sheet's localized date and time cells.
//!
//! Dates arrive as "`<day> <month name>`" with a full Spanish month
//! name and no year (e.g. "25 Diciembre"); times as 24-hour "HH:MM" or
//! the sentinel "TBD" when the slot is not scheduled yet.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{MatchCalError, MatchCalResult};

/// Sentinel meaning the match time is not determined yet.
pub const TBD: &str = "TBD";

/// Spanish month names in calendar order. Lookup is case-insensitive.
const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Resolve a Spanish month name to its 1-based month number.
fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    MONTHS
        .iter()
        .position(|month| *month == name)
        .map(|index| index as u32 + 1)
}

/// Parse a date/time cell pair into a local timestamp.
///
/// The sheet carries no year, so the current calendar year is assumed.
/// That mis-schedules matches across a year boundary (a December match
/// evaluated in January lands a year off); callers re-parse on every
/// evaluation instead of caching results so the assumption at least
/// tracks the clock.
pub fn parse_moment(date: &str, time: &str) -> MatchCalResult<NaiveDateTime> {
    parse_moment_in_year(date, time, Local::now().year())
}

/// Same as [`parse_moment`] with the year pinned.
pub fn parse_moment_in_year(date: &str, time: &str, year: i32) -> MatchCalResult<NaiveDateTime> {
    let date = date.trim();
    let time = time.trim();

    if date.is_empty() {
        return Err(MatchCalError::MissingDate);
    }
    if time.is_empty() {
        return Err(MatchCalError::MissingTime);
    }
    if time.eq_ignore_ascii_case(TBD) {
        return Err(MatchCalError::TimeUndetermined);
    }

    let mut tokens = date.split(' ');
    let (day_text, month_name) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(day), Some(month), None) => (day, month),
        _ => {
            return Err(MatchCalError::InvalidMoment(format!(
                "expected \"<day> <month>\", got \"{date}\""
            )));
        }
    };

    let month = month_number(month_name)
        .ok_or_else(|| MatchCalError::UnknownMonth(month_name.to_string()))?;
    let day: u32 = day_text.parse().map_err(|_| {
        MatchCalError::InvalidMoment(format!("day \"{day_text}\" is not a number"))
    })?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        MatchCalError::InvalidMoment(format!("{year}-{month:02}-{day:02} is not a calendar date"))
    })?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| MatchCalError::InvalidMoment(format!("time \"{time}\" is not HH:MM")))?;

    Ok(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_day_and_spanish_month() {
        let moment = parse_moment_in_year("25 diciembre", "20:00", 2026).unwrap();
        assert_eq!(
            moment,
            NaiveDate::from_ymd_opt(2026, 12, 25)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_month_lookup_is_case_insensitive() {
        let upper = parse_moment_in_year("5 Enero", "09:30", 2026).unwrap();
        let lower = parse_moment_in_year("5 enero", "09:30", 2026).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.date(), NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
    }

    #[test]
    fn test_current_year_is_assumed() {
        let moment = parse_moment("25 diciembre", "20:00").unwrap();
        assert_eq!(moment.year(), Local::now().year());
    }

    #[test]
    fn test_tbd_time_is_undetermined() {
        assert!(matches!(
            parse_moment_in_year("5 enero", "TBD", 2026),
            Err(MatchCalError::TimeUndetermined)
        ));
        // Sentinel match is case-insensitive
        assert!(matches!(
            parse_moment_in_year("5 enero", "tbd", 2026),
            Err(MatchCalError::TimeUndetermined)
        ));
    }

    #[test]
    fn test_empty_cells_are_rejected() {
        assert!(matches!(
            parse_moment_in_year("", "20:00", 2026),
            Err(MatchCalError::MissingDate)
        ));
        assert!(matches!(
            parse_moment_in_year("  ", "20:00", 2026),
            Err(MatchCalError::MissingDate)
        ));
        assert!(matches!(
            parse_moment_in_year("25 diciembre", "", 2026),
            Err(MatchCalError::MissingTime)
        ));
    }

    #[test]
    fn test_unknown_month_is_rejected() {
        assert!(matches!(
            parse_moment_in_year("25 december", "20:00", 2026),
            Err(MatchCalError::UnknownMonth(_))
        ));
    }

    #[test]
    fn test_date_must_be_two_tokens() {
        assert!(parse_moment_in_year("25 de diciembre", "20:00", 2026).is_err());
        assert!(parse_moment_in_year("diciembre", "20:00", 2026).is_err());
    }

    #[test]
    fn test_impossible_calendar_date_is_rejected() {
        assert!(matches!(
            parse_moment_in_year("31 febrero", "20:00", 2026),
            Err(MatchCalError::InvalidMoment(_))
        ));
    }

    #[test]
    fn test_malformed_time_is_rejected() {
        assert!(parse_moment_in_year("25 diciembre", "25:99", 2026).is_err());
        assert!(parse_moment_in_year("25 diciembre", "8pm", 2026).is_err());
    }

    #[test]
    fn test_malformed_day_is_rejected() {
        assert!(parse_moment_in_year("veinticinco diciembre", "20:00", 2026).is_err());
    }
}
