//! Display ordering of the match collection.

use chrono::NaiveDateTime;

use crate::record::MatchRecord;

/// Category filter value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Whether a match is already over, relative to `now`.
///
/// A match exactly at `now` counts as past. This is the single
/// comparison used for both bucketing and display dimming.
pub fn is_past(moment: NaiveDateTime, now: NaiveDateTime) -> bool {
    moment <= now
}

/// Filter by category and order for display: upcoming matches first
/// (soonest first), then past matches (most recent first), then
/// matches whose date or time could not be resolved, in their input
/// order.
pub fn order_for_display(
    matches: &[MatchRecord],
    category: &str,
    now: NaiveDateTime,
) -> Vec<MatchRecord> {
    let mut upcoming: Vec<(NaiveDateTime, &MatchRecord)> = Vec::new();
    let mut past: Vec<(NaiveDateTime, &MatchRecord)> = Vec::new();
    let mut undated: Vec<&MatchRecord> = Vec::new();

    for record in matches {
        if category != ALL_CATEGORIES && record.category != category {
            continue;
        }
        match record.moment() {
            Some(moment) if is_past(moment, now) => past.push((moment, record)),
            Some(moment) => upcoming.push((moment, record)),
            None => undated.push(record),
        }
    }

    upcoming.sort_by_key(|(moment, _)| *moment);
    past.sort_by(|a, b| b.0.cmp(&a.0));

    upcoming
        .into_iter()
        .map(|(_, record)| record)
        .chain(past.into_iter().map(|(_, record)| record))
        .chain(undated)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Local, NaiveDate};

    fn record(id: u32, category: &str, date: &str, time: &str) -> MatchRecord {
        MatchRecord {
            id,
            category: category.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            matchup: format!("match {id}"),
            phase: String::new(),
            competition: String::new(),
            stream: String::new(),
            stream_url: None,
        }
    }

    // Mid-year noon in the current year, so that parsed moments and
    // `now` agree on the year without sitting near its boundary.
    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(Local::now().year(), 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_upcoming_then_past_then_undated() {
        let now = fixed_now();
        let matches = vec![
            record(1, "LoL", "15 junio", "11:00"), // one hour past
            record(2, "LoL", "15 junio", "13:00"), // one hour ahead
            record(3, "LoL", "", "TBD"),           // unresolvable
        ];
        let ordered = order_for_display(&matches, ALL_CATEGORIES, now);
        let ids: Vec<u32> = ordered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_upcoming_ascending_past_descending() {
        let now = fixed_now();
        let matches = vec![
            record(1, "LoL", "17 junio", "12:00"),
            record(2, "LoL", "13 junio", "12:00"),
            record(3, "LoL", "16 junio", "12:00"),
            record(4, "LoL", "14 junio", "12:00"),
        ];
        let ordered = order_for_display(&matches, ALL_CATEGORIES, now);
        let ids: Vec<u32> = ordered.iter().map(|m| m.id).collect();
        // Soonest upcoming first, then most recent past first
        assert_eq!(ids, vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_moment_exactly_now_is_past() {
        let now = fixed_now();
        let matches = vec![record(1, "LoL", "15 junio", "12:00")];
        let ordered = order_for_display(&matches, ALL_CATEGORIES, now);
        assert_eq!(ordered[0].id, 1);
        assert!(is_past(ordered[0].moment().unwrap(), now));
    }

    #[test]
    fn test_category_filter_is_exact() {
        let now = fixed_now();
        let matches = vec![
            record(1, "LoL", "15 junio", "13:00"),
            record(2, "VALORANT", "15 junio", "14:00"),
            record(3, "LoL", "15 junio", "15:00"),
        ];
        let ordered = order_for_display(&matches, "LoL", now);
        let ids: Vec<u32> = ordered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(order_for_display(&matches, "lol", now).is_empty());
    }

    #[test]
    fn test_all_keeps_every_category() {
        let now = fixed_now();
        let matches = vec![
            record(1, "LoL", "15 junio", "13:00"),
            record(2, "VALORANT", "15 junio", "14:00"),
        ];
        assert_eq!(order_for_display(&matches, ALL_CATEGORIES, now).len(), 2);
    }

    #[test]
    fn test_undated_keep_input_order() {
        let now = fixed_now();
        let matches = vec![
            record(1, "LoL", "", "20:00"),
            record(2, "LoL", "15 junio", "TBD"),
            record(3, "LoL", "31 febrero", "20:00"),
        ];
        let ordered = order_for_display(&matches, ALL_CATEGORIES, now);
        let ids: Vec<u32> = ordered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
