//! End-to-end flows over the public API: classify, compress and roll
//! over a series the way the import tooling does.

use crate::calendar::{nd, ndt, CalendarManager, GapRule, TermCalendar, TermConfig};
use crate::error::Error;
use crate::json::JSON;
use crate::pattern::{compress_pattern, Occurrence};
use crate::rollover::rollover_occurrences;

fn calendar_2014() -> TermCalendar {
    TermCalendar::try_new(
        2014,
        vec![
            TermConfig::new("Michaelmas", nd(2014, 10, 7), 8),
            TermConfig::new("Lent", nd(2015, 1, 13), 8),
            TermConfig::new("Easter", nd(2015, 4, 21), 8),
        ],
        GapRule::Reject,
    )
    .unwrap()
}

fn calendar_2015() -> TermCalendar {
    TermCalendar::try_new(
        2015,
        vec![
            TermConfig::new("Michaelmas", nd(2015, 10, 6), 8),
            TermConfig::new("Lent", nd(2016, 1, 12), 8),
            TermConfig::new("Easter", nd(2016, 4, 19), 8),
        ],
        GapRule::Reject,
    )
    .unwrap()
}

/// A lecture series: Fridays 9:00-10:00 in Michaelmas weeks 1-4 and
/// Lent weeks 1-2.
fn lecture_series() -> Vec<Occurrence> {
    let fridays = [
        nd(2014, 10, 10),
        nd(2014, 10, 17),
        nd(2014, 10, 24),
        nd(2014, 10, 31),
        nd(2015, 1, 16),
        nd(2015, 1, 23),
    ];
    fridays
        .iter()
        .map(|d| {
            Occurrence::new(
                d.and_hms_opt(9, 0, 0).unwrap(),
                d.and_hms_opt(10, 0, 0).unwrap(),
            )
        })
        .collect()
}

#[test]
fn compress_series_across_terms() {
    let s = compress_pattern(&lecture_series(), &calendar_2014()).unwrap();
    assert_eq!(
        s,
        "Fri 09:00\u{2013}10:00, Michaelmas weeks 1-4; Fri 09:00\u{2013}10:00, Lent weeks 1-2"
    );
}

#[test]
fn rollover_preserves_the_pattern_string() {
    let from = calendar_2014();
    let to = calendar_2015();
    let series = lecture_series();

    let (rolled, diagnostics) = rollover_occurrences(&series, &from, &to).unwrap();
    assert!(diagnostics.is_empty());

    // The remapped series describes the same timetable in the new year.
    assert_eq!(
        compress_pattern(&series, &from).unwrap(),
        compress_pattern(&rolled, &to).unwrap()
    );

    // Spot-check the absolute shift: Michaelmas starts a day earlier in
    // 2015, but Friday of week 1 is still the Friday of week 1.
    assert_eq!(rolled[0].start, ndt(2015, 10, 9, 9, 0));
}

#[test]
fn rollover_there_and_back_is_identity() {
    let from = calendar_2014();
    let to = calendar_2015();
    let series = lecture_series();

    let (rolled, _) = rollover_occurrences(&series, &from, &to).unwrap();
    let (back, _) = rollover_occurrences(&rolled, &to, &from).unwrap();
    assert_eq!(back, series);
}

#[test]
fn manager_serves_shared_calendars() {
    let manager = CalendarManager::new();
    let cal = manager
        .get_or_try_insert_with(2714, || {
            TermCalendar::try_new(
                2714,
                vec![TermConfig::new("Michaelmas", nd(2014, 10, 7), 8)],
                GapRule::Reject,
            )
        })
        .unwrap();
    let occ = Occurrence::new(ndt(2014, 10, 13, 10, 0), ndt(2014, 10, 13, 11, 0));
    let s = compress_pattern(&[occ], &cal).unwrap();
    assert_eq!(s, "Mon 10:00\u{2013}11:00, Michaelmas week 1");
    // The same instance is handed out on the next lookup.
    assert!(std::sync::Arc::ptr_eq(&manager.get(2714).unwrap(), &cal));
}

#[test]
fn calendar_config_round_trips_through_json() {
    // The import scripts ship calendar definitions as JSON files.
    let js = r#"[
        {"name": "Michaelmas", "start": "2014-10-07", "length_weeks": 8},
        {"name": "Lent", "start": "2015-01-13", "length_weeks": 8},
        {"name": "Easter", "start": "2015-04-21", "length_weeks": 8}
    ]"#;
    let configs: Vec<TermConfig> = serde_json::from_str(js).unwrap();
    let cal = TermCalendar::try_new(2014, configs, GapRule::Reject).unwrap();
    assert_eq!(cal, calendar_2014());

    let js = cal.to_json().unwrap();
    assert_eq!(TermCalendar::from_json(&js).unwrap(), cal);
}

#[test]
fn mixed_quality_feed_is_reported_not_dropped() {
    let cal = calendar_2014();
    let mut series = lecture_series();
    // A vacation occurrence poisons the whole series.
    series.push(Occurrence::new(
        ndt(2014, 12, 25, 9, 0),
        ndt(2014, 12, 25, 10, 0),
    ));
    assert!(matches!(
        compress_pattern(&series, &cal).unwrap_err(),
        Error::OutOfTerm { .. }
    ));
    assert!(matches!(
        rollover_occurrences(&series, &cal, &cal).unwrap_err(),
        Error::OutOfTerm { .. }
    ));
}
