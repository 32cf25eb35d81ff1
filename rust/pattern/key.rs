use chrono::prelude::*;
use log::warn;
use serde::Serialize;

use crate::calendar::{TermCalendar, TermRef};
use crate::error::Error;
use crate::pattern::Occurrence;

/// The classification of one occurrence: the weekday/time slot it
/// occupies and the term week it falls in.
///
/// Derived from an [`Occurrence`] via [`classify`], never stored
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternKey {
    /// The weekday of the occurrence.
    pub weekday: Weekday,
    /// The time of day the occurrence starts.
    pub start: NaiveTime,
    /// The time of day the occurrence ends.
    pub end: NaiveTime,
    /// The term the occurrence falls in.
    pub term: TermRef,
    /// The 1-based week index within the term.
    pub week: i8,
}

/// Classify an occurrence against a term calendar.
///
/// Start and end must share a calendar date; reversed start/end times are
/// a tolerated upstream data defect and are swapped with a warning rather
/// than failing.
///
/// # Errors
///
/// Returns [`Error::CrossMidnight`] if the start and end fall on
/// different dates, or any error from [`TermCalendar::decode`] for the
/// start timestamp.
pub fn classify(calendar: &TermCalendar, occurrence: &Occurrence) -> Result<PatternKey, Error> {
    if occurrence.start.date() != occurrence.end.date() {
        return Err(Error::CrossMidnight {
            start: occurrence.start,
            end: occurrence.end,
        });
    }
    let (start, end) = if occurrence.start <= occurrence.end {
        (occurrence.start, occurrence.end)
    } else {
        warn!(
            "occurrence starts {} after it ends {}, swapping",
            occurrence.start, occurrence.end
        );
        (occurrence.end, occurrence.start)
    };
    let pos = calendar.decode(&start)?;
    Ok(PatternKey {
        weekday: pos.weekday,
        start: pos.time,
        end: end.time(),
        term: pos.term,
        week: pos.week,
    })
}
