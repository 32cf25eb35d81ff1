//! Pattern compression and calendar rollover for term-structured
//! academic timetables.
//!
//! The crate ingests discrete calendar occurrences (individual
//! lecture/event instances) belonging to a university's academic year
//! and derives two artifacts from them:
//!
//! - a compact textual description of the recurring pattern behind the
//!   occurrences, e.g. `"Mon 10:00–11:00, Michaelmas weeks 1-8"`, via
//!   [`pattern::compress_pattern`];
//! - a remapping of the occurrences onto another academic year's
//!   calendar that preserves term, week-in-term, weekday and time of
//!   day, via [`rollover::rollover_occurrences`].
//!
//! Both are pure computations over a per-year [`calendar::TermCalendar`]:
//! no I/O, no shared mutable state between calls, safe to run across
//! series or occurrences in parallel. Grouping occurrences into series,
//! persistence and time-zone normalization belong to the caller.

#[cfg(test)]
mod tests;

pub mod calendar;
pub mod error;
pub mod json;
pub mod pattern;
pub mod rollover;

pub use crate::calendar::{
    nd, ndt, CalendarManager, GapRule, Term, TermCalendar, TermConfig, TermPosition, TermRef,
};
pub use crate::error::Error;
pub use crate::json::JSON;
pub use crate::pattern::{
    classify, compress_pattern, Occurrence, Pattern, PatternKey, PatternSet, WeekSet,
};
pub use crate::rollover::{rollover_occurrence, rollover_occurrences, Diagnostic};
