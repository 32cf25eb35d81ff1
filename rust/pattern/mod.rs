//! Compress a series of discrete occurrences into the fewest equivalent
//! range-based weekly patterns and render them as text.
//!
//! Every occurrence is classified into a [`PatternKey`] (weekday, start
//! and end times, term, week index), seeded into a [`PatternSet`] as a
//! single-week [`Pattern`], and merged to a fixed point: a pass scans the
//! collection once, merging each pattern into the first already-placed
//! pattern that shares its slot and touches its week span, and passes
//! repeat until one merges nothing. The converged patterns are sorted
//! and rendered, so the output string depends only on the multiset of
//! occurrences.
//!
//! ### Example
//! ```rust
//! use termtable::calendar::{nd, ndt, GapRule, TermCalendar, TermConfig};
//! use termtable::pattern::{compress_pattern, Occurrence};
//!
//! let cal = TermCalendar::try_new(
//!     2014,
//!     vec![TermConfig::new("Michaelmas", nd(2014, 10, 7), 8)],
//!     GapRule::Reject,
//! ).unwrap();
//!
//! // Mondays 10:00-11:00 in weeks 1, 2 and 3.
//! let occurrences: Vec<Occurrence> = [13, 20, 27]
//!     .iter()
//!     .map(|&d| Occurrence::new(ndt(2014, 10, d, 10, 0), ndt(2014, 10, d, 11, 0)))
//!     .collect();
//!
//! let s = compress_pattern(&occurrences, &cal).unwrap();
//! assert_eq!(s, "Mon 10:00\u{2013}11:00, Michaelmas weeks 1-3");
//! ```

mod key;
mod occurrence;
mod pattern;
mod set;

pub use crate::pattern::{
    key::{classify, PatternKey},
    occurrence::Occurrence,
    pattern::{Pattern, WeekSet},
    set::{compress_pattern, PatternSet},
};
