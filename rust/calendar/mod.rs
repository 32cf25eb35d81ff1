//! Model an academic year as an ordered set of named terms and convert
//! between absolute timestamps and term-relative positions.
//!
//! # Term calendars
//!
//! A [`TermCalendar`] holds the terms of one academic year. Each term is
//! configured with a name, a start date and a length in whole weeks;
//! boundaries are derived arithmetically so week `n` covers the seven
//! days starting `7 * (n - 1)` days after the term start. Weeks begin on
//! whichever weekday the term starts on.
//!
//! [`TermCalendar::decode`] maps a timestamp to a [`TermPosition`]
//! (term, week index, weekday, time of day) and
//! [`TermCalendar::encode`] inverts it. Timestamps before the first term
//! or after the last are out of term; dates in an inter-term vacation
//! are resolved per the calendar's explicit [`GapRule`].
//!
//! ### Example
//! ```rust
//! use chrono::Weekday;
//! use termtable::calendar::{nd, ndt, GapRule, TermCalendar, TermConfig};
//!
//! let cal = TermCalendar::try_new(
//!     2014,
//!     vec![
//!         TermConfig::new("Michaelmas", nd(2014, 10, 7), 8),
//!         TermConfig::new("Lent", nd(2015, 1, 13), 8),
//!     ],
//!     GapRule::Reject,
//! ).unwrap();
//!
//! let pos = cal.decode(&ndt(2014, 10, 20, 10, 0)).unwrap();
//! assert_eq!(pos.term.name, "Michaelmas");
//! assert_eq!(pos.week, 2);
//! assert_eq!(pos.weekday, Weekday::Mon);
//!
//! let ts = cal.encode("Michaelmas", 2, Weekday::Mon, pos.time).unwrap();
//! assert_eq!(ts, ndt(2014, 10, 20, 10, 0));
//! ```
//!
//! # Sharing calendars
//!
//! Calendars are immutable after construction and safe to share between
//! threads. The [`CalendarManager`] stores one calendar per academic
//! year process-wide and guarantees at-most-once construction per year.

mod manager;
mod term;
mod term_calendar;

pub use crate::calendar::{
    manager::CalendarManager,
    term::{GapRule, Term, TermConfig, TermRef},
    term_calendar::{nd, ndt, TermCalendar, TermPosition},
};
