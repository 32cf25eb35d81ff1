//! Error types for the termtable crate.

use chrono::NaiveDateTime;

/// Error type for all fallible operations in the termtable crate.
///
/// Each variant carries the offending values so that callers processing
/// whole batches of series can report which occurrence or calendar entry
/// caused the failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a timestamp precedes the first term's start or
    /// follows the last term's end of an academic year, or falls in an
    /// inter-term gap on a calendar configured with [`GapRule::Reject`].
    ///
    /// [`GapRule::Reject`]: crate::calendar::GapRule
    #[error("timestamp {timestamp} falls outside every term of academic year {year}")]
    OutOfTerm {
        /// The academic year whose calendar was consulted.
        year: u16,
        /// The timestamp that could not be placed in a term.
        timestamp: NaiveDateTime,
    },

    /// Returned when an encode is requested with a week index outside the
    /// term's configured length. Signals a calendar mismatch between
    /// years during rollover.
    #[error("invalid week {week} for term {term} (must be 1..={length_weeks})")]
    InvalidWeek {
        /// The term for which the week index is invalid.
        term: String,
        /// The requested week index.
        week: i8,
        /// The term's configured length in weeks.
        length_weeks: u8,
    },

    /// Returned when an occurrence's start and end fall on different
    /// calendar dates. Occurrences spanning midnight are a data-quality
    /// defect and are rejected rather than guessed at.
    #[error("occurrence spans midnight: starts {start}, ends {end}")]
    CrossMidnight {
        /// The occurrence's start timestamp.
        start: NaiveDateTime,
        /// The occurrence's end timestamp.
        end: NaiveDateTime,
    },

    /// Returned when a calendar lacks a term name that another calendar
    /// produced during decode. Mismatched term sets between years are a
    /// configuration error.
    #[error("term {term} does not exist in the calendar for academic year {year}")]
    TermMismatch {
        /// The term name that could not be found.
        term: String,
        /// The academic year whose calendar lacks the term.
        year: u16,
    },

    /// Returned when a calendar definition violates the term invariants:
    /// no terms at all, terms out of chronological order, or overlapping
    /// terms.
    #[error("invalid calendar for academic year {year}: {reason}")]
    InvalidCalendar {
        /// The academic year of the rejected definition.
        year: u16,
        /// Why the definition was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ndt;

    #[test]
    fn error_out_of_term() {
        let err = Error::OutOfTerm {
            year: 2014,
            timestamp: ndt(2014, 9, 1, 10, 0),
        };
        assert_eq!(
            err.to_string(),
            "timestamp 2014-09-01 10:00:00 falls outside every term of academic year 2014"
        );
    }

    #[test]
    fn error_invalid_week() {
        let err = Error::InvalidWeek {
            term: "Michaelmas".to_string(),
            week: 9,
            length_weeks: 8,
        };
        assert_eq!(
            err.to_string(),
            "invalid week 9 for term Michaelmas (must be 1..=8)"
        );
    }

    #[test]
    fn error_cross_midnight() {
        let err = Error::CrossMidnight {
            start: ndt(2014, 10, 13, 23, 0),
            end: ndt(2014, 10, 14, 1, 0),
        };
        assert_eq!(
            err.to_string(),
            "occurrence spans midnight: starts 2014-10-13 23:00:00, ends 2014-10-14 01:00:00"
        );
    }

    #[test]
    fn error_term_mismatch() {
        let err = Error::TermMismatch {
            term: "Easter".to_string(),
            year: 2015,
        };
        assert_eq!(
            err.to_string(),
            "term Easter does not exist in the calendar for academic year 2015"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<Error>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Error>();
    }
}
