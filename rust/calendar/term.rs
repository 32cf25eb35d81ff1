use chrono::prelude::*;
use chrono::Days;
use serde::{Deserialize, Serialize};

/// One entry of the external calendar configuration for an academic year.
///
/// The persistence layer supplies an ordered list of these per academic
/// year; [`TermCalendar::try_new`](crate::calendar::TermCalendar::try_new)
/// derives term boundaries from them by whole-week arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermConfig {
    /// The term name, e.g. "Michaelmas".
    pub name: String,
    /// The date of the first day of the term's first week.
    pub start: NaiveDate,
    /// The term length in whole weeks.
    pub length_weeks: u8,
}

impl TermConfig {
    /// Create a configuration entry.
    pub fn new(name: &str, start: NaiveDate, length_weeks: u8) -> Self {
        TermConfig {
            name: name.to_string(),
            start,
            length_weeks,
        }
    }
}

/// The boundary rule for dates falling in an inter-term gap (vacation).
///
/// Every calendar must state its rule explicitly; there is no default.
/// The rule only affects `decode` — `encode` always rejects week indices
/// outside a term's configured length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapRule {
    /// Classify gap dates as out-of-term.
    Reject,
    /// Assign gap dates to the preceding term's trailing weeks; the week
    /// index continues past the term's configured length.
    PrecedingTerm,
    /// Assign gap dates to the following term's leading weeks; the week
    /// index is zero or negative, counting back from the term's start.
    FollowingTerm,
}

/// A named sub-period of an academic year with a fixed start date and
/// number of weeks.
///
/// Constructed once per academic year from external configuration and
/// immutable thereafter. Week `n` of a term covers the seven days
/// starting at `start + (n - 1) * 7` days, so weeks begin on whichever
/// weekday the term itself starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub(crate) name: String,
    pub(crate) ordinal: u8,
    pub(crate) start: NaiveDate,
    pub(crate) length_weeks: u8,
}

impl Term {
    /// Returns the term name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the term's 1-based position within its academic year.
    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    /// Returns the date of the first day of the term's first week.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the term length in whole weeks.
    pub fn length_weeks(&self) -> u8 {
        self.length_weeks
    }

    /// Returns the first date after the term's last week.
    pub fn end(&self) -> NaiveDate {
        self.start + Days::new(u64::from(self.length_weeks) * 7)
    }

    /// Returns whether the date falls within the term's configured weeks.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end()
    }
}

/// The slice of term identity a decoded position or [`Pattern`] carries:
/// the name for equality across calendars and the start date for
/// chronological ordering within one calendar.
///
/// [`Pattern`]: crate::pattern::Pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermRef {
    /// The term name.
    pub name: String,
    /// The term's start date in the calendar that produced this reference.
    pub start: NaiveDate,
}

impl From<&Term> for TermRef {
    fn from(term: &Term) -> Self {
        TermRef {
            name: term.name.clone(),
            start: term.start,
        }
    }
}
