use chrono::prelude::*;
use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::calendar::{GapRule, Term, TermConfig, TermRef};
use crate::error::Error;

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month`, `day` are invalid.")
}

/// Create a `NaiveDateTime` with the given wall-clock time.
///
/// Panics if date or time values are invalid.
pub fn ndt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    nd(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("`hour`, `minute` are invalid.")
}

/// A term-relative position: the decoded form of an absolute timestamp.
///
/// Week indices are 1-based and term-relative. Under
/// [`GapRule::PrecedingTerm`] the week may exceed the term's configured
/// length, and under [`GapRule::FollowingTerm`] it may be zero or
/// negative; `encode` accepts neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermPosition {
    /// The term the timestamp was assigned to.
    pub term: TermRef,
    /// The 1-based week index within the term.
    pub week: i8,
    /// The weekday of the timestamp.
    pub weekday: Weekday,
    /// The time of day of the timestamp.
    pub time: NaiveTime,
}

/// The full ordered set of [`Term`]s for one academic year.
///
/// Looked up by academic year when needed, and safely shared for
/// concurrent reads; all methods take `&self` and the calendar is
/// immutable after construction. Deserialization re-validates through
/// [`TermCalendar::try_new`], so a calendar read from external JSON
/// upholds the same invariants as a constructed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTermCalendar")]
pub struct TermCalendar {
    year: u16,
    terms: Vec<Term>,
    gap_rule: GapRule,
}

// Mirrors the serialized shape of `TermCalendar`; only `try_from` turns
// it into a calendar, so every deserialized calendar passes validation.
#[derive(Deserialize)]
struct RawTermCalendar {
    year: u16,
    terms: Vec<Term>,
    gap_rule: GapRule,
}

impl TryFrom<RawTermCalendar> for TermCalendar {
    type Error = Error;

    fn try_from(raw: RawTermCalendar) -> Result<Self, Self::Error> {
        let configs = raw
            .terms
            .into_iter()
            .map(|t| TermConfig {
                name: t.name,
                start: t.start,
                length_weeks: t.length_weeks,
            })
            .collect();
        TermCalendar::try_new(raw.year, configs, raw.gap_rule)
    }
}

impl TermCalendar {
    /// Build the calendar for one academic year from an ordered list of
    /// term configurations and an explicit inter-term gap rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCalendar`] if the list is empty, a term
    /// has zero length, or the terms are not in chronological order with
    /// each term ending on or before the next one starts.
    pub fn try_new(year: u16, configs: Vec<TermConfig>, gap_rule: GapRule) -> Result<Self, Error> {
        if configs.is_empty() {
            return Err(Error::InvalidCalendar {
                year,
                reason: "no terms configured".to_string(),
            });
        }
        let mut terms: Vec<Term> = Vec::with_capacity(configs.len());
        for (i, config) in configs.into_iter().enumerate() {
            if config.length_weeks == 0 {
                return Err(Error::InvalidCalendar {
                    year,
                    reason: format!("term {} has zero length", config.name),
                });
            }
            let term = Term {
                name: config.name,
                ordinal: i as u8 + 1,
                start: config.start,
                length_weeks: config.length_weeks,
            };
            if let Some(previous) = terms.last() {
                if term.start < previous.end() {
                    return Err(Error::InvalidCalendar {
                        year,
                        reason: format!(
                            "term {} starts {} before term {} ends {}",
                            term.name,
                            term.start,
                            previous.name,
                            previous.end()
                        ),
                    });
                }
            }
            terms.push(term);
        }
        Ok(TermCalendar {
            year,
            terms,
            gap_rule,
        })
    }

    /// Returns the academic year this calendar covers.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Returns the terms in chronological order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the configured inter-term gap rule.
    pub fn gap_rule(&self) -> GapRule {
        self.gap_rule
    }

    /// Returns the term with the given name, if configured.
    pub fn term(&self, name: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.name == name)
    }

    /// Decode an absolute timestamp into a term-relative position.
    ///
    /// Weeks are counted in whole-week steps from the containing term's
    /// start date. Dates inside an inter-term gap are resolved per the
    /// calendar's [`GapRule`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfTerm`] if the timestamp precedes the first
    /// term's start, follows the last term's end, or falls in a gap on a
    /// [`GapRule::Reject`] calendar.
    pub fn decode(&self, timestamp: &NaiveDateTime) -> Result<TermPosition, Error> {
        let date = timestamp.date();
        let out_of_term = || Error::OutOfTerm {
            year: self.year,
            timestamp: *timestamp,
        };
        // The constructor guarantees at least one term.
        let idx = self
            .terms
            .iter()
            .rposition(|t| t.start <= date)
            .ok_or_else(|| out_of_term())?;
        let term = &self.terms[idx];
        if !term.contains(date) {
            // In the gap after `term`, or past the end of the year.
            if idx == self.terms.len() - 1 {
                return Err(out_of_term());
            }
            match self.gap_rule {
                GapRule::Reject => return Err(out_of_term()),
                GapRule::PrecedingTerm => {}
                GapRule::FollowingTerm => {
                    return Ok(Self::position(&self.terms[idx + 1], timestamp))
                }
            }
        }
        Ok(Self::position(term, timestamp))
    }

    fn position(term: &Term, timestamp: &NaiveDateTime) -> TermPosition {
        let days = (timestamp.date() - term.start).num_days();
        // Euclidean division keeps leading (negative-offset) weeks whole.
        let week = days.div_euclid(7) as i8 + 1;
        TermPosition {
            term: TermRef::from(term),
            week,
            weekday: timestamp.weekday(),
            time: timestamp.time(),
        }
    }

    /// Encode a term-relative position back into an absolute timestamp.
    ///
    /// The resulting date is the requested weekday within week `week`,
    /// where each week begins on the weekday of the term's start date.
    /// Inverse of [`TermCalendar::decode`] for in-term timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TermMismatch`] if the term name is not configured
    /// in this calendar, or [`Error::InvalidWeek`] if `week` lies outside
    /// `1..=length_weeks`.
    pub fn encode(
        &self,
        term_name: &str,
        week: i8,
        weekday: Weekday,
        time: NaiveTime,
    ) -> Result<NaiveDateTime, Error> {
        let term = self.term(term_name).ok_or_else(|| Error::TermMismatch {
            term: term_name.to_string(),
            year: self.year,
        })?;
        if week < 1 || week as u8 > term.length_weeks {
            return Err(Error::InvalidWeek {
                term: term.name.clone(),
                week,
                length_weeks: term.length_weeks,
            });
        }
        let week_start = term.start + Days::new((week as u64 - 1) * 7);
        let offset =
            (weekday.num_days_from_monday() + 7 - week_start.weekday().num_days_from_monday()) % 7;
        Ok((week_start + Days::new(u64::from(offset))).and_time(time))
    }
}
