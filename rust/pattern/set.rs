use chrono::prelude::*;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::calendar::TermCalendar;
use crate::error::Error;
use crate::pattern::{classify, Occurrence, Pattern, PatternKey, WeekSet};

/// The working collection of [`Pattern`]s for one series, driven to a
/// fixed point by repeated merge passes.
///
/// Owned exclusively by the caller for the duration of one compression
/// run; no state survives the run.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a classified occurrence as a single-week pattern.
    pub fn add(&mut self, key: PatternKey) {
        self.patterns.push(Pattern::from_key(key));
    }

    /// Try to merge `pattern` into the patterns already placed in `out`,
    /// appending it unmerged if no placed pattern accepts it.
    ///
    /// Returns `true` if a merge took place.
    fn merge_into(out: &mut Vec<Pattern>, pattern: Pattern) -> bool {
        for placed in out.iter_mut() {
            if placed.can_merge(&pattern) {
                *placed = placed.merge(&pattern);
                return true;
            }
        }
        out.push(pattern);
        false
    }

    /// Run one merge pass: scan the input once, merging each pattern into
    /// the pass output where possible.
    ///
    /// A single pass is not sufficient in general — a merge can create a
    /// pattern that only a later pass can combine further — so the
    /// caller repeats passes until one merges nothing.
    fn merge_pass(input: Vec<Pattern>) -> (Vec<Pattern>, bool) {
        let mut out: Vec<Pattern> = Vec::with_capacity(input.len());
        let mut merged = false;
        for pattern in input {
            merged |= Self::merge_into(&mut out, pattern);
        }
        (out, merged)
    }

    /// Merge to a fixed point and return the patterns in their final
    /// order.
    ///
    /// Termination: each pass either strictly shrinks the collection or
    /// reports no merge and ends the loop. The final sort makes the
    /// result independent of scan order: terms chronologically, then
    /// minimum week, then weekday, then times.
    pub fn compress(self) -> Vec<Pattern> {
        let mut patterns = self.patterns;
        loop {
            let (next, merged) = Self::merge_pass(patterns);
            patterns = next;
            if !merged {
                break;
            }
        }
        patterns.sort_by_key(|p| {
            (
                p.term.start,
                p.weeks.min(),
                p.weekday.num_days_from_monday(),
                p.start,
                p.end,
            )
        });
        patterns
    }

    /// Compress and render the final pattern string.
    ///
    /// Patterns sharing a term and weekday/time slot are grouped into one
    /// segment with their week ranges comma-joined (`"weeks 1-3, 5-6"`);
    /// `week` is singular when a segment covers exactly one week.
    /// Segments are `"; "`-joined in calendar order.
    pub fn into_pattern_string(self) -> String {
        let mut groups: IndexMap<(String, Weekday, NaiveTime, NaiveTime), WeekSet> =
            IndexMap::new();
        for pattern in self.compress() {
            let key = (
                pattern.term.name,
                pattern.weekday,
                pattern.start,
                pattern.end,
            );
            match groups.get_mut(&key) {
                Some(weeks) => *weeks = weeks.union(&pattern.weeks),
                None => {
                    groups.insert(key, pattern.weeks);
                }
            }
        }
        groups
            .iter()
            .map(|((term, weekday, start, end), weeks)| {
                let label = if weeks.len() == 1 { "week" } else { "weeks" };
                format!(
                    "{} {}\u{2013}{}, {} {} {}",
                    weekday,
                    start.format("%H:%M"),
                    end.format("%H:%M"),
                    term,
                    label,
                    weeks
                )
            })
            .join("; ")
    }
}

/// Compress a series of occurrences into its pattern string.
///
/// Classifies every occurrence against `calendar`, merges the resulting
/// single-week patterns to a fixed point and renders them. The output is
/// deterministic for a given multiset of occurrences regardless of their
/// order.
///
/// # Errors
///
/// Any classification failure ([`Error::OutOfTerm`],
/// [`Error::CrossMidnight`]) aborts the whole series; a partial pattern
/// string would misrepresent it.
pub fn compress_pattern(
    occurrences: &[Occurrence],
    calendar: &TermCalendar,
) -> Result<String, Error> {
    let mut set = PatternSet::new();
    for occurrence in occurrences {
        set.add(classify(calendar, occurrence)?);
    }
    Ok(set.into_pattern_string())
}
