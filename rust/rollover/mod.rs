//! Remap occurrences from one academic year's calendar to another,
//! preserving term, week-in-term, weekday and time of day rather than
//! shifting by naive date arithmetic.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::calendar::TermCalendar;
use crate::error::Error;
use crate::pattern::Occurrence;

/// A recovered data-quality condition observed while rolling over a
/// batch of occurrences.
///
/// Returned as a side list; diagnostics never abort the rollover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// The occurrence's start was after its end; the endpoints were
    /// swapped before remapping.
    SwappedEndpoints {
        /// The occurrence's position in the input slice.
        index: usize,
        /// The occurrence as supplied, before the swap.
        occurrence: Occurrence,
    },
}

/// Roll a single occurrence over from one calendar to another.
///
/// Decodes both endpoints against `from`, then encodes the same term
/// name, week index, weekday and time of day against `to`. Returns the
/// remapped occurrence and whether the endpoints had to be swapped
/// first.
///
/// # Errors
///
/// Returns [`Error::OutOfTerm`] if an endpoint cannot be decoded,
/// [`Error::TermMismatch`] if `to` lacks a term name `from` produced, or
/// [`Error::InvalidWeek`] if a decoded week index exceeds the target
/// term's length.
pub fn rollover_occurrence(
    occurrence: &Occurrence,
    from: &TermCalendar,
    to: &TermCalendar,
) -> Result<(Occurrence, bool), Error> {
    let (start, end, swapped) = if occurrence.start <= occurrence.end {
        (occurrence.start, occurrence.end, false)
    } else {
        warn!(
            "occurrence starts {} after it ends {}, swapping before rollover",
            occurrence.start, occurrence.end
        );
        (occurrence.end, occurrence.start, true)
    };
    let s = from.decode(&start)?;
    let e = from.decode(&end)?;
    let new_start = to.encode(&s.term.name, s.week, s.weekday, s.time)?;
    let new_end = to.encode(&e.term.name, e.week, e.weekday, e.time)?;
    Ok((Occurrence::new(new_start, new_end), swapped))
}

/// Roll a batch of occurrences over from one calendar to another.
///
/// The input is never mutated; remapped occurrences are returned in
/// input order together with a side list of [`Diagnostic`]s for entries
/// that needed local recovery. Any error aborts the whole batch.
pub fn rollover_occurrences(
    occurrences: &[Occurrence],
    from: &TermCalendar,
    to: &TermCalendar,
) -> Result<(Vec<Occurrence>, Vec<Diagnostic>), Error> {
    let mut rolled = Vec::with_capacity(occurrences.len());
    let mut diagnostics = Vec::new();
    for (index, occurrence) in occurrences.iter().enumerate() {
        let (new_occurrence, swapped) = rollover_occurrence(occurrence, from, to)?;
        if swapped {
            diagnostics.push(Diagnostic::SwappedEndpoints {
                index,
                occurrence: *occurrence,
            });
        }
        rolled.push(new_occurrence);
    }
    Ok((rolled, diagnostics))
}
