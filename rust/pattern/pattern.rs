use std::fmt;

use chrono::prelude::*;
use itertools::Itertools;
use serde::Serialize;

use crate::calendar::TermRef;
use crate::pattern::PatternKey;

/// An ordered set of term-week indices held as a minimal vector of
/// closed ranges.
///
/// Never empty, always sorted, and adjacent or overlapping ranges are
/// always collapsed, so the `Display` form (`"1-3, 5"`) is canonical for
/// the set of indices. Only [`WeekSet::single`] and [`WeekSet::union`]
/// build one; there is no deserializing constructor that could smuggle
/// in an empty or unsorted set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSet {
    ranges: Vec<(i8, i8)>,
}

impl WeekSet {
    /// Create a set holding a single week index.
    pub fn single(week: i8) -> Self {
        WeekSet {
            ranges: vec![(week, week)],
        }
    }

    /// Returns the smallest week index in the set.
    pub fn min(&self) -> i8 {
        self.ranges[0].0
    }

    /// Returns the largest week index in the set.
    pub fn max(&self) -> i8 {
        self.ranges[self.ranges.len() - 1].1
    }

    /// Returns the number of week indices in the set.
    pub fn len(&self) -> usize {
        self.ranges
            .iter()
            .map(|(lo, hi)| (hi - lo) as usize + 1)
            .sum()
    }

    /// Returns `false`; a `WeekSet` always holds at least one week.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the individual week indices in ascending order.
    pub fn weeks(&self) -> impl Iterator<Item = i8> + '_ {
        self.ranges.iter().flat_map(|&(lo, hi)| lo..=hi)
    }

    /// Returns whether the spans of the two sets are adjacent or
    /// overlapping: no gap greater than one between the maximum of one
    /// and the minimum of the other, so their union is contiguous when
    /// both sets are.
    pub fn touches(&self, other: &Self) -> bool {
        if self.max() < other.min() {
            other.min() - self.max() <= 1
        } else if other.max() < self.min() {
            self.min() - other.max() <= 1
        } else {
            true
        }
    }

    /// Return the union of the two sets, collapsed to minimal ranges.
    pub fn union(&self, other: &Self) -> Self {
        let mut out: Vec<(i8, i8)> = Vec::new();
        for (lo, hi) in self
            .ranges
            .iter()
            .chain(other.ranges.iter())
            .copied()
            .sorted()
        {
            match out.last_mut() {
                Some(last) if i16::from(lo) <= i16::from(last.1) + 1 => {
                    last.1 = last.1.max(hi);
                }
                _ => out.push((lo, hi)),
            }
        }
        WeekSet { ranges: out }
    }
}

impl fmt::Display for WeekSet {
    /// Runs of two or more weeks render hyphenated (`"2-4"`), singletons
    /// bare (`"7"`), discontiguous groups comma-joined (`"1-3, 5"`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .ranges
            .iter()
            .map(|(lo, hi)| {
                if lo == hi {
                    lo.to_string()
                } else {
                    format!("{}-{}", lo, hi)
                }
            })
            .join(", ");
        write!(f, "{}", s)
    }
}

/// A compressed description of a recurring weekday/time slot across a
/// run of weeks within one term.
///
/// All week indices in one pattern belong to the same term and the same
/// weekday/time pair. Merging produces a new value; existing patterns
/// are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    /// The weekday of the slot.
    pub weekday: Weekday,
    /// The time of day the slot starts.
    pub start: NaiveTime,
    /// The time of day the slot ends.
    pub end: NaiveTime,
    /// The term the weeks belong to.
    pub term: TermRef,
    /// The weeks of the term the slot recurs in.
    pub weeks: WeekSet,
}

impl Pattern {
    /// Create a single-week pattern from a classified occurrence.
    pub fn from_key(key: PatternKey) -> Self {
        Pattern {
            weekday: key.weekday,
            start: key.start,
            end: key.end,
            term: key.term,
            weeks: WeekSet::single(key.week),
        }
    }

    /// Returns whether the two patterns describe the same weekday/time
    /// slot in the same term.
    pub fn same_slot(&self, other: &Self) -> bool {
        self.weekday == other.weekday
            && self.start == other.start
            && self.end == other.end
            && self.term == other.term
    }

    /// Returns whether the two patterns can merge: same slot and week
    /// spans adjacent or overlapping, so the merged week set is
    /// contiguous. Patterns never merge across term boundaries.
    pub fn can_merge(&self, other: &Self) -> bool {
        self.same_slot(other) && self.weeks.touches(&other.weeks)
    }

    /// Return a new pattern covering the union of both week sets.
    ///
    /// Only meaningful when [`Pattern::can_merge`] holds.
    pub fn merge(&self, other: &Self) -> Self {
        debug_assert!(self.can_merge(other));
        Pattern {
            weekday: self.weekday,
            start: self.start,
            end: self.end,
            term: self.term.clone(),
            weeks: self.weeks.union(&other.weeks),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.weeks.len() == 1 { "week" } else { "weeks" };
        write!(
            f,
            "{} {}\u{2013}{}, {} {} {}",
            self.weekday,
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.term.name,
            label,
            self.weeks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::nd;

    fn fixture_key(weekday: Weekday, week: i8) -> PatternKey {
        PatternKey {
            weekday,
            start: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            term: TermRef {
                name: "Michaelmas".to_string(),
                start: nd(2014, 10, 7),
            },
            week,
        }
    }

    #[test]
    fn week_set_display() {
        let set = WeekSet::single(4);
        assert_eq!(set.to_string(), "4");
        let set = set.union(&WeekSet::single(5)).union(&WeekSet::single(6));
        assert_eq!(set.to_string(), "4-6");
        let set = set.union(&WeekSet::single(9));
        assert_eq!(set.to_string(), "4-6, 9");
    }

    #[test]
    fn week_set_union_collapses_overlap() {
        let a = WeekSet::single(1).union(&WeekSet::single(2));
        let b = WeekSet::single(2).union(&WeekSet::single(3));
        assert_eq!(a.union(&b).to_string(), "1-3");
    }

    #[test]
    fn week_set_len() {
        let set = WeekSet::single(1).union(&WeekSet::single(2)).union(&WeekSet::single(5));
        assert_eq!(set.len(), 3);
        assert_eq!(set.min(), 1);
        assert_eq!(set.max(), 5);
    }

    #[test]
    fn week_set_weeks_iterator() {
        let set = WeekSet::single(1).union(&WeekSet::single(2)).union(&WeekSet::single(5));
        let weeks: Vec<i8> = set.weeks().collect();
        assert_eq!(weeks, vec![1, 2, 5]);
    }

    #[test]
    fn touches_adjacent_and_gapped() {
        let a = WeekSet::single(3);
        assert!(a.touches(&WeekSet::single(4)));
        assert!(a.touches(&WeekSet::single(2)));
        assert!(a.touches(&WeekSet::single(3)));
        assert!(!a.touches(&WeekSet::single(5)));
        assert!(!a.touches(&WeekSet::single(1)));
    }

    #[test]
    fn can_merge_same_slot_adjacent_weeks() {
        let a = Pattern::from_key(fixture_key(Weekday::Mon, 1));
        let b = Pattern::from_key(fixture_key(Weekday::Mon, 2));
        assert!(a.can_merge(&b));
        assert!(b.can_merge(&a));
    }

    #[test]
    fn can_merge_rejects_gap() {
        let a = Pattern::from_key(fixture_key(Weekday::Mon, 1));
        let b = Pattern::from_key(fixture_key(Weekday::Mon, 3));
        assert!(!a.can_merge(&b));
    }

    #[test]
    fn can_merge_rejects_different_weekday() {
        let a = Pattern::from_key(fixture_key(Weekday::Mon, 1));
        let b = Pattern::from_key(fixture_key(Weekday::Tue, 2));
        assert!(!a.can_merge(&b));
    }

    #[test]
    fn can_merge_rejects_different_term() {
        let a = Pattern::from_key(fixture_key(Weekday::Mon, 1));
        let mut key = fixture_key(Weekday::Mon, 2);
        key.term = TermRef {
            name: "Lent".to_string(),
            start: nd(2015, 1, 13),
        };
        let b = Pattern::from_key(key);
        assert!(!a.can_merge(&b));
    }

    #[test]
    fn merge_is_a_new_value() {
        let a = Pattern::from_key(fixture_key(Weekday::Mon, 1));
        let b = Pattern::from_key(fixture_key(Weekday::Mon, 2));
        let merged = a.merge(&b);
        assert_eq!(merged.weeks.to_string(), "1-2");
        // The inputs are untouched.
        assert_eq!(a.weeks.to_string(), "1");
        assert_eq!(b.weeks.to_string(), "2");
    }

    #[test]
    fn pattern_display() {
        let a = Pattern::from_key(fixture_key(Weekday::Mon, 1));
        let b = Pattern::from_key(fixture_key(Weekday::Mon, 2));
        assert_eq!(
            a.merge(&b).to_string(),
            "Mon 10:00\u{2013}11:00, Michaelmas weeks 1-2"
        );
        let single = Pattern::from_key(fixture_key(Weekday::Thu, 4));
        assert_eq!(
            single.to_string(),
            "Thu 10:00\u{2013}11:00, Michaelmas week 4"
        );
    }
}
