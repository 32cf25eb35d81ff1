use chrono::prelude::*;
use serde::{Deserialize, Serialize};

/// A single event instance with absolute start and end timestamps.
///
/// Owned by the caller; the engine only reads it. Both timestamps are
/// assumed pre-normalized to one reference time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// The absolute start timestamp.
    pub start: NaiveDateTime,
    /// The absolute end timestamp.
    pub end: NaiveDateTime,
}

impl Occurrence {
    /// Create an occurrence.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Occurrence { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ndt;

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Occurrence>();
    }

    #[test]
    fn eq_trait() {
        let a = Occurrence::new(ndt(2014, 10, 13, 10, 0), ndt(2014, 10, 13, 11, 0));
        let b = Occurrence::new(ndt(2014, 10, 13, 10, 0), ndt(2014, 10, 13, 11, 0));
        assert_eq!(a, b);
    }
}
