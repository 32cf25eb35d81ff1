//! Allows serialization and deserialization to JSON, with the ``serde``
//! crate.
//!
//! The import, export and rollover tooling around the engine exchanges
//! calendar definitions and occurrence lists as JSON files; exactly the
//! types crossing that boundary implement the [`JSON`] trait. Engine
//! output types ([`Pattern`], [`PatternKey`], [`WeekSet`]) serialize but
//! are never read back in, so they stay off this surface.
//!
//! [`Pattern`]: crate::pattern::Pattern
//! [`PatternKey`]: crate::pattern::PatternKey
//! [`WeekSet`]: crate::pattern::WeekSet

use serde::{Deserialize, Serialize};

use crate::calendar::{TermCalendar, TermConfig};
use crate::pattern::Occurrence;
use crate::rollover::Diagnostic;

/// Handles the `to` and `from` JSON conversion.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return a JSON string representing the object.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Create an object from a JSON string representation.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl JSON for TermConfig {}
impl JSON for TermCalendar {}
impl JSON for Occurrence {}
impl JSON for Diagnostic {}
