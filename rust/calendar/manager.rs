use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use crate::calendar::TermCalendar;
use crate::error::Error;

// A single memory allocated space holding the calendar per academic year.
static CALENDARS: LazyLock<RwLock<HashMap<u16, Arc<TermCalendar>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// A manager for the process-wide set of [`TermCalendar`]s, keyed by
/// academic year.
///
/// This object interacts with the memory allocation for stored calendars.
/// It returns thread safe, shared references to the same objects, and
/// guarantees at-most-once construction per academic year under
/// concurrent access via [`CalendarManager::get_or_try_insert_with`].
pub struct CalendarManager;

impl CalendarManager {
    /// Create an instance of the [`CalendarManager`].
    pub fn new() -> Self {
        Self {}
    }

    /// Returns *true* if a calendar is stored for the academic year.
    pub fn contains_key(&self, year: u16) -> bool {
        let r = CALENDARS.read().unwrap();
        r.contains_key(&year)
    }

    /// Return the list of academic years with a stored calendar.
    pub fn keys(&self) -> Vec<u16> {
        let r = CALENDARS.read().unwrap();
        r.keys().copied().collect()
    }

    /// Add a [`TermCalendar`] to the manager under its academic year.
    ///
    /// Data will not be overwritten; first `pop` an existing calendar to
    /// replace it.
    pub fn add(&self, calendar: TermCalendar) -> Result<(), Error> {
        let mut w = CALENDARS.write().unwrap();
        let year = calendar.year();
        if w.contains_key(&year) {
            return Err(Error::InvalidCalendar {
                year,
                reason: "a calendar already exists for this academic year. Cannot overwrite, \
                         first `pop` the existing calendar."
                    .to_string(),
            });
        }
        w.insert(year, Arc::new(calendar));
        Ok(())
    }

    /// Remove and return the calendar stored for the academic year.
    pub fn pop(&self, year: u16) -> Option<Arc<TermCalendar>> {
        let mut w = CALENDARS.write().unwrap();
        w.remove(&year)
    }

    /// Return the calendar stored for the academic year.
    pub fn get(&self, year: u16) -> Option<Arc<TermCalendar>> {
        let r = CALENDARS.read().unwrap();
        r.get(&year).cloned()
    }

    /// Return the calendar for the academic year, building and storing it
    /// first if absent.
    ///
    /// The write lock is held across `build`, so concurrent callers for
    /// the same year construct the calendar at most once.
    pub fn get_or_try_insert_with<F>(&self, year: u16, build: F) -> Result<Arc<TermCalendar>, Error>
    where
        F: FnOnce() -> Result<TermCalendar, Error>,
    {
        let mut w = CALENDARS.write().unwrap();
        if let Some(existing) = w.get(&year) {
            return Ok(existing.clone());
        }
        let calendar = Arc::new(build()?);
        w.insert(year, calendar.clone());
        Ok(calendar)
    }
}

impl Default for CalendarManager {
    fn default() -> Self {
        Self::new()
    }
}
