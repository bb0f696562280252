//! Holiday set keyed by calendar day.

use chrono::NaiveDate;
use macroetl_fetch::HolidayEntry;
use std::collections::HashMap;

/// National holidays of one calendar year, keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    days: HashMap<NaiveDate, String>,
}

impl HolidaySet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from calendar entries, keeping only nationwide public
    /// or bank holidays.
    #[must_use]
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a HolidayEntry>) -> Self {
        let days = entries
            .into_iter()
            .filter(|entry| entry.is_national_closure())
            .map(|entry| (entry.date, entry.local_name.clone()))
            .collect();
        Self { days }
    }

    /// Adds a holiday, replacing the name of an existing one on that day.
    pub fn insert(&mut self, date: NaiveDate, name: impl Into<String>) {
        self.days.insert(date, name.into());
    }

    /// Returns true if `date` is a holiday.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Returns the holiday name for `date`.
    #[must_use]
    pub fn name(&self, date: NaiveDate) -> Option<&str> {
        self.days.get(&date).map(String::as_str)
    }

    /// Returns the number of holidays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the holiday dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<_> = self.days.keys().copied().collect();
        dates.sort();
        dates
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        let days = iter.into_iter().map(|date| (date, String::new())).collect();
        Self { days }
    }
}
