//! Rolling day window

use chrono::{Local, NaiveDate};

/// Dates from `today - days` onward, lower bound inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    cutoff: NaiveDate,
}

impl Window {
    pub fn new(today: NaiveDate, days: u32) -> Self {
        let cutoff = today
            .checked_sub_days(chrono::Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { cutoff }
    }

    /// Window ending on the local current date
    pub fn ending_today(days: u32) -> Self {
        Self::new(Local::now().date_naive(), days)
    }

    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.cutoff
    }
}
