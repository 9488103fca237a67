use chrono::{Days, Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive date range bounding a catalog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl QueryWindow {
    /// Window covering the last `days` days up to and including `end`.
    ///
    /// Returns `None` when `end - days` falls outside chrono's date range.
    pub fn ending_on(end: NaiveDate, days: u64) -> Option<Self> {
        let start = end.checked_sub_days(Days::new(days))?;
        Some(Self { start, end })
    }

    /// Window ending on today's local date.
    pub fn last_days(days: u64) -> Option<Self> {
        Self::ending_on(Local::now().date_naive(), days)
    }

    pub fn start_param(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}
