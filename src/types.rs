//! Type definitions and constants for the calendar grid.

use chrono::{NaiveDate, Weekday};
use std::collections::HashSet;

use crate::locale::LocaleInfo;

/// Grid construction context containing all display options.
#[derive(Clone, Debug)]
pub struct GridContext {
    /// Weekday that begins every rendered row.
    pub week_start: Weekday,
    /// Resolved locale data (weekday abbreviations, month names).
    pub locale: LocaleInfo,
    /// Day-of-month numbers to bracket-highlight, consumed front to back
    /// across the whole walk. Must be ascending and deduplicated; otherwise
    /// only a leading prefix of the sequence matches.
    pub highlight_days: Vec<u32>,
    /// Exact dates to star-highlight, independent of walk order.
    pub highlight_dates: HashSet<NaiveDate>,
}

/// One rendered month: header label plus week rows.
#[derive(Clone, Debug)]
pub struct MonthBlock {
    /// "MonthName Year" for the month's first day.
    pub header: String,
    /// Column labels in first-seen order, shared by every row.
    pub columns: Vec<String>,
    pub rows: Vec<WeekRow>,
}

/// Ordered (column label, day cell) pairs for one calendar week.
#[derive(Clone, Debug, Default)]
pub struct WeekRow {
    pub cells: Vec<(String, String)>,
}

impl WeekRow {
    /// Cell under a column label, if this row has one.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(l, _)| l.as_str() == label)
            .map(|(_, cell)| cell.as_str())
    }
}

// Constants for cell decoration
pub const DAY_OPEN: char = '[';
pub const DAY_CLOSE: char = ']';
pub const DATE_MARK: char = '*';

pub const DAYS_PER_WEEK: usize = 7;
