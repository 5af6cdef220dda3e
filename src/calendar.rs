//! Grid construction: month walk, back-fill, and highlight consumption.

use chrono::{Datelike, NaiveDate};

use crate::types::{
    DATE_MARK, DAY_CLOSE, DAY_OPEN, DAYS_PER_WEEK, GridContext, MonthBlock, WeekRow,
};

impl GridContext {
    /// Build one block per month in `[start, end]`, both normalized to the
    /// first day of their month. An end before the start yields no blocks.
    ///
    /// The day-number cursor spans the whole walk: a number consumed in one
    /// month never matches again in a later one.
    pub fn build(&self, start: NaiveDate, end: NaiveDate) -> Vec<MonthBlock> {
        let mut month = month_start(start);
        let last = month_start(end);
        let mut cursor = 0;

        let mut blocks = Vec::new();
        while month <= last {
            blocks.push(self.build_month(month, &mut cursor));
            month = next_month(month);
        }
        blocks
    }

    /// Build the block for the month beginning at `first` (its first day).
    fn build_month(&self, first: NaiveDate, cursor: &mut usize) -> MonthBlock {
        let boundary = next_month(first);

        // Back-fill to the nearest preceding row start; leading days from
        // the previous month stay in the first row.
        let mut day = first;
        while day.weekday() != self.week_start {
            day = day.pred_opt().unwrap();
        }

        let mut columns: Vec<String> = Vec::with_capacity(DAYS_PER_WEEK);
        let mut rows = Vec::new();
        let mut row = WeekRow::default();

        loop {
            let label = self.locale.day_abbrev(day.weekday());
            if !columns.contains(&label) {
                columns.push(label.clone());
            }
            row.cells.push((label, self.format_cell(day, cursor)));

            let next = day.succ_opt().unwrap();
            if next.weekday() == self.week_start {
                rows.push(std::mem::take(&mut row));
                // Rows close only at the week-start boundary, so trailing
                // days from the next month complete the final row.
                if next >= boundary {
                    break;
                }
            }
            day = next;
        }

        MonthBlock {
            header: format!("{} {}", self.locale.month_name(first.month()), first.year()),
            columns,
            rows,
        }
    }

    /// Format one day cell: zero-padded day number, star-marked when the
    /// exact date is highlighted, bracketed when the day number matches the
    /// cursor head. The bracket check runs second and replaces the star when
    /// both apply.
    fn format_cell(&self, day: NaiveDate, cursor: &mut usize) -> String {
        let mut cell = format!("{:02}", day.day());
        if self.highlight_dates.contains(&day) {
            cell = format!("{DATE_MARK}{cell}{DATE_MARK}");
        }
        if self.highlight_days.get(*cursor) == Some(&day.day()) {
            cell = format!("{DAY_OPEN}{:02}{DAY_CLOSE}", day.day());
            *cursor += 1;
        }
        cell
    }
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// First day of the following month.
pub fn next_month(first: NaiveDate) -> NaiveDate {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}
