//! Command-line argument parsing using clap.
//!
//! Positional arguments are the month range: `hcal [start] [end]`, with
//! dates given as `YYYY-MM-DD` or `YYYY-MM`.

use chrono::NaiveDate;
use clap::{Parser, ValueHint};
use std::collections::HashSet;

use crate::locale::{LocaleInfo, parse_weekday};
use crate::types::GridContext;

#[derive(Parser, Debug)]
#[command(name = "hcal")]
#[command(about = "Displays a calendar for a range of months with highlights", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// First month to display (YYYY-MM-DD or YYYY-MM) - defaults to today.
    #[arg(index = 1, default_value = None, value_name = "start", value_hint = ValueHint::Other)]
    pub start_arg: Option<String>,

    /// Last month to display - defaults to the start month.
    #[arg(index = 2, default_value = None, value_name = "end", value_hint = ValueHint::Other)]
    pub end_arg: Option<String>,

    /// Weekday that starts each row (name or 3-letter abbreviation).
    #[arg(
        short = 'f',
        long = "first-day-of-week",
        help_heading = "Calendar options",
        value_name = "day"
    )]
    pub first_day_of_week: Option<String>,

    /// Day numbers (1-31) to bracket-highlight, in ascending order.
    #[arg(
        short = 'd',
        long = "highlight-day",
        help_heading = "Highlight options",
        value_name = "num",
        value_delimiter = ','
    )]
    pub highlight_day: Vec<u32>,

    /// Exact dates (YYYY-MM-DD) to star-highlight - defaults to today.
    #[arg(
        short = 'D',
        long = "highlight-date",
        help_heading = "Highlight options",
        value_name = "date",
        value_delimiter = ','
    )]
    pub highlight_date: Vec<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a calendar for one or more months.

Without any arguments, display the current month with today starred.

Examples:
  hcal                      Display current month
  hcal 2024-03              Display March 2024
  hcal 2024-03 2024-05      Display March through May 2024
  hcal -f sunday            Start rows on Sunday
  hcal -d 5,6,7             Bracket the 5th through the 7th
  hcal -D 2024-12-25        Star December 25th

Day numbers given to -d are consumed front to back across the whole range;
list them in ascending order or only a leading prefix will match.";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl GridContext {
    pub fn new(args: &Args) -> Result<Self, String> {
        let locale = LocaleInfo::from_env();

        let week_start = match args.first_day_of_week.as_deref() {
            Some(s) => parse_weekday(s).ok_or_else(|| format!("Invalid weekday: {}", s))?,
            None => locale.week_start(),
        };

        for &day in &args.highlight_day {
            if !(1..=31).contains(&day) {
                return Err(format!("Invalid day number: {} (must be 1-31)", day));
            }
        }

        let highlight_dates: HashSet<NaiveDate> = if args.highlight_date.is_empty() {
            HashSet::from([get_today_date()])
        } else {
            args.highlight_date
                .iter()
                .map(|s| parse_date(s))
                .collect::<Result<_, _>>()?
        };

        Ok(GridContext {
            week_start,
            locale,
            highlight_days: args.highlight_day.clone(),
            highlight_dates,
        })
    }
}

/// Get today's date, respecting HCAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("HCAL_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Calculate the display range from positional arguments.
///
/// Argument patterns:
/// - no args: current month only
/// - 1 arg: that month only
/// - 2 args: start and end months
pub fn get_display_range(args: &Args) -> Result<(NaiveDate, NaiveDate), String> {
    let start = match &args.start_arg {
        Some(s) => parse_date(s)?,
        None => get_today_date(),
    };
    let end = match &args.end_arg {
        Some(s) => parse_date(s)?,
        None => start,
    };
    Ok((start, end))
}

/// Parse a date as YYYY-MM-DD, or YYYY-MM (first day of that month).
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d") {
        return Ok(date);
    }
    Err(format!("Invalid date: {}", s))
}
