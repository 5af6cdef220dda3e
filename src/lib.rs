//! Month-range calendar display with day and date highlighting.
//!
//! Features:
//! - One block per month over an arbitrary consecutive range
//! - Customizable week start (any weekday, locale default)
//! - Bracket-highlighting of an ascending day-number range
//! - Star-highlighting of exact dates

pub mod args;
pub mod calendar;
pub mod formatter;
pub mod locale;
pub mod types;
