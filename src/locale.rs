//! Locale resolution: weekday and month names plus the default week start.
//!
//! The environment is consulted once, at the boundary; everything downstream
//! sees only the resolved [`LocaleInfo`] value.

use chrono::{Duration, Locale, NaiveDate, Weekday};

/// Locale data resolved once per invocation.
#[derive(Clone, Copy, Debug)]
pub struct LocaleInfo {
    locale: Locale,
    week_start: Weekday,
}

impl LocaleInfo {
    pub fn new(locale: Locale) -> Self {
        LocaleInfo {
            locale,
            week_start: default_week_start(locale),
        }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::new(get_system_locale())
    }

    /// Weekday the locale conventionally starts its weeks on.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Abbreviated weekday name, e.g. "Mon".
    pub fn day_abbrev(&self, weekday: Weekday) -> String {
        // 2000-01-03 was a Monday
        let base = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
        let date = base + Duration::days(i64::from(weekday.num_days_from_monday()));
        date.format_localized("%a", self.locale).to_string()
    }

    /// Full month name, e.g. "March".
    pub fn month_name(&self, month: u32) -> String {
        let date = NaiveDate::from_ymd_opt(2000, month, 1).unwrap();
        date.format_localized("%B", self.locale).to_string()
    }
}

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Default first day of the week for a locale.
fn default_week_start(locale: Locale) -> Weekday {
    // Locales that conventionally start the week on Sunday
    match locale {
        Locale::en_US
        | Locale::en_CA
        | Locale::ja_JP
        | Locale::ko_KR
        | Locale::he_IL
        | Locale::pt_BR => Weekday::Sun,
        _ => Weekday::Mon,
    }
}

/// Parse a weekday from string (full English name or 3-letter abbreviation).
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    let s_lower = s.to_lowercase();
    let day_names: [(&str, Weekday); 14] = [
        ("monday", Weekday::Mon),
        ("tuesday", Weekday::Tue),
        ("wednesday", Weekday::Wed),
        ("thursday", Weekday::Thu),
        ("friday", Weekday::Fri),
        ("saturday", Weekday::Sat),
        ("sunday", Weekday::Sun),
        ("mon", Weekday::Mon),
        ("tue", Weekday::Tue),
        ("wed", Weekday::Wed),
        ("thu", Weekday::Thu),
        ("fri", Weekday::Fri),
        ("sat", Weekday::Sat),
        ("sun", Weekday::Sun),
    ];
    day_names
        .iter()
        .find(|(name, _)| *name == s_lower)
        .map(|(_, day)| *day)
}
