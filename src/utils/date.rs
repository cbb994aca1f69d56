//! Date utilities: "today", accepted input formats and the canonical
//! storage form of entry dates.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};

/// Storage form of every entry date.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Human form used when a date is shown back to the user.
pub const DISPLAY_FORMAT: &str = "%d %b %Y";

/// Full date formats, tried in order. The first one that parses wins.
const FULL_FORMATS: [&str; 6] = [
    CANONICAL_FORMAT,
    DISPLAY_FORMAT,
    "%d %B %Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d-%m-%Y",
];

/// Years are always written out in full. chrono's `%Y` would also take
/// `24` or `5`, which turns short dates into year 24 or year 5.
const MIN_YEAR: i32 = 1000;

/// Day + month only; the year is taken from "today".
const DAY_MONTH_FORMATS: [&str; 2] = ["%d %b %Y", "%d %B %Y"];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, CANONICAL_FORMAT).ok()
}

/// Turns free-text dates into canonical `YYYY-MM-DD` dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNormalizer {
    today: NaiveDate,
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DateNormalizer {
    /// Normalizer anchored on the current local date.
    pub fn new() -> Self {
        Self { today: today() }
    }

    /// Normalizer anchored on a fixed date.
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn parse(&self, raw: &str) -> AppResult<NaiveDate> {
        let s = raw.trim();

        if s.is_empty() {
            return Ok(self.today);
        }

        match s.to_lowercase().as_str() {
            "today" => return Ok(self.today),
            "yesterday" => {
                return self
                    .today
                    .checked_sub_days(Days::new(1))
                    .ok_or_else(|| AppError::InvalidDate(raw.to_string()));
            }
            _ => {}
        }

        for fmt in FULL_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(s, fmt)
                && d.year() >= MIN_YEAR
            {
                return Ok(d);
            }
        }

        let with_year = format!("{} {}", s, self.today.year());
        for fmt in DAY_MONTH_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(&with_year, fmt) {
                return Ok(d);
            }
        }

        Err(AppError::InvalidDate(raw.to_string()))
    }

    /// Parse and render in canonical form.
    pub fn normalize(&self, raw: &str) -> AppResult<String> {
        self.parse(raw)
            .map(|d| d.format(CANONICAL_FORMAT).to_string())
    }
}

/// Render a canonical date for display; other values are shown untouched.
pub fn display_date(stored: &str) -> String {
    match parse_date(stored) {
        Some(d) => d.format(DISPLAY_FORMAT).to_string(),
        None => stored.to_string(),
    }
}
