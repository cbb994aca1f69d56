//! Duration utilities: flexible hour notation, canonical fixed-point hours
//! and plain day counts.

use crate::errors::{AppError, AppResult};
use crate::models::TimeBase;
use crate::utils::number::is_plain_decimal;
use regex::Regex;
use std::sync::LazyLock;

/// `1:30`
static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):(\d{2})$").expect("valid clock regex"));

/// `1h30`, `1h 30m`, `2 h`
static HOURS_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s*h(?:\s*(\d{1,2})\s*(?:m|min)?)?$").expect("valid hours regex")
});

/// `90m`, `45 min`
static MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*(?:m|min)$").expect("valid minutes regex"));

/// `1.5`, `.25h`
static DECIMAL_HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?|\.\d+)\s*h?$").expect("valid decimal hours regex")
});

/// Upper bound on a single entry, in hundredths of an hour.
const MAX_CENTI_HOURS: i64 = 100 * 1_000_000;

/// Validates and canonicalizes durations for one time base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationNormalizer {
    time_base: TimeBase,
}

impl DurationNormalizer {
    pub fn new(time_base: TimeBase) -> Self {
        Self { time_base }
    }

    pub fn time_base(&self) -> TimeBase {
        self.time_base
    }

    pub fn normalize(&self, raw: &str) -> AppResult<String> {
        let s = raw.trim();

        match self.time_base {
            TimeBase::Day => {
                if is_plain_decimal(s) {
                    Ok(s.to_string())
                } else {
                    Err(AppError::InvalidDuration(raw.to_string()))
                }
            }
            TimeBase::Hour => parse_centi_hours(s)
                .map(format_centi_hours)
                .ok_or_else(|| AppError::InvalidDuration(raw.to_string())),
        }
    }
}

/// Parse a human hour notation into hundredths of an hour.
pub fn parse_centi_hours(s: &str) -> Option<i64> {
    let s = s.trim().to_lowercase();

    let centi = if let Some(c) = CLOCK.captures(&s) {
        let h: i64 = c[1].parse().ok()?;
        let m: i64 = c[2].parse().ok()?;
        from_hours_minutes(h, m)?
    } else if let Some(c) = HOURS_MINUTES.captures(&s) {
        let h: i64 = c[1].parse().ok()?;
        let m: i64 = match c.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        from_hours_minutes(h, m)?
    } else if let Some(c) = MINUTES.captures(&s) {
        let m: i64 = c[1].parse().ok()?;
        minutes_to_centi(m)?
    } else if let Some(c) = DECIMAL_HOURS.captures(&s) {
        let hours: f64 = c[1].parse().ok()?;
        let centi = (hours * 100.0).round();
        if !centi.is_finite() || centi > MAX_CENTI_HOURS as f64 {
            return None;
        }
        centi as i64
    } else {
        return None;
    };

    (centi <= MAX_CENTI_HOURS).then_some(centi)
}

fn from_hours_minutes(h: i64, m: i64) -> Option<i64> {
    if m >= 60 || h > MAX_CENTI_HOURS / 100 {
        return None;
    }
    Some(h * 100 + minutes_to_centi(m)?)
}

fn minutes_to_centi(m: i64) -> Option<i64> {
    // round half up: 20m -> 33, 50m -> 83
    Some(m.checked_mul(100)?.checked_add(30)? / 60)
}

/// `150` -> `1.5`, `200` -> `2`, `33` -> `0.33`
pub fn format_centi_hours(centi: i64) -> String {
    let whole = centi / 100;
    let frac = centi % 100;

    match frac {
        0 => whole.to_string(),
        f if f % 10 == 0 => format!("{}.{}", whole, f / 10),
        f => format!("{}.{:02}", whole, f),
    }
}
