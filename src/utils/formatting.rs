//! Formatting utilities used for CLI and export outputs.

use crate::models::TimeBase;
use ansi_term::Style;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// `70` -> `£70.00`
pub fn money(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Totals are sums of at most two-decimal values; print them without float noise.
pub fn quantity(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() { "0".into() } else { s.to_string() }
}

/// `3.5 days`, `1 hour`
pub fn duration_label(value: f64, time_base: TimeBase) -> String {
    let unit = match (time_base, value == 1.0) {
        (TimeBase::Day, true) => "day",
        (TimeBase::Day, false) => "days",
        (TimeBase::Hour, true) => "hour",
        (TimeBase::Hour, false) => "hours",
    };
    format!("{} {}", quantity(value), unit)
}
