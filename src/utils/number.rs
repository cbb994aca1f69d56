//! Plain decimal numbers as used for rates and day-based durations.

use regex::Regex;
use std::sync::LazyLock;

static PLAIN_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(\.\d+)?|\.\d+)$").expect("valid decimal regex"));

/// Non-negative decimal without sign, exponent or thousands separator.
pub fn is_plain_decimal(s: &str) -> bool {
    PLAIN_DECIMAL.is_match(s)
}

/// Numeric value of a plain decimal, `None` for anything else.
pub fn parse_plain_decimal(s: &str) -> Option<f64> {
    let s = s.trim();
    if is_plain_decimal(s) {
        s.parse::<f64>().ok()
    } else {
        None
    }
}
