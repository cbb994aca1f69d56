use crate::errors::AppError;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Unit in which a timesheet records durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeBase {
    #[default]
    Day,
    Hour,
}

impl TimeBase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBase::Day => "day",
            TimeBase::Hour => "hour",
        }
    }

    /// Short unit suffix used in tables.
    pub fn unit(&self) -> &'static str {
        match self {
            TimeBase::Day => "d",
            TimeBase::Hour => "h",
        }
    }
}

impl fmt::Display for TimeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeBase {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(TimeBase::Day),
            "hour" => Ok(TimeBase::Hour),
            other => Err(AppError::Config(format!(
                "Invalid time base '{}'. Use 'day' or 'hour'",
                other
            ))),
        }
    }
}
