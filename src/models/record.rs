use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Field delimiter of the timesheet file.
pub const DELIMITER: char = ',';

/// Columns of a timesheet, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Date,
    Duration,
    Activity,
    Rate,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Date, Field::Duration, Field::Activity, Field::Rate];

    /// Column title as written in the CSV header.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Duration => "Duration",
            Field::Activity => "Activity",
            Field::Rate => "Rate",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Duration => "duration",
            Field::Activity => "activity",
            Field::Rate => "rate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values exactly as the user typed them, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub date: String,
    pub duration: String,
    pub activity: String,
    pub rate: String,
}

impl RawEntry {
    pub fn new(
        date: impl Into<String>,
        duration: impl Into<String>,
        activity: impl Into<String>,
        rate: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            duration: duration.into(),
            activity: activity.into(),
            rate: rate.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Duration => &self.duration,
            Field::Activity => &self.activity,
            Field::Rate => &self.rate,
        }
    }
}

impl From<Record> for RawEntry {
    fn from(r: Record) -> Self {
        Self {
            date: r.date,
            duration: r.duration,
            activity: r.activity,
            rate: r.rate,
        }
    }
}

/// One timesheet entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub date: String,     // ⇔ Date     (YYYY-MM-DD)
    pub duration: String, // ⇔ Duration (days or decimal hours)
    pub activity: String, // ⇔ Activity
    pub rate: String,     // ⇔ Rate
}

impl Record {
    pub fn new(
        date: impl Into<String>,
        duration: impl Into<String>,
        activity: impl Into<String>,
        rate: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            duration: duration.into(),
            activity: activity.into(),
            rate: rate.into(),
        }
    }

    /// Parse one data line.
    ///
    /// Quoted fields are honoured. Unquoted legacy lines with extra commas
    /// keep date, duration and rate at the edges and give the rest back to
    /// the activity.
    pub fn parse_line(line: &str) -> AppResult<Self> {
        let mut fields = split_line(line)?;

        if fields.len() < 4 {
            return Err(AppError::Format(format!(
                "expected 4 fields, found {} in '{}'",
                fields.len(),
                line
            )));
        }

        let rate = fields.pop().unwrap_or_default();
        let mut rest = fields.into_iter();
        let date = rest.next().unwrap_or_default();
        let duration = rest.next().unwrap_or_default();
        let activity = rest.collect::<Vec<_>>().join(&DELIMITER.to_string());

        Ok(Self {
            date,
            duration,
            activity,
            rate,
        })
    }

    /// Serialize to a single line (no terminator).
    pub fn to_line(&self) -> String {
        [&self.date, &self.duration, &self.activity, &self.rate]
            .iter()
            .map(|f| quote_field(f))
            .collect::<Vec<_>>()
            .join(&DELIMITER.to_string())
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Duration => &self.duration,
            Field::Activity => &self.activity,
            Field::Rate => &self.rate,
        }
    }
}

/// Split a delimited line into its raw field values.
pub fn split_line(line: &str) -> AppResult<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match rdr.records().next() {
        Some(rec) => Ok(rec?.iter().map(str::to_string).collect()),
        None => Ok(Vec::new()),
    }
}

/// Quote a field only when it would otherwise be ambiguous.
fn quote_field(value: &str) -> String {
    if value.contains(DELIMITER) || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
