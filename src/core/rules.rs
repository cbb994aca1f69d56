use crate::errors::{AppError, InvalidField};
use crate::models::{Field, RawEntry, Record, TimeBase};
use crate::utils::date::DateNormalizer;
use crate::utils::duration::DurationNormalizer;
use crate::utils::number::is_plain_decimal;

/// Everything needed to turn raw user input into a storable record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRules {
    pub dates: DateNormalizer,
    pub durations: DurationNormalizer,
    pub default_rate: String,
}

impl EntryRules {
    pub fn new(time_base: TimeBase, default_rate: impl Into<String>) -> Self {
        Self {
            dates: DateNormalizer::new(),
            durations: DurationNormalizer::new(time_base),
            default_rate: default_rate.into(),
        }
    }

    pub fn with_dates(mut self, dates: DateNormalizer) -> Self {
        self.dates = dates;
        self
    }

    pub fn time_base(&self) -> TimeBase {
        self.durations.time_base()
    }

    /// Validate all four fields of a new row, in column order.
    /// The first failing field is the one reported. A blank rate takes the
    /// default rate.
    pub fn normalize(&self, row_index: usize, raw: &RawEntry) -> Result<Record, InvalidField> {
        self.check(row_index, raw, Some(self.default_rate.as_str()))
    }

    /// Same checks for a replacement of an existing row. The rate was fixed
    /// when the row was created, so a blank one is rejected.
    pub fn normalize_existing(
        &self,
        row_index: usize,
        raw: &RawEntry,
    ) -> Result<Record, InvalidField> {
        self.check(row_index, raw, None)
    }

    fn check(
        &self,
        row_index: usize,
        raw: &RawEntry,
        fallback_rate: Option<&str>,
    ) -> Result<Record, InvalidField> {
        let invalid = |field: Field, reason: String| InvalidField {
            row_index,
            field,
            raw_value: raw.value(field).to_string(),
            reason,
        };

        let date = self
            .dates
            .normalize(&raw.date)
            .map_err(|e| invalid(Field::Date, cause(e)))?;

        let duration = if raw.duration.trim().is_empty() {
            return Err(invalid(Field::Duration, "empty".into()));
        } else {
            self.durations
                .normalize(&raw.duration)
                .map_err(|e| invalid(Field::Duration, cause(e)))?
        };

        let activity = raw.activity.trim();
        if activity.is_empty() {
            return Err(invalid(Field::Activity, "empty".into()));
        }
        if activity.contains(['\n', '\r']) {
            return Err(invalid(Field::Activity, "must be a single line".into()));
        }

        let rate = match (raw.rate.trim(), fallback_rate) {
            ("", Some(default)) => default.trim(),
            (r, _) => r,
        };
        if rate.is_empty() {
            return Err(invalid(Field::Rate, "empty".into()));
        }
        if !is_plain_decimal(rate) {
            return Err(invalid(Field::Rate, "not a non-negative decimal".into()));
        }

        Ok(Record::new(date, duration, activity, rate))
    }
}

fn cause(e: AppError) -> String {
    match e {
        AppError::InvalidDate(_) => "unrecognised date".into(),
        AppError::InvalidDuration(_) => "unrecognised duration".into(),
        other => other.to_string(),
    }
}
