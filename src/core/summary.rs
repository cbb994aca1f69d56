//! Derived display values: per-row earnings, totals and known activities.

use crate::core::store::RecordStore;
use crate::utils::number::parse_plain_decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSummary {
    /// 1-based position in file order.
    pub id: usize,
    pub date: String,
    pub duration: String,
    pub activity: String,
    pub rate: String,
    /// `None` when duration or rate is not a number.
    pub earnings: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub rows: Vec<RowSummary>,
    pub total_duration: f64,
    pub total_earnings: f64,
    /// Distinct activities in first-seen order.
    pub activities: Vec<String>,
    /// 1-based ids of lines that could not be read as four fields.
    pub malformed: Vec<usize>,
}

pub struct SummaryLogic;

impl SummaryLogic {
    pub fn build(store: &RecordStore) -> Summary {
        let mut summary = Summary::default();

        for (i, rec) in store.records() {
            let id = i + 1;
            let rec = match rec {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(row = id, error = %e, "unreadable timesheet line");
                    summary.malformed.push(id);
                    continue;
                }
            };

            let duration = parse_plain_decimal(&rec.duration);
            let rate = parse_plain_decimal(&rec.rate);

            if let Some(d) = duration {
                summary.total_duration += d;
            }

            let earnings = match (duration, rate) {
                (Some(d), Some(r)) => Some(d * r),
                _ => None,
            };
            if let Some(e) = earnings {
                summary.total_earnings += e;
            }

            if !summary.activities.iter().any(|a| a == &rec.activity) {
                summary.activities.push(rec.activity.clone());
            }

            summary.rows.push(RowSummary {
                id,
                date: rec.date,
                duration: rec.duration,
                activity: rec.activity,
                rate: rec.rate,
                earnings,
            });
        }

        summary
    }
}
