use crate::core::session::TimesheetSession;
use crate::core::summary::SummaryLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::fs::write_atomic;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Copy a timesheet out to a file chosen by the user.
pub struct ExportLogic;

impl ExportLogic {
    /// - `Csv`: the timesheet file itself, byte for byte
    /// - `Json`: every row with its earnings, plus totals
    ///
    /// An existing file is only replaced when `force` is set.
    pub fn export(
        session: &TimesheetSession,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "'{}' already exists (use --force to overwrite)",
                path.display()
            )));
        }

        info(format!(
            "Exporting '{}' to {}: {}",
            session.name(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        let contents = Self::render(session, format)?;
        write_atomic(path, &contents)?;

        success(format!("Export completed: {}", path.display()));
        Ok(())
    }

    pub fn render(session: &TimesheetSession, format: ExportFormat) -> AppResult<String> {
        match format {
            ExportFormat::Csv => Ok(session.store().serialize()),
            ExportFormat::Json => {
                let summary = SummaryLogic::build(session.store());
                let doc = serde_json::json!({
                    "name": session.name(),
                    "currency": session.settings().currency,
                    "timebase": session.settings().time_base,
                    "rows": summary.rows,
                    "total_duration": summary.total_duration,
                    "total_earnings": summary.total_earnings,
                });
                Ok(serde_json::to_string_pretty(&doc)?)
            }
        }
    }
}
