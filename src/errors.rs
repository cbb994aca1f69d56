//! Unified application error type.
//! All modules (config, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::record::Field;
use std::io;
use thiserror::Error;

/// A single field of a single row that failed normalization.
///
/// Rejected rows of a partially accepted batch are reported with this type,
/// so the front end can point the user at the exact cell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Row {row_index}: invalid {field} '{raw_value}' ({reason})")]
pub struct InvalidField {
    pub row_index: usize,
    pub field: Field,
    pub raw_value: String,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timesheet format: {0}")]
    Format(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid duration format: {0}")]
    InvalidDuration(String),

    #[error(transparent)]
    InvalidField(#[from] InvalidField),

    // ---------------------------
    // Record store errors
    // ---------------------------
    #[error("Row {0} was changed since it was read")]
    StaleRow(usize),

    #[error("Row {index} does not exist (timesheet has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// Same as `RowOutOfRange`, for the 1-based ids shown to the user.
    #[error("Entry #{id} does not exist (timesheet has {len} entries)")]
    NoSuchEntry { id: usize, len: usize },

    // ---------------------------
    // Timesheet errors
    // ---------------------------
    #[error("Timesheet '{0}' already exists")]
    AlreadyExists(String),

    #[error("Timesheet '{0}' not found")]
    NotFound(String),

    #[error("No timesheet is open. Create one with `new` or select one with `open`")]
    NoTimesheet,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Invalid configuration line {line}: '{content}'")]
    ConfigFormat { line: usize, content: String },

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
