//! In-memory timesheet rows backed by the line-oriented CSV format.
//!
//! Rows are addressed by position only. Each row keeps the exact text it was
//! loaded or written with, which is both what gets saved back and what an
//! edit compares against to detect that the caller's view went stale.

use crate::core::rules::EntryRules;
use crate::errors::{AppError, AppResult, InvalidField};
use crate::models::record::{split_line, Field, RawEntry, Record, DELIMITER};
use std::collections::BTreeSet;

/// Outcome of a batch append.
///
/// Valid rows are committed even when sibling rows fail; every rejected row
/// is reported with its first invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppendReport {
    /// Store positions of the committed rows, in batch order.
    pub appended: Vec<usize>,
    pub rejected: Vec<InvalidField>,
}

impl AppendReport {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// One position-based edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEdit {
    pub index: usize,
    /// Serialized row as the caller last saw it.
    pub expected: String,
    pub fields: RawEntry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    header: String,
    rows: Vec<String>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Empty store with the standard header.
    pub fn new() -> Self {
        Self {
            header: Self::default_header(),
            rows: Vec::new(),
        }
    }

    /// `Date,Duration,Activity,Rate`
    pub fn default_header() -> String {
        Field::ALL
            .iter()
            .map(Field::header)
            .collect::<Vec<_>>()
            .join(&DELIMITER.to_string())
    }

    /// Data lines are kept as-is and only checked when their fields are read.
    pub fn load(text: &str) -> AppResult<Self> {
        let mut lines = text.lines();

        let header = match lines.next() {
            Some(h) if !h.trim().is_empty() => h.to_string(),
            _ => return Err(AppError::Format("missing header line".into())),
        };

        let columns = split_line(&header)?.len();
        if columns != Field::ALL.len() {
            return Err(AppError::Format(format!(
                "header must have {} columns, found {}: '{}'",
                Field::ALL.len(),
                columns,
                header
            )));
        }

        let rows: Vec<String> = lines
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect();

        tracing::debug!(rows = rows.len(), "timesheet loaded");
        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialized row at `index`.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> AppResult<Record> {
        let line = self.line(index).ok_or(AppError::RowOutOfRange {
            index,
            len: self.len(),
        })?;
        Record::parse_line(line)
    }

    /// Every row with its position, parsed on the fly.
    pub fn records(&self) -> impl Iterator<Item = (usize, AppResult<Record>)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, line)| (i, Record::parse_line(line)))
    }

    pub fn append(&mut self, rows: &[RawEntry], rules: &EntryRules) -> AppendReport {
        let mut report = AppendReport::default();

        for (i, raw) in rows.iter().enumerate() {
            match rules.normalize(i, raw) {
                Ok(record) => {
                    self.rows.push(record.to_line());
                    report.appended.push(self.rows.len() - 1);
                }
                Err(invalid) => {
                    tracing::debug!(row = i, field = %invalid.field, "row rejected");
                    report.rejected.push(invalid);
                }
            }
        }

        tracing::debug!(
            appended = report.appended.len(),
            rejected = report.rejected.len(),
            "append"
        );
        report
    }

    /// Overwrite one row if it still reads `expected`.
    /// Returns `false` when the new value equals the current one.
    pub fn edit(
        &mut self,
        index: usize,
        expected: &str,
        fields: &RawEntry,
        rules: &EntryRules,
    ) -> AppResult<bool> {
        let line = self.prepare_edit(index, expected, fields, rules)?;

        if self.rows[index] == line {
            return Ok(false);
        }

        self.rows[index] = line;
        tracing::debug!(row = index, "row edited");
        Ok(true)
    }

    /// Apply several edits as one unit: all are checked before any is
    /// written, and the first failure leaves the store untouched.
    /// Returns the number of rows that actually changed.
    pub fn edit_many(&mut self, edits: &[RowEdit], rules: &EntryRules) -> AppResult<usize> {
        let mut staged = Vec::with_capacity(edits.len());
        let mut seen = BTreeSet::new();

        for edit in edits {
            if !seen.insert(edit.index) {
                return Err(AppError::Other(format!(
                    "row {} is edited more than once in the same batch",
                    edit.index
                )));
            }
            let line = self.prepare_edit(edit.index, &edit.expected, &edit.fields, rules)?;
            staged.push((edit.index, line));
        }

        let mut changed = 0;
        for (index, line) in staged {
            if self.rows[index] != line {
                self.rows[index] = line;
                changed += 1;
            }
        }

        tracing::debug!(requested = edits.len(), changed, "batch edit");
        Ok(changed)
    }

    fn prepare_edit(
        &self,
        index: usize,
        expected: &str,
        fields: &RawEntry,
        rules: &EntryRules,
    ) -> AppResult<String> {
        let current = self.line(index).ok_or(AppError::RowOutOfRange {
            index,
            len: self.len(),
        })?;

        if current != expected {
            return Err(AppError::StaleRow(index));
        }

        let record = rules.normalize_existing(index, fields)?;
        Ok(record.to_line())
    }

    /// Remove all rows at the given positions at once.
    /// Any index out of range aborts the whole deletion.
    pub fn delete(&mut self, indices: &BTreeSet<usize>) -> AppResult<usize> {
        if let Some(&index) = indices.iter().find(|&&i| i >= self.rows.len()) {
            return Err(AppError::RowOutOfRange {
                index,
                len: self.len(),
            });
        }

        let before = self.rows.len();
        let mut pos = 0;
        self.rows.retain(|_| {
            let keep = !indices.contains(&pos);
            pos += 1;
            keep
        });

        let removed = before - self.rows.len();
        tracing::debug!(removed, "rows deleted");
        Ok(removed)
    }

    /// Header plus one newline-terminated line per row, in insertion order.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.header.len() + 1 + self.rows.len() * 32);
        out.push_str(&self.header);
        out.push('\n');
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }
}
