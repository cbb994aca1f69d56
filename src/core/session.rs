//! One open timesheet: its rows, its settings and the dirty flag.

use crate::config::store::check_pair;
use crate::config::{ConfigStore, DataDir, GlobalConfig};
use crate::core::rules::EntryRules;
use crate::core::store::{AppendReport, RecordStore, RowEdit};
use crate::errors::{AppError, AppResult};
use crate::models::{RawEntry, TimeBase};
use crate::utils::fs::{write_atomic, write_atomic_new};
use crate::utils::number::is_plain_decimal;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Currency used when an older config file has none.
pub const DEFAULT_CURRENCY: &str = "£";

pub const KEY_NAME: &str = "name";
pub const KEY_RATE: &str = "rate";
pub const KEY_CURRENCY: &str = "currency";
pub const KEY_TIMEBASE: &str = "timebase";

/// Per-timesheet settings as read from `ts_<name>.conf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSettings {
    pub name: String,
    pub rate: String,
    pub currency: String,
    pub time_base: TimeBase,
}

#[derive(Debug)]
pub struct TimesheetSession {
    dir: PathBuf,
    csv_path: PathBuf,
    config: ConfigStore,
    settings: SheetSettings,
    store: RecordStore,
    dirty: bool,
}

impl TimesheetSession {
    /// Create the directory and both files of a new timesheet.
    pub fn create(
        data_dir: &DataDir,
        name: &str,
        rate: &str,
        currency: Option<&str>,
        time_base: TimeBase,
    ) -> AppResult<Self> {
        let dir_name = DataDir::dir_name(name)?;
        let rate = rate.trim();
        if !is_plain_decimal(rate) {
            return Err(AppError::Config(format!(
                "Default rate must be a non-negative decimal, got '{}'",
                rate
            )));
        }
        let currency = currency.map(str::trim).unwrap_or(DEFAULT_CURRENCY);
        if currency.is_empty() {
            return Err(AppError::Config("Currency cannot be empty".into()));
        }

        let pairs = [
            (KEY_NAME, dir_name.as_str()),
            (KEY_RATE, rate),
            (KEY_CURRENCY, currency),
            (KEY_TIMEBASE, time_base.as_str()),
        ];
        for (key, value) in &pairs {
            check_pair(key, value)?;
        }

        let dir = data_dir.timesheet_dir(&dir_name);
        fs::create_dir_all(data_dir.root())?;
        fs::create_dir(&dir).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                AppError::AlreadyExists(dir_name.clone())
            } else {
                AppError::Io(e)
            }
        })?;

        let store = RecordStore::new();
        let csv_path = data_dir.csv_path(&dir_name);
        let config = ConfigStore::new(data_dir.conf_path(&dir_name));

        let written = write_atomic_new(&csv_path, &store.serialize())
            .map_err(AppError::from)
            .and_then(|_| config.initialize(&pairs));

        // a half-written timesheet could be neither opened nor created again
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_dir_all(&dir) {
                tracing::warn!(dir = %dir.display(), error = %cleanup, "cannot remove partial timesheet");
            }
            return Err(e);
        }

        tracing::info!(timesheet = %dir_name, rate, currency, timebase = %time_base, "timesheet created");

        Ok(Self {
            dir,
            csv_path,
            config,
            settings: SheetSettings {
                name: dir_name,
                rate: rate.to_string(),
                currency: currency.to_string(),
                time_base,
            },
            store,
            dirty: false,
        })
    }

    /// Load an existing timesheet. A config without `currency` gets the
    /// default written back straight away.
    pub fn open(data_dir: &DataDir, name: &str) -> AppResult<Self> {
        let dir_name = DataDir::dir_name(name)?;
        let dir = data_dir.timesheet_dir(&dir_name);
        if !dir.is_dir() {
            return Err(AppError::NotFound(name.to_string()));
        }

        let csv_path = data_dir.csv_path(&dir_name);
        let store = RecordStore::load(&fs::read_to_string(&csv_path)?)?;

        let config = ConfigStore::new(data_dir.conf_path(&dir_name));
        let map = config.read()?;

        let rate = map.get(KEY_RATE).unwrap_or_default().to_string();
        let time_base = match map.get(KEY_TIMEBASE) {
            Some(tb) => tb.parse()?,
            None => TimeBase::Day,
        };
        let currency = match map.get(KEY_CURRENCY) {
            Some(c) => c.to_string(),
            None => {
                config.update(KEY_CURRENCY, DEFAULT_CURRENCY)?;
                DEFAULT_CURRENCY.to_string()
            }
        };
        let name = map.get(KEY_NAME).unwrap_or(dir_name.as_str()).to_string();

        tracing::info!(timesheet = %name, rows = store.len(), "timesheet opened");

        Ok(Self {
            dir,
            csv_path,
            config,
            settings: SheetSettings {
                name,
                rate,
                currency,
                time_base,
            },
            store,
            dirty: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    pub fn settings(&self) -> &SheetSettings {
        &self.settings
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Normalization rules for this timesheet's time base and default rate.
    pub fn rules(&self) -> EntryRules {
        EntryRules::new(self.settings.time_base, self.settings.rate.clone())
    }

    pub fn append(&mut self, rows: &[RawEntry]) -> AppendReport {
        let rules = self.rules();
        self.append_with(rows, &rules)
    }

    pub fn append_with(&mut self, rows: &[RawEntry], rules: &EntryRules) -> AppendReport {
        let report = self.store.append(rows, rules);
        if !report.appended.is_empty() {
            self.dirty = true;
        }
        report
    }

    pub fn edit(&mut self, index: usize, expected: &str, fields: &RawEntry) -> AppResult<bool> {
        let rules = self.rules();
        let changed = self.store.edit(index, expected, fields, &rules)?;
        self.dirty |= changed;
        Ok(changed)
    }

    pub fn edit_many(&mut self, edits: &[RowEdit]) -> AppResult<usize> {
        let rules = self.rules();
        let changed = self.store.edit_many(edits, &rules)?;
        self.dirty |= changed > 0;
        Ok(changed)
    }

    pub fn delete(&mut self, indices: &BTreeSet<usize>) -> AppResult<usize> {
        let removed = self.store.delete(indices)?;
        self.dirty |= removed > 0;
        Ok(removed)
    }

    pub fn set_rate(&mut self, rate: &str) -> AppResult<()> {
        let rate = rate.trim();
        if !is_plain_decimal(rate) {
            return Err(AppError::Config(format!(
                "Rate must be a non-negative decimal, got '{}'",
                rate
            )));
        }
        self.config.update(KEY_RATE, rate)?;
        self.settings.rate = rate.to_string();
        self.dirty = true;
        Ok(())
    }

    pub fn set_currency(&mut self, currency: &str) -> AppResult<()> {
        let currency = currency.trim();
        if currency.is_empty() {
            return Err(AppError::Config("Currency cannot be empty".into()));
        }
        self.config.update(KEY_CURRENCY, currency)?;
        self.settings.currency = currency.to_string();
        self.dirty = true;
        Ok(())
    }

    /// Existing rows keep their durations; only new input is read in the
    /// new unit.
    pub fn set_time_base(&mut self, time_base: TimeBase) -> AppResult<()> {
        self.config.update(KEY_TIMEBASE, time_base.as_str())?;
        self.settings.time_base = time_base;
        self.dirty = true;
        Ok(())
    }

    /// Write the rows if anything changed. Returns whether a write happened.
    pub fn save(&mut self) -> AppResult<bool> {
        if !self.dirty {
            return Ok(false);
        }

        write_atomic(&self.csv_path, &self.store.serialize())?;
        self.dirty = false;

        tracing::info!(timesheet = %self.settings.name, rows = self.store.len(), "timesheet saved");
        Ok(true)
    }

    /// Save, then remember this timesheet as the last one opened.
    pub fn close(mut self, global: &GlobalConfig) -> AppResult<()> {
        self.save()?;
        global.set_last(Some(&self.settings.name))?;
        tracing::debug!(timesheet = %self.settings.name, "timesheet closed");
        Ok(())
    }

    /// Remove this timesheet from disk. Unsaved changes are discarded and the
    /// global pointer is reset first when it names this timesheet.
    pub fn delete_self(self, global: &GlobalConfig) -> AppResult<()> {
        if global.last()?.as_deref() == Some(self.settings.name.as_str()) {
            global.set_last(None)?;
        }

        fs::remove_dir_all(&self.dir)?;
        tracing::info!(timesheet = %self.settings.name, "timesheet deleted");
        Ok(())
    }
}
