//! Data directory layout and the application-wide configuration.
//!
//! ```text
//! ~/.timeaftertime/
//!   timeaftertime.conf        last=<name|None>
//!   Client_A/
//!     ts_client_a.csv
//!     ts_client_a.conf
//! ```

use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, is_valid_dir_name, sanitize_name};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod store;

pub use store::{ConfigMap, ConfigStore};

/// Name of the data directory under the user's home.
pub const APP_DIR_NAME: &str = ".timeaftertime";

/// Global config file inside the data directory.
pub const GLOBAL_CONFIG_FILE: &str = "timeaftertime.conf";

/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "TIMEAFTERTIME_DIR";

/// Key of the "last opened" pointer.
pub const LAST_KEY: &str = "last";

/// Stored in place of a name when no timesheet is selected.
pub const NONE_SENTINEL: &str = "None";

/// Root directory holding every timesheet plus the global config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `--data-dir` wins, then `$TIMEAFTERTIME_DIR`, then `~/.timeaftertime`.
    pub fn resolve(override_dir: Option<&str>) -> Self {
        if let Some(dir) = override_dir {
            return Self::new(expand_tilde(dir));
        }
        Self::new(Self::default_root())
    }

    pub fn default_root() -> PathBuf {
        if let Ok(dir) = env::var(DATA_DIR_ENV)
            && !dir.trim().is_empty()
        {
            return expand_tilde(&dir);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Make sure the root and the global config exist.
    pub fn ensure(&self) -> AppResult<()> {
        fs::create_dir_all(&self.root)?;

        let global = self.global_config();
        if !global.store().exists() {
            global.store().initialize(&[(LAST_KEY, NONE_SENTINEL)])?;
            tracing::info!(root = %self.root.display(), "data directory initialized");
        }

        Ok(())
    }

    pub fn global_config(&self) -> GlobalConfig {
        GlobalConfig::new(ConfigStore::new(self.root.join(GLOBAL_CONFIG_FILE)))
    }

    /// Directory name for a user-facing timesheet name.
    pub fn dir_name(name: &str) -> AppResult<String> {
        let dir = sanitize_name(name);
        if !is_valid_dir_name(&dir) || dir == NONE_SENTINEL {
            return Err(AppError::Config(format!("Invalid timesheet name '{}'", name)));
        }
        Ok(dir)
    }

    pub fn timesheet_dir(&self, dir_name: &str) -> PathBuf {
        self.root.join(dir_name)
    }

    pub fn csv_path(&self, dir_name: &str) -> PathBuf {
        self.timesheet_dir(dir_name)
            .join(format!("ts_{}.csv", dir_name.to_lowercase()))
    }

    pub fn conf_path(&self, dir_name: &str) -> PathBuf {
        self.timesheet_dir(dir_name)
            .join(format!("ts_{}.conf", dir_name.to_lowercase()))
    }

    pub fn exists(&self, name: &str) -> bool {
        match Self::dir_name(name) {
            Ok(dir) => self.timesheet_dir(&dir).is_dir(),
            Err(_) => false,
        }
    }

    /// Names of all timesheets, sorted.
    pub fn list_timesheets(&self) -> AppResult<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Remove a timesheet that is not open.
    ///
    /// The global pointer is reset to `None` first when it names this
    /// timesheet, so it never points at a deleted directory.
    pub fn delete_timesheet(&self, name: &str, global: &GlobalConfig) -> AppResult<()> {
        let dir_name = Self::dir_name(name)?;
        let dir = self.timesheet_dir(&dir_name);

        if !dir.is_dir() {
            return Err(AppError::NotFound(name.to_string()));
        }

        if global.last()?.as_deref() == Some(dir_name.as_str()) {
            global.set_last(None)?;
        }

        fs::remove_dir_all(&dir)?;
        tracing::info!(timesheet = %dir_name, "timesheet deleted");
        Ok(())
    }
}

/// The application-wide config: which timesheet was open last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalConfig {
    store: ConfigStore,
}

impl GlobalConfig {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// `None` when nothing was opened yet or the file is missing.
    pub fn last(&self) -> AppResult<Option<String>> {
        if !self.store.exists() {
            return Ok(None);
        }

        let map = self.store.read()?;
        Ok(match map.get(LAST_KEY) {
            None => None,
            Some(v) if v.is_empty() || v == NONE_SENTINEL => None,
            Some(v) => Some(v.to_string()),
        })
    }

    pub fn set_last(&self, name: Option<&str>) -> AppResult<()> {
        self.store
            .update(LAST_KEY, name.unwrap_or(NONE_SENTINEL))
    }
}
