//! Flat `key=value` configuration files.
//!
//! One store backs each timesheet (`name`, `rate`, `currency`, `timebase`)
//! and one backs the application-wide `last` pointer. Every line is kept as
//! it was read; an update replaces the one line holding the key and writes
//! the others back untouched.

use crate::errors::{AppError, AppResult};
use crate::utils::fs::{write_atomic, write_atomic_new};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One line of a config file, verbatim, plus its pair when it holds one.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ConfigLine {
    raw: String,
    entry: Option<(String, String)>,
}

/// Lines of one config file, in file order.
///
/// When a key appears more than once, the first occurrence is the one read
/// and the one rewritten; later ones are kept as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap {
    lines: Vec<ConfigLine>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> impl Iterator<Item = &(String, String)> {
        self.lines.iter().filter_map(|l| l.entry.as_ref())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Rewrite the line holding `key`, or append a new line at the end.
    pub fn set(&mut self, key: &str, value: &str) {
        let raw = format!("{}={}", key, value);
        let entry = Some((key.to_string(), value.to_string()));

        match self
            .lines
            .iter_mut()
            .find(|l| matches!(&l.entry, Some((k, _)) if k == key))
        {
            Some(line) => {
                line.raw = raw;
                line.entry = entry;
            }
            None => self.lines.push(ConfigLine { raw, entry }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of `key=value` lines, repeated keys included.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn parse(text: &str) -> AppResult<Self> {
        let mut map = Self::new();

        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                map.lines.push(ConfigLine {
                    raw: line.to_string(),
                    entry: None,
                });
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| AppError::ConfigFormat {
                line: i + 1,
                content: line.to_string(),
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(AppError::ConfigFormat {
                    line: i + 1,
                    content: line.to_string(),
                });
            }

            map.lines.push(ConfigLine {
                raw: line.to_string(),
                entry: Some((key.to_string(), value.trim_end_matches('\r').to_string())),
            });
        }

        Ok(map)
    }

    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{}\n", l.raw))
            .collect()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k.as_ref(), v.as_ref());
        }
        map
    }
}

/// Reject a pair that could not be written back as a single line.
pub fn check_pair(key: &str, value: &str) -> AppResult<()> {
    if key.is_empty() || key.contains(['=', '\n', '\r']) || value.contains(['\n', '\r']) {
        return Err(AppError::ConfigFormat {
            line: 0,
            content: format!("{}={}", key, value),
        });
    }
    Ok(())
}

/// A `key=value` file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn read(&self) -> AppResult<ConfigMap> {
        let text = fs::read_to_string(&self.path)?;
        ConfigMap::parse(&text)
    }

    /// Rewrite one key, keeping every other line as it was.
    /// A missing file is treated as empty.
    pub fn update(&self, key: &str, value: &str) -> AppResult<()> {
        check_pair(key, value)?;

        let mut map = match self.read() {
            Ok(map) => map,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::NotFound => ConfigMap::new(),
            Err(e) => return Err(e),
        };

        map.set(key, value);
        write_atomic(&self.path, &map.render())?;

        tracing::debug!(path = %self.path.display(), key, value, "config updated");
        Ok(())
    }

    /// Create the file with the given pairs. Never overwrites.
    pub fn initialize(&self, pairs: &[(&str, &str)]) -> AppResult<()> {
        for (k, v) in pairs {
            check_pair(k, v)?;
        }

        let map: ConfigMap = pairs.iter().copied().collect();

        write_atomic_new(&self.path, &map.render()).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                AppError::AlreadyExists(self.path.display().to_string())
            } else {
                AppError::Io(e)
            }
        })?;

        tracing::debug!(path = %self.path.display(), keys = pairs.len(), "config initialized");
        Ok(())
    }
}
