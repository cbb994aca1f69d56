//! File helpers. Every persisted file goes through a temporary file in the
//! target directory followed by an atomic rename, so readers never observe a
//! truncated file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

fn staged(path: &Path, contents: &str) -> io::Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

/// Replace `path` with `contents` in one step.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let tmp = staged(path, contents)?;
    tmp.persist(path).map_err(|e| e.error)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "file written");
    Ok(())
}

/// Create `path` with `contents`; fails with `AlreadyExists` if it is there.
pub fn write_atomic_new(path: &Path, contents: &str) -> io::Result<()> {
    let tmp = staged(path, contents)?;
    tmp.persist_noclobber(path).map_err(|e| e.error)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "file created");
    Ok(())
}
