//! Crash-safe file replacement.
//!
//! Content lands in a hidden sibling `.{name}.tmp`, is flushed with fsync, and
//! is then renamed over the target. The sibling shares the target's filesystem,
//! so readers see either the old file or the complete new one. A stray `.tmp`
//! can survive a crash; it is never read back.

use super::ensure_dir;
use crate::error::{PosterError, Result};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Replace `path` with `content`, creating missing parent directories.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let target = path.as_ref();
    if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
        ensure_dir(dir)?;
    }

    let staging = staging_path(target)?;
    let written = stage(&staging, content).and_then(|()| {
        commit(&staging, target).map_err(|e| {
            PosterError::Io(format!("failed to move '{}' into place: {}", target.display(), e))
        })
    });
    if written.is_err() {
        let _ = std::fs::remove_file(&staging);
    }
    written
}

/// [`atomic_write`] for text.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn staging_path(target: &Path) -> Result<PathBuf> {
    let name = target
        .file_name()
        .ok_or_else(|| PosterError::Io(format!("'{}' has no file name", target.display())))?;

    let mut hidden = OsString::with_capacity(name.len() + 5);
    hidden.push(".");
    hidden.push(name);
    hidden.push(".tmp");
    Ok(target.with_file_name(hidden))
}

fn stage(staging: &Path, content: &[u8]) -> Result<()> {
    let io_err = |e: std::io::Error| {
        PosterError::Io(format!("failed to stage '{}': {}", staging.display(), e))
    };
    let mut file = std::fs::File::create(staging).map_err(io_err)?;
    file.write_all(content).map_err(io_err)?;
    file.sync_all().map_err(io_err)
}

fn commit(staging: &Path, target: &Path) -> std::io::Result<()> {
    // Windows will not rename onto an existing file.
    #[cfg(windows)]
    if target.exists() {
        std::fs::remove_file(target)?;
    }
    std::fs::rename(staging, target)
}
