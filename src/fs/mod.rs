//! Filesystem helpers for poster output.
//!
//! Every artifact (request record, panel images, prompt text, merged poster)
//! goes through [`atomic_write`], so a crash never leaves a half-written file
//! under its final name. Cleanup of intermediate panels goes through
//! [`remove_if_exists`], which makes it safe to replay.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};

use crate::error::{PosterError, Result};
use std::path::{Path, PathBuf};

/// Remove a file if it is present.
///
/// Returns `true` when a file was actually deleted.
pub fn remove_if_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(path).map_err(|e| {
        PosterError::Io(format!("failed to remove '{}': {}", path.display(), e))
    })?;
    Ok(true)
}

/// Create a directory (and its parents) if it does not exist yet.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path).map_err(|e| {
        PosterError::Io(format!(
            "failed to create output directory '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Expand a leading `~` to the current user's home directory.
///
/// Paths without a leading `~` (and paths on systems with no home directory)
/// are returned unchanged.
pub fn expand_home(raw: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (raw.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') || rest.starts_with('\\') => {
            home.join(&rest[1..])
        }
        _ => PathBuf::from(raw),
    }
}
