//! API key discovery.
//!
//! Precedence:
//!
//! 1. An explicit key (the `--api-key` flag or `GEMINI_API_KEY`)
//! 2. The first config file in [`CONFIG_PATHS`] that yields a key
//!
//! Within a file, sections are tried in [`SECTIONS`] order and keys in
//! [`KEYS`] order. Empty values and the template placeholder
//! `your-api-key-here` count as absent. Files that fail to parse are skipped.
//!
//! ```ini
//! [gemini]
//! api_key = AIza...
//! ```

use crate::error::{PosterError, Result};
use crate::fs::expand_home;
use ini::Ini;
use secrecy::SecretString;
use std::path::{Path, PathBuf};

/// Config files searched for a key, in order.
pub const CONFIG_PATHS: &[&str] = &[
    "~/.config/bxz-poster-gen/config.ini",
    "~/.config/bxz-xhs/config.ini",
];

/// Section names that may hold the key, in order.
pub const SECTIONS: &[&str] = &["gemini", "gemini_nano", "google"];

/// Key names accepted within a section, in order.
pub const KEYS: &[&str] = &["api_key", "apikey", "key"];

/// Value shipped in the sample config; never a real key.
pub const PLACEHOLDER: &str = "your-api-key-here";

/// Resolve the API key for a run.
///
/// Returns [`PosterError::MissingApiKey`] when no source provides one, which
/// stops the run before any API call.
pub fn resolve_api_key(explicit: Option<&str>) -> Result<SecretString> {
    if let Some(key) = explicit.and_then(usable_key) {
        tracing::debug!("using API key from command line or environment");
        return Ok(SecretString::from(key));
    }

    let paths: Vec<PathBuf> = CONFIG_PATHS.iter().map(|p| expand_home(p)).collect();
    discover_api_key(&paths).ok_or(PosterError::MissingApiKey)
}

/// Search config files in order for the first usable key.
pub fn discover_api_key(paths: &[PathBuf]) -> Option<SecretString> {
    paths.iter().find_map(|path| {
        let key = key_from_file(path)?;
        tracing::debug!(path = %path.display(), "using API key from config file");
        Some(SecretString::from(key))
    })
}

fn key_from_file(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    match Ini::load_from_file(path) {
        Ok(ini) => key_from_ini(&ini),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable config file");
            None
        }
    }
}

/// First usable key in a parsed config.
///
/// Section names match exactly; key names match regardless of ASCII case.
pub fn key_from_ini(ini: &Ini) -> Option<String> {
    SECTIONS
        .iter()
        .filter_map(|section| ini.section(Some(*section)))
        .flat_map(|props| {
            KEYS.iter().flat_map(move |key| {
                props
                    .iter()
                    .filter(move |(name, _)| name.eq_ignore_ascii_case(key))
                    .map(|(_, value)| value)
            })
        })
        .find_map(usable_key)
}

fn usable_key(raw: &str) -> Option<String> {
    match raw.trim() {
        "" | PLACEHOLDER => None,
        key => Some(key.to_string()),
    }
}
