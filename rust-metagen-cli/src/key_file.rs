//! Plain-text API key storage.
//!
//! The file holds nothing but the key. Surrounding whitespace is ignored on load
//! and stripped on save.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Reads the key stored at `path`.
pub fn load_api_key(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read API key file '{}'", path.display()))?;
    let key = raw.trim();
    if key.is_empty() {
        bail!("API key file '{}' is empty", path.display());
    }
    Ok(key.to_string())
}

/// Writes `key` to `path`, replacing any previous content.
pub fn save_api_key(path: &Path, key: &str) -> Result<()> {
    let key = key.trim();
    if key.is_empty() {
        bail!("Refusing to save an empty API key");
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, key)
        .with_context(|| format!("Failed to write API key file '{}'", path.display()))?;
    Ok(())
}
