//! Fixture persistence
//!
//! Resolves the fixture root and writes scene documents as pretty JSON.
//! Writes go to a per-process temporary sibling that is renamed into place, so
//! a failed save never leaves a truncated fixture at the target path.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FixtureError;
use crate::scene::SceneDocument;

/// Environment variable that overrides the fixture root
pub const FIXTURE_DIR_ENV: &str = "RBF_FIXTURE_DIR";

/// Fixture root used when the environment does not name one
pub const DEFAULT_FIXTURE_DIR: &str = "fixtures";

/// Base directory fixtures are written under
///
/// `$RBF_FIXTURE_DIR` if set and non-empty, otherwise `fixtures` relative to
/// the working directory.
pub fn fixture_dir_path() -> PathBuf {
    match std::env::var_os(FIXTURE_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_FIXTURE_DIR),
    }
}

/// Serialize a document exactly as [`save_fixture`] writes it
pub fn to_json_string(document: &SceneDocument) -> Result<String, FixtureError> {
    let mut contents = serde_json::to_string_pretty(document)?;
    contents.push('\n');
    Ok(contents)
}

/// Write `document` to `path` as JSON, creating missing directories
pub fn save_fixture(document: &SceneDocument, path: &Path) -> Result<(), FixtureError> {
    let contents = to_json_string(document)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_sibling(path);
    if let Err(e) = fs::write(&tmp_path, contents).and_then(|_| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    log::info!(
        "Saved fixture {} ({} rigid bodies)",
        path.display(),
        document.body_count()
    );
    Ok(())
}

/// Read a fixture written by [`save_fixture`]
pub fn load_fixture(path: &Path) -> Result<SceneDocument, FixtureError> {
    let contents = fs::read_to_string(path)?;
    let document = serde_json::from_str(&contents)?;
    Ok(document)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("fixture"));
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
