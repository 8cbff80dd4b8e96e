//! rbfixture - Rigid-body solver fixture generator
//!
//! Builds a deterministic scene document from [`config::AppConfig`] and writes
//! it as JSON under the fixture root.

pub mod config;

use std::path::PathBuf;

use rbfixture_core::{build_scene, save_fixture, FixtureError};

use config::AppConfig;

/// Build the configured fixture and save it, returning the written path
///
/// The scene is fully built before anything touches the filesystem, so an
/// invalid configuration never creates directories or files.
pub fn generate_fixture(config: &AppConfig) -> Result<PathBuf, FixtureError> {
    let definition = config.to_fixture_definition();
    let built = build_scene(&definition)?;
    let path = built.output_path(&config.fixture_root());
    save_fixture(&built.document, &path)?;
    Ok(path)
}
