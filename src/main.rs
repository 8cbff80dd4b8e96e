//! rbfixture - Rigid-body solver fixture generator
//!
//! Writes the configured scene fixture to
//! `<fixture_root>/<category>/<stem>-<instance count>.json`.

use std::process::ExitCode;

use rbfixture::config::AppConfig;
use rbfixture::generate_fixture;

fn main() -> ExitCode {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    match generate_fixture(&config) {
        Ok(path) => {
            log::info!("Fixture written to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to generate fixture: {}", e);
            ExitCode::FAILURE
        }
    }
}
