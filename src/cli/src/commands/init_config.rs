//! Init-config command for the facilitator CLI.

use crate::config::FacilitatorConfig;
use crate::errors::CliError;
use std::path::Path;
use tracing::info;

/// Runs the init-config command.
///
/// Writes the default configuration to `path`, refusing to replace an
/// existing file unless `force` is set.
pub fn run<P: AsRef<Path>>(path: P, force: bool) -> Result<(), CliError> {
    let path = path.as_ref();
    if path.exists() && !force {
        return Err(CliError::ConfigError(format!(
            "{} already exists, use --force to overwrite it",
            path.display()
        )));
    }

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    FacilitatorConfig::default()
        .to_file(path)
        .map_err(|e| CliError::ConfigError(format!("Failed to write {}: {}", path.display(), e)))?;
    info!("Wrote default configuration to {}", path.display());

    Ok(())
}
