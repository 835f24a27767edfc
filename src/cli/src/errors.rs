//! Error types for the facilitator CLI.

use mosaic_bridge::BridgeError;
use mosaic_core::CoreError;
use thiserror::Error;

/// Errors that can occur in the facilitator CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when the configuration is incomplete or unreadable.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error when a file operation fails.
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    /// Error raised while talking to a gateway contract.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// Error raised while validating arguments.
    #[error(transparent)]
    Core(#[from] CoreError),
}
