//! Error types for the bridge crate.

use mosaic_core::CoreError;
use thiserror::Error;

/// Errors that can occur in the bridge crate.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Error when the Ethereum client cannot be created or reached.
    #[error("Ethereum error: {0}")]
    EthereumError(String),

    /// Error when a contract call cannot be built or sent.
    #[error("Contract error: {0}")]
    ContractError(String),

    /// Error when a sent transaction fails or is dropped.
    #[error("Transaction error: {0}")]
    TransactionError(String),

    /// Error when a signing key is invalid.
    #[error("Signature error: {0}")]
    SignatureError(String),

    /// Error when a constructor address is invalid.
    #[error("Mandatory parameter '{param}' is missing or invalid: {reason}")]
    InvalidAddress {
        /// The parameter that failed validation
        param: &'static str,
        /// Why it failed
        reason: String,
    },

    /// Error when a contract ABI cannot be loaded.
    #[error("ABI error: {0}")]
    AbiError(String),

    /// Error raised by the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),
}
