//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error when a string is not a 20-byte hex address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Error when a mixed-case address does not match its EIP-55 checksum.
    #[error("Invalid checksum for address {input}, expected {expected}")]
    InvalidChecksum {
        /// The address as supplied
        input: String,
        /// The correctly checksummed form
        expected: String,
    },

    /// Error when a string is not valid hex.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Error when decoded bytes have the wrong length.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// The expected length
        expected: usize,
        /// The actual length
        actual: usize,
    },

    /// Error when a number cannot be parsed.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Error when a mandatory transaction option was not supplied.
    #[error("Mandatory transaction option '{0}' is missing")]
    MissingOption(&'static str),
}
