//! Core primitives for the Mosaic facilitator.
//!
//! This crate holds the pieces shared by the gateway clients and the CLI:
//! address validation, decoding of contract arguments, and the transaction
//! options merged into every contract call.

pub mod address;
pub mod encoding;
pub mod errors;
pub mod types;

// Re-export commonly used types
pub use address::{is_address, parse_address};
pub use encoding::{parse_bytes, parse_bytes32, parse_u256};
pub use errors::CoreError;
pub use types::{GasDefaults, MergedTxOptions, ResolvedTxOptions, TxOptions};
