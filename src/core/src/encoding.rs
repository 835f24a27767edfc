//! Decoding of hex and numeric arguments passed to contract methods.

use crate::errors::CoreError;
use ethers::types::{Bytes, U256};

fn strip_hex_prefix(input: &str) -> &str {
    let trimmed = input.trim();
    trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
}

/// Decodes a hex string into dynamic bytes, e.g. an RLP-encoded proof.
pub fn parse_bytes(input: &str) -> Result<Bytes, CoreError> {
    let raw = hex::decode(strip_hex_prefix(input))
        .map_err(|e| CoreError::InvalidHex(format!("{}: {}", input, e)))?;
    Ok(Bytes::from(raw))
}

/// Decodes a hex string into exactly 32 bytes.
pub fn parse_bytes32(input: &str) -> Result<[u8; 32], CoreError> {
    let raw = hex::decode(strip_hex_prefix(input))
        .map_err(|e| CoreError::InvalidHex(format!("{}: {}", input, e)))?;

    if raw.len() != 32 {
        return Err(CoreError::InvalidLength {
            expected: 32,
            actual: raw.len(),
        });
    }

    let mut out = [0u8; 32];
    out.copy_from_slice(&raw);
    Ok(out)
}

/// Parses a decimal or `0x`-prefixed hex number.
///
/// The digits must be non-empty and contain nothing but digits of the radix.
pub fn parse_u256(input: &str) -> Result<U256, CoreError> {
    let trimmed = input.trim();
    let invalid = || CoreError::InvalidNumber(input.to_string());

    let prefixed = trimmed.starts_with("0x") || trimmed.starts_with("0X");
    let digits = strip_hex_prefix(trimmed);
    if digits.is_empty() {
        return Err(invalid());
    }

    if prefixed {
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        U256::from_str_radix(digits, 16).map_err(|_| invalid())
    } else {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        U256::from_dec_str(digits).map_err(|_| invalid())
    }
}
