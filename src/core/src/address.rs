//! Ethereum address validation.
//!
//! Addresses are accepted in the same forms a web3 client accepts them:
//! 40 hex digits with or without a `0x` prefix. All-lowercase and
//! all-uppercase addresses carry no checksum; mixed-case addresses must be
//! valid EIP-55.

use crate::errors::CoreError;
use ethers::types::Address;
use ethers::utils::to_checksum;
use std::str::FromStr;

/// Parses and validates an Ethereum address.
pub fn parse_address(input: &str) -> Result<Address, CoreError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::InvalidAddress(input.to_string()));
    }

    let address = Address::from_str(digits)
        .map_err(|e| CoreError::InvalidAddress(format!("{}: {}", input, e)))?;

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        let expected = to_checksum(&address, None);
        if expected[2..] != *digits {
            return Err(CoreError::InvalidChecksum {
                input: input.to_string(),
                expected,
            });
        }
    }

    Ok(address)
}

/// Returns true if the input is a valid address.
pub fn is_address(input: &str) -> bool {
    parse_address(input).is_ok()
}
