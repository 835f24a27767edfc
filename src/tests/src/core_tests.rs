//! Tests for the core crate.

use ethers::types::{Address, U256};
use ethers::utils::to_checksum;
use mosaic_core::{is_address, parse_address, parse_bytes32, CoreError, GasDefaults, TxOptions};
use rand::Rng;

/// Tests that every checksummed or single-case address is accepted.
#[test]
fn test_random_addresses() {
    let mut rng = rand::thread_rng();

    for _ in 0..32 {
        let mut raw = [0u8; 20];
        rng.fill(&mut raw);
        let address = Address::from(raw);

        let checksummed = to_checksum(&address, None);
        assert_eq!(parse_address(&checksummed).unwrap(), address);
        assert_eq!(parse_address(&checksummed.to_lowercase()).unwrap(), address);
    }
}

/// Tests that malformed addresses are rejected.
#[test]
fn test_invalid_addresses() {
    for input in ["", "0x", "gateway", "0x0123", "0x012345678901234567890123456789012345678g"] {
        assert!(!is_address(input), "{} should be rejected", input);
    }
}

/// Tests the merging of caller options over gas defaults.
#[test]
fn test_gas_defaults() {
    let defaults = GasDefaults::default();
    assert_eq!(defaults.gas_price, U256::from(0x5B9ACA00u64));
    assert_eq!(defaults.gas, U256::from(1_000_000u64));

    let sender = Address::random();

    // Nothing supplied
    let resolved = TxOptions::new().from(sender).merge(&defaults).require_from().unwrap();
    assert_eq!(resolved.gas_price, defaults.gas_price);
    assert_eq!(resolved.gas, defaults.gas);

    // Everything supplied
    let resolved = TxOptions::new()
        .from(sender)
        .gas_price(1u64)
        .gas(2u64)
        .merge(&defaults)
        .require_from()
        .unwrap();
    assert_eq!(resolved.gas_price, U256::from(1u64));
    assert_eq!(resolved.gas, U256::from(2u64));
}

/// Tests the validation of 32-byte arguments.
#[test]
fn test_bytes32_arguments() {
    let mut rng = rand::thread_rng();
    let mut secret = [0u8; 32];
    rng.fill(&mut secret);

    let hex_secret = format!("0x{}", hex::encode(secret));
    assert_eq!(parse_bytes32(&hex_secret).unwrap(), secret);

    assert!(matches!(
        parse_bytes32(&hex_secret[..40]),
        Err(CoreError::InvalidLength { expected: 32, .. })
    ));
}
