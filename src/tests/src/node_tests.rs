//! Tests against a local Ethereum node.
//!
//! These expect a development node at `http://localhost:8545` with the
//! gateway contracts deployed at the addresses below.

use ethers::types::{Bytes, U256};
use mosaic_bridge::{
    provider::{connect_http, connect_with_wallet},
    CoGatewayClient, GatewayClient,
};
use mosaic_core::{parse_address, TxOptions};
use rand::Rng;
use serial_test::serial;
use std::sync::Arc;
use tokio::runtime::Runtime;

const NODE: &str = "http://localhost:8545";
const GATEWAY: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
const CO_GATEWAY: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
const FACILITATOR: &str = "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB";
const FACILITATOR_KEY: &str = "0x0123456789012345678901234567890123456789012345678901234567890123";

/// Tests connecting a gateway client to a node.
#[test]
#[serial]
#[ignore] // Requires a local Ethereum node
fn test_gateway_connect() {
    // Create a runtime
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let provider = connect_with_wallet(NODE, FACILITATOR_KEY).await.unwrap();
        let gateway = GatewayClient::new(Arc::new(provider), GATEWAY);

        // Check that the gateway was created successfully
        assert!(gateway.is_ok());
    });
}

/// Tests progressing a stake with an unknown message hash.
#[test]
#[serial]
#[ignore] // Requires a local Ethereum node
fn test_progress_unknown_stake() {
    // Create a runtime
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let gateway = GatewayClient::connect(NODE, GATEWAY).unwrap();

        // Create a random message hash and secret
        let mut rng = rand::thread_rng();
        let mut message_hash = [0u8; 32];
        let mut unlock_secret = [0u8; 32];
        rng.fill(&mut message_hash);
        rng.fill(&mut unlock_secret);

        let from = parse_address(FACILITATOR).unwrap();
        let result = gateway
            .progress_stake(message_hash, unlock_secret, TxOptions::new().from(from))
            .await;

        // The contract rejects stakes it has never seen
        assert!(result.is_err());
    });
}

/// Tests proving the gateway with an empty proof.
#[test]
#[serial]
#[ignore] // Requires a local Ethereum node
fn test_prove_gateway_with_empty_proof() {
    // Create a runtime
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let provider = connect_http(NODE).unwrap();
        let co_gateway = CoGatewayClient::new(Arc::new(provider), CO_GATEWAY, FACILITATOR).unwrap();

        let result = co_gateway
            .prove_gateway(U256::zero(), Bytes::default(), Bytes::default(), TxOptions::new())
            .await;

        // An empty proof never verifies
        assert!(result.is_err());
    });
}
