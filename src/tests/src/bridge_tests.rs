//! Tests for the bridge crate.

use ethers::{
    providers::{MockProvider, Provider},
    types::{Address, Bytes, Transaction, TransactionReceipt, TxHash, U256, U64},
};
use mosaic_bridge::{
    lifecycle::dispatch, AbiProvider, BridgeError, ChannelObserver, CoGatewayClient,
    GatewayClient, TxEvent,
};
use mosaic_core::{CoreError, GasDefaults, TxOptions};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const GATEWAY: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
const CO_GATEWAY: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
const FACILITATOR: &str = "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB";

fn random_bytes32() -> [u8; 32] {
    let mut rng = rand::thread_rng();
    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes);
    bytes
}

/// Returns a mocked provider polling pending transactions every few milliseconds.
fn fast_polling_provider() -> (Provider<MockProvider>, MockProvider) {
    let (provider, mock) = Provider::mocked();
    (provider.interval(Duration::from_millis(10)), mock)
}

/// Queues the node responses for a transaction that gets mined with `status`.
///
/// The mock serves responses last in, first out, so they are pushed in
/// reverse order: receipt, a not-yet-available receipt, the mined
/// transaction and finally the hash returned by `eth_sendTransaction`.
fn queue_mined(mock: &MockProvider, tx_hash: TxHash, status: u64) {
    let receipt = TransactionReceipt {
        transaction_hash: tx_hash,
        block_number: Some(U64::one()),
        status: Some(U64::from(status)),
        ..Default::default()
    };
    let transaction = Transaction {
        hash: tx_hash,
        block_number: Some(U64::one()),
        ..Default::default()
    };

    mock.push::<TransactionReceipt, _>(receipt).unwrap();
    mock.push::<Option<TransactionReceipt>, _>(None).unwrap();
    mock.push::<Transaction, _>(transaction).unwrap();
    mock.push::<TxHash, _>(tx_hash).unwrap();
}

/// Tests that constructing with invalid addresses fails and valid ones succeed.
#[test]
fn test_construction() {
    let (provider, _mock) = Provider::mocked();
    let provider = Arc::new(provider);

    assert!(GatewayClient::new(provider.clone(), GATEWAY).is_ok());
    assert!(GatewayClient::new(provider.clone(), "0xnot-an-address").is_err());

    assert!(CoGatewayClient::new(provider.clone(), CO_GATEWAY, FACILITATOR).is_ok());
    assert!(CoGatewayClient::new(provider.clone(), CO_GATEWAY, "").is_err());
    assert!(CoGatewayClient::new(provider, "", FACILITATOR).is_err());
}

/// Tests that a gateway call without a sender never reaches the node.
#[tokio::test]
async fn test_gateway_requires_sender() {
    let (provider, mock) = Provider::mocked();
    // A response is queued so that any request would succeed.
    mock.push::<TxHash, _>(TxHash::random()).unwrap();

    let (sender, mut receiver) = mpsc::unbounded_channel();
    let gateway = GatewayClient::new(Arc::new(provider), GATEWAY)
        .unwrap()
        .with_observer(Arc::new(ChannelObserver::new(sender)));

    let result = gateway
        .progress_stake(random_bytes32(), random_bytes32(), TxOptions::new())
        .await;

    assert!(matches!(result, Err(BridgeError::Core(CoreError::MissingOption("from")))));
    assert!(receiver.try_recv().is_err());
    assert!(mock.assert_request("eth_sendTransaction", ()).is_err());
}

/// Tests that the hash of an accepted transaction is relayed.
#[tokio::test]
async fn test_dispatch_relays_hash() {
    let (provider, mock) = Provider::mocked();
    let tx_hash = TxHash::random();
    mock.push::<TxHash, _>(tx_hash).unwrap();

    let co_gateway = CoGatewayClient::new(Arc::new(provider), CO_GATEWAY, FACILITATOR).unwrap();
    let call = co_gateway
        .progress_mint_raw_tx(random_bytes32(), random_bytes32(), TxOptions::new())
        .unwrap();

    let (sender, mut receiver) = mpsc::unbounded_channel();
    let observer = ChannelObserver::new(sender);

    let pending = dispatch(&call, &observer).await.unwrap();
    assert_eq!(pending.tx_hash(), tx_hash);
    assert_eq!(receiver.try_recv().unwrap(), TxEvent::TransactionHash(tx_hash));
}

/// Tests that a rejected transaction is relayed as an error and returned.
#[tokio::test]
async fn test_send_failure_relays_error() {
    // No responses are queued, so the node rejects everything.
    let (provider, _mock) = Provider::mocked();

    let (sender, mut receiver) = mpsc::unbounded_channel();
    let co_gateway = CoGatewayClient::new(Arc::new(provider), CO_GATEWAY, FACILITATOR)
        .unwrap()
        .with_observer(Arc::new(ChannelObserver::new(sender)));

    let result = co_gateway
        .prove_gateway(
            U256::from(10u64),
            Bytes::from(vec![0xf8]),
            Bytes::from(vec![0xc0]),
            TxOptions::new(),
        )
        .await;

    assert!(matches!(result, Err(BridgeError::ContractError(_))));
    assert!(matches!(receiver.try_recv().unwrap(), TxEvent::Error(_)));
    assert!(receiver.try_recv().is_err());
}

/// Tests that configured gas defaults and caller overrides reach the call.
#[test]
fn test_gas_defaults_and_overrides() {
    let (provider, _mock) = Provider::mocked();
    let defaults = GasDefaults {
        gas_price: U256::from(20_000_000_000u64),
        gas: U256::from(4_000_000u64),
    };
    let gateway = GatewayClient::with_abi_provider(Arc::new(provider), GATEWAY, &AbiProvider::new())
        .unwrap()
        .with_gas_defaults(defaults);
    let sender = Address::random();

    let call = gateway
        .progress_stake_raw_tx(random_bytes32(), random_bytes32(), TxOptions::new().from(sender))
        .unwrap();
    assert_eq!(call.tx.gas(), Some(&defaults.gas));
    assert_eq!(call.tx.gas_price(), Some(defaults.gas_price));

    let call = gateway
        .progress_stake_raw_tx(
            random_bytes32(),
            random_bytes32(),
            TxOptions::new().from(sender).gas(21_000u64).gas_price(1u64),
        )
        .unwrap();
    assert_eq!(call.tx.gas(), Some(&U256::from(21_000u64)));
    assert_eq!(call.tx.gas_price(), Some(U256::from(1u64)));
}

/// Tests that the nonce and value options are carried over.
#[test]
fn test_nonce_and_value() {
    let (provider, _mock): (Provider<MockProvider>, _) = Provider::mocked();
    let co_gateway = CoGatewayClient::new(Arc::new(provider), CO_GATEWAY, FACILITATOR).unwrap();

    let call = co_gateway
        .progress_mint_raw_tx(
            random_bytes32(),
            random_bytes32(),
            TxOptions::new().nonce(7u64).value(1u64),
        )
        .unwrap();

    assert_eq!(call.tx.nonce(), Some(&U256::from(7u64)));
    assert_eq!(call.tx.value(), Some(&U256::from(1u64)));
}

/// Tests that a mined transaction relays its hash then its receipt.
#[tokio::test]
async fn test_submit_relays_receipt() {
    let (provider, mock) = fast_polling_provider();
    let tx_hash = TxHash::random();
    queue_mined(&mock, tx_hash, 1);

    let (sender, mut receiver) = mpsc::unbounded_channel();
    let co_gateway = CoGatewayClient::new(Arc::new(provider), CO_GATEWAY, FACILITATOR)
        .unwrap()
        .with_observer(Arc::new(ChannelObserver::new(sender)));

    let result = co_gateway
        .progress_mint(random_bytes32(), random_bytes32(), TxOptions::new())
        .await
        .unwrap();

    assert_eq!(result.transaction_hash, tx_hash);
    assert_eq!(result.status, Some(U64::one()));
    assert_eq!(receiver.try_recv().unwrap(), TxEvent::TransactionHash(tx_hash));
    assert!(matches!(
        receiver.try_recv().unwrap(),
        TxEvent::Receipt(receipt) if receipt.transaction_hash == tx_hash
    ));
    assert!(receiver.try_recv().is_err());
}

/// Tests that a reverted transaction relays its hash then an error.
#[tokio::test]
async fn test_submit_relays_revert() {
    let (provider, mock) = fast_polling_provider();
    let tx_hash = TxHash::random();
    queue_mined(&mock, tx_hash, 0);

    let (sender, mut receiver) = mpsc::unbounded_channel();
    let gateway = GatewayClient::new(Arc::new(provider), GATEWAY)
        .unwrap()
        .with_observer(Arc::new(ChannelObserver::new(sender)));

    let result = gateway
        .progress_stake(
            random_bytes32(),
            random_bytes32(),
            TxOptions::new().from(Address::random()),
        )
        .await;

    match result {
        Err(BridgeError::TransactionError(message)) => assert!(message.contains("reverted")),
        other => panic!("expected a reverted transaction, got {:?}", other),
    }
    assert_eq!(receiver.try_recv().unwrap(), TxEvent::TransactionHash(tx_hash));
    assert!(matches!(receiver.try_recv().unwrap(), TxEvent::Error(e) if e.contains("reverted")));
    assert!(receiver.try_recv().is_err());
}

/// Tests that a transaction the node forgets about is reported as dropped.
#[tokio::test]
async fn test_submit_relays_dropped() {
    let (provider, mock) = fast_polling_provider();
    let tx_hash = TxHash::random();
    // The pending transaction looks the hash up once plus three retries.
    for _ in 0..4 {
        mock.push::<Option<Transaction>, _>(None).unwrap();
    }
    mock.push::<TxHash, _>(tx_hash).unwrap();

    let (sender, mut receiver) = mpsc::unbounded_channel();
    let co_gateway = CoGatewayClient::new(Arc::new(provider), CO_GATEWAY, FACILITATOR)
        .unwrap()
        .with_observer(Arc::new(ChannelObserver::new(sender)));

    let result = co_gateway
        .prove_gateway(
            U256::from(10u64),
            Bytes::from(vec![0xf8]),
            Bytes::from(vec![0xc0]),
            TxOptions::new(),
        )
        .await;

    match result {
        Err(BridgeError::TransactionError(message)) => assert!(message.contains("dropped")),
        other => panic!("expected a dropped transaction, got {:?}", other),
    }
    assert_eq!(receiver.try_recv().unwrap(), TxEvent::TransactionHash(tx_hash));
    assert!(matches!(receiver.try_recv().unwrap(), TxEvent::Error(e) if e.contains("dropped")));
    assert!(receiver.try_recv().is_err());
}
