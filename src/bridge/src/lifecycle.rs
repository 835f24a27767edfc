//! Submission of contract calls and relay of their lifecycle events.
//!
//! A submitted transaction goes through at most three observable events:
//! its hash becomes available once the node accepts it, then either a
//! receipt arrives or an error is raised. Each event is handed to a
//! [`TxObserver`]; [`LoggingObserver`] writes them to the log and
//! [`ChannelObserver`] forwards them as [`TxEvent`]s.

use crate::errors::BridgeError;
use ethers::{
    abi::Detokenize,
    contract::ContractCall,
    providers::{JsonRpcClient, Middleware, PendingTransaction},
    types::{TransactionReceipt, TxHash, U64},
};
use mosaic_core::ResolvedTxOptions;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, info};

/// Receives the lifecycle events of a submitted transaction.
pub trait TxObserver: Send + Sync {
    /// Called once the node has accepted the transaction.
    fn on_transaction_hash(&self, tx_hash: TxHash);

    /// Called when the transaction was mined successfully.
    fn on_receipt(&self, receipt: &TransactionReceipt);

    /// Called when sending or mining the transaction failed.
    fn on_error(&self, error: &BridgeError);
}

/// Logs lifecycle events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl TxObserver for LoggingObserver {
    fn on_transaction_hash(&self, tx_hash: TxHash) {
        info!("Transaction hash: {:?}", tx_hash);
    }

    fn on_receipt(&self, receipt: &TransactionReceipt) {
        let json = serde_json::to_string(receipt).unwrap_or_else(|_| format!("{:?}", receipt));
        info!("Receipt: {}", json);
    }

    fn on_error(&self, error: &BridgeError) {
        error!("Transaction error: {}", error);
    }
}

/// A lifecycle event of a submitted transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum TxEvent {
    /// The node accepted the transaction
    TransactionHash(TxHash),
    /// The transaction was mined
    Receipt(Box<TransactionReceipt>),
    /// The transaction failed
    Error(String),
}

/// Forwards lifecycle events over a channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: UnboundedSender<TxEvent>,
}

impl ChannelObserver {
    /// Creates an observer sending to `sender`.
    pub fn new(sender: UnboundedSender<TxEvent>) -> Self {
        Self { sender }
    }

    fn forward(&self, event: TxEvent) {
        // The receiver may have been dropped; events are then discarded.
        if self.sender.send(event).is_err() {
            debug!("Lifecycle event receiver dropped");
        }
    }
}

impl TxObserver for ChannelObserver {
    fn on_transaction_hash(&self, tx_hash: TxHash) {
        self.forward(TxEvent::TransactionHash(tx_hash));
    }

    fn on_receipt(&self, receipt: &TransactionReceipt) {
        self.forward(TxEvent::Receipt(Box::new(receipt.clone())));
    }

    fn on_error(&self, error: &BridgeError) {
        self.forward(TxEvent::Error(error.to_string()));
    }
}

/// Applies resolved transaction options to a contract call.
pub fn apply_options<M, D>(
    call: ContractCall<M, D>,
    options: &ResolvedTxOptions,
) -> ContractCall<M, D>
where
    M: Middleware,
    D: Detokenize,
{
    let mut call = call
        .from(options.from)
        .gas(options.gas)
        .gas_price(options.gas_price);

    if let Some(nonce) = options.nonce {
        call = call.nonce(nonce);
    }
    if let Some(value) = options.value {
        call = call.value(value);
    }

    call
}

/// Sends a contract call and reports its hash.
pub async fn dispatch<'a, M, D>(
    call: &'a ContractCall<M, D>,
    observer: &dyn TxObserver,
) -> Result<PendingTransaction<'a, M::Provider>, BridgeError>
where
    M: Middleware + 'static,
    D: Detokenize,
{
    let pending = match call.send().await {
        Ok(pending) => pending,
        Err(e) => {
            let error = BridgeError::ContractError(format!("Failed to send transaction: {}", e));
            observer.on_error(&error);
            return Err(error);
        }
    };

    observer.on_transaction_hash(pending.tx_hash());
    Ok(pending)
}

/// Waits for a sent transaction to be mined and reports the outcome.
pub async fn confirm<P: JsonRpcClient>(
    pending: PendingTransaction<'_, P>,
    observer: &dyn TxObserver,
) -> Result<TransactionReceipt, BridgeError> {
    let tx_hash = pending.tx_hash();

    let outcome = match pending.await {
        Ok(Some(receipt)) => check_receipt(receipt),
        Ok(None) => Err(BridgeError::TransactionError(format!(
            "Transaction {:?} was dropped before being mined",
            tx_hash
        ))),
        Err(e) => Err(BridgeError::TransactionError(format!("Transaction failed: {}", e))),
    };

    match &outcome {
        Ok(receipt) => observer.on_receipt(receipt),
        Err(error) => observer.on_error(error),
    }

    outcome
}

/// Sends a contract call and waits for its receipt.
pub async fn submit<M, D>(
    call: &ContractCall<M, D>,
    observer: &dyn TxObserver,
) -> Result<TransactionReceipt, BridgeError>
where
    M: Middleware + 'static,
    D: Detokenize,
{
    let pending = dispatch(call, observer).await?;
    confirm(pending, observer).await
}

/// Rejects receipts of reverted transactions.
pub fn check_receipt(receipt: TransactionReceipt) -> Result<TransactionReceipt, BridgeError> {
    if receipt.status == Some(U64::zero()) {
        return Err(BridgeError::TransactionError(format!(
            "Transaction {:?} was reverted",
            receipt.transaction_hash
        )));
    }
    Ok(receipt)
}
