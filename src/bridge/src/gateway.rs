//! Client for the origin-chain EIP20Gateway contract.

use crate::abi::{AbiProvider, GATEWAY_CONTRACT};
use crate::bindings::GatewayContract;
use crate::errors::BridgeError;
use crate::lifecycle::{apply_options, submit, LoggingObserver, TxObserver};
use crate::provider::connect_http;
use ethers::{
    contract::ContractCall,
    providers::{Http, Middleware, Provider},
    types::{Address, Bytes, TransactionReceipt, U256},
};
use mosaic_core::{parse_address, GasDefaults, TxOptions};
use std::sync::Arc;
use tracing::{debug, info};

/// Submits facilitator transactions to a gateway.
///
/// The sender is not fixed: every call must name it in its [`TxOptions`].
pub struct GatewayClient<M: Middleware> {
    contract: GatewayContract<M>,
    gas_defaults: GasDefaults,
    observer: Arc<dyn TxObserver>,
}

impl<M: Middleware + 'static> GatewayClient<M> {
    /// Creates a client for the gateway at `gateway` using the embedded ABI.
    pub fn new(client: Arc<M>, gateway: &str) -> Result<Self, BridgeError> {
        Self::with_abi_provider(client, gateway, &AbiProvider::new())
    }

    /// Creates a client resolving the gateway ABI through `abi_provider`.
    pub fn with_abi_provider(
        client: Arc<M>,
        gateway: &str,
        abi_provider: &AbiProvider,
    ) -> Result<Self, BridgeError> {
        let gateway = parse_address(gateway).map_err(|e| BridgeError::InvalidAddress {
            param: "gateway",
            reason: e.to_string(),
        })?;

        let abi = abi_provider.get_abi(GATEWAY_CONTRACT)?;
        let contract = GatewayContract::new(gateway, abi, client);
        debug!("Bound {} at {:?}", GATEWAY_CONTRACT, gateway);

        Ok(Self {
            contract,
            gas_defaults: GasDefaults::default(),
            observer: Arc::new(LoggingObserver),
        })
    }

    /// Replaces the gas parameters applied when a call leaves them out.
    pub fn with_gas_defaults(mut self, gas_defaults: GasDefaults) -> Self {
        self.gas_defaults = gas_defaults;
        self
    }

    /// Replaces the observer receiving lifecycle events.
    pub fn with_observer(mut self, observer: Arc<dyn TxObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Returns the gateway address.
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Returns the gas parameters applied by default.
    pub fn gas_defaults(&self) -> &GasDefaults {
        &self.gas_defaults
    }

    /// Builds a `proveGateway` transaction without sending it.
    pub fn prove_gateway_raw_tx(
        &self,
        block_height: U256,
        rlp_account: Bytes,
        rlp_parent_nodes: Bytes,
        options: TxOptions,
    ) -> Result<ContractCall<M, bool>, BridgeError> {
        let options = options.merge(&self.gas_defaults).require_from()?;
        let call = self
            .contract
            .prove_gateway(block_height, rlp_account, rlp_parent_nodes)?;
        Ok(apply_options(call, &options))
    }

    /// Proves the co-gateway storage root at `block_height`.
    pub async fn prove_gateway(
        &self,
        block_height: U256,
        rlp_account: Bytes,
        rlp_parent_nodes: Bytes,
        options: TxOptions,
    ) -> Result<TransactionReceipt, BridgeError> {
        let call = self.prove_gateway_raw_tx(block_height, rlp_account, rlp_parent_nodes, options)?;
        info!("Proving gateway {:?} at block {}", self.address(), block_height);
        submit(&call, self.observer.as_ref()).await
    }

    /// Builds a `progressStake` transaction without sending it.
    pub fn progress_stake_raw_tx(
        &self,
        message_hash: [u8; 32],
        unlock_secret: [u8; 32],
        options: TxOptions,
    ) -> Result<ContractCall<M, (Address, U256)>, BridgeError> {
        let options = options.merge(&self.gas_defaults).require_from()?;
        let call = self.contract.progress_stake(message_hash, unlock_secret)?;
        Ok(apply_options(call, &options))
    }

    /// Progresses the stake identified by `message_hash`.
    pub async fn progress_stake(
        &self,
        message_hash: [u8; 32],
        unlock_secret: [u8; 32],
        options: TxOptions,
    ) -> Result<TransactionReceipt, BridgeError> {
        let call = self.progress_stake_raw_tx(message_hash, unlock_secret, options)?;
        info!("Progressing stake 0x{}", hex::encode(message_hash));
        submit(&call, self.observer.as_ref()).await
    }
}

impl GatewayClient<Provider<Http>> {
    /// Creates a client talking to the node at `endpoint`.
    pub fn connect(endpoint: &str, gateway: &str) -> Result<Self, BridgeError> {
        let provider = connect_http(endpoint)?;
        Self::new(Arc::new(provider), gateway)
    }
}
