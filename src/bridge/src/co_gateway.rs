//! Client for the auxiliary-chain EIP20CoGateway contract.

use crate::abi::{AbiProvider, CO_GATEWAY_CONTRACT};
use crate::bindings::CoGatewayContract;
use crate::errors::BridgeError;
use crate::lifecycle::{apply_options, submit, LoggingObserver, TxObserver};
use crate::provider::connect_http;
use ethers::{
    contract::ContractCall,
    providers::{Http, Middleware, Provider},
    types::{Address, Bytes, TransactionReceipt, U256},
};
use mosaic_core::{parse_address, GasDefaults, ResolvedTxOptions, TxOptions};
use std::sync::Arc;
use tracing::{debug, info};

/// Arguments of a `confirmStakeIntent` call, as declared on the origin chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeIntent {
    /// Account that staked on the origin chain
    pub staker: Address,
    /// Nonce of the staker on the gateway
    pub staker_nonce: U256,
    /// Account receiving the minted tokens
    pub beneficiary: Address,
    /// Staked amount
    pub amount: U256,
    /// Gas price the staker pays the facilitator as reward
    pub gas_price: U256,
    /// Gas limit the staker pays the facilitator for
    pub gas_limit: U256,
    /// Hash of the unlock secret
    pub hash_lock: [u8; 32],
}

/// Submits facilitator transactions to a co-gateway.
///
/// Every transaction is sent from the facilitator given at construction.
pub struct CoGatewayClient<M: Middleware> {
    contract: CoGatewayContract<M>,
    facilitator: Address,
    gas_defaults: GasDefaults,
    observer: Arc<dyn TxObserver>,
}

impl<M: Middleware + 'static> CoGatewayClient<M> {
    /// Creates a client for the co-gateway at `co_gateway` using the embedded ABI.
    pub fn new(client: Arc<M>, co_gateway: &str, facilitator: &str) -> Result<Self, BridgeError> {
        Self::with_abi_provider(client, co_gateway, facilitator, &AbiProvider::new())
    }

    /// Creates a client resolving the co-gateway ABI through `abi_provider`.
    pub fn with_abi_provider(
        client: Arc<M>,
        co_gateway: &str,
        facilitator: &str,
        abi_provider: &AbiProvider,
    ) -> Result<Self, BridgeError> {
        let co_gateway = parse_address(co_gateway).map_err(|e| BridgeError::InvalidAddress {
            param: "co_gateway",
            reason: e.to_string(),
        })?;
        let facilitator = parse_address(facilitator).map_err(|e| BridgeError::InvalidAddress {
            param: "facilitator",
            reason: e.to_string(),
        })?;

        let abi = abi_provider.get_abi(CO_GATEWAY_CONTRACT)?;
        let contract = CoGatewayContract::new(co_gateway, abi, client);
        debug!(
            "Bound {} at {:?} for facilitator {:?}",
            CO_GATEWAY_CONTRACT, co_gateway, facilitator
        );

        Ok(Self {
            contract,
            facilitator,
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

    /// Returns the co-gateway address.
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Returns the facilitator every transaction is sent from.
    pub fn facilitator(&self) -> Address {
        self.facilitator
    }

    fn resolve(&self, options: TxOptions) -> ResolvedTxOptions {
        options.merge(&self.gas_defaults).with_from(self.facilitator)
    }

    /// Builds a `proveGateway` transaction without sending it.
    pub fn prove_gateway_raw_tx(
        &self,
        block_height: U256,
        rlp_account: Bytes,
        rlp_parent_nodes: Bytes,
        options: TxOptions,
    ) -> Result<ContractCall<M, bool>, BridgeError> {
        let options = self.resolve(options);
        let call = self
            .contract
            .prove_gateway(block_height, rlp_account, rlp_parent_nodes)?;
        Ok(apply_options(call, &options))
    }

    /// Proves the gateway storage root at `block_height`.
    pub async fn prove_gateway(
        &self,
        block_height: U256,
        rlp_account: Bytes,
        rlp_parent_nodes: Bytes,
        options: TxOptions,
    ) -> Result<TransactionReceipt, BridgeError> {
        let call = self.prove_gateway_raw_tx(block_height, rlp_account, rlp_parent_nodes, options)?;
        info!("Proving gateway on {:?} at block {}", self.address(), block_height);
        submit(&call, self.observer.as_ref()).await
    }

    /// Builds a `confirmStakeIntent` transaction without sending it.
    pub fn confirm_stake_intent_raw_tx(
        &self,
        intent: StakeIntent,
        block_height: U256,
        rlp_parent_nodes: Bytes,
        options: TxOptions,
    ) -> Result<ContractCall<M, [u8; 32]>, BridgeError> {
        let options = self.resolve(options);
        let call = self.contract.confirm_stake_intent(
            intent.staker,
            intent.staker_nonce,
            intent.beneficiary,
            intent.amount,
            intent.gas_price,
            intent.gas_limit,
            intent.hash_lock,
            block_height,
            rlp_parent_nodes,
        )?;
        Ok(apply_options(call, &options))
    }

    /// Confirms on the auxiliary chain a stake intent proven at `block_height`.
    pub async fn confirm_stake_intent(
        &self,
        intent: StakeIntent,
        block_height: U256,
        rlp_parent_nodes: Bytes,
        options: TxOptions,
    ) -> Result<TransactionReceipt, BridgeError> {
        let (staker, staker_nonce) = (intent.staker, intent.staker_nonce);
        let call =
            self.confirm_stake_intent_raw_tx(intent, block_height, rlp_parent_nodes, options)?;
        info!("Confirming stake intent of {:?} with nonce {}", staker, staker_nonce);
        submit(&call, self.observer.as_ref()).await
    }

    /// Builds a `progressMint` transaction without sending it.
    pub fn progress_mint_raw_tx(
        &self,
        message_hash: [u8; 32],
        unlock_secret: [u8; 32],
        options: TxOptions,
    ) -> Result<ContractCall<M, (Address, U256, U256, U256)>, BridgeError> {
        let options = self.resolve(options);
        let call = self.contract.progress_mint(message_hash, unlock_secret)?;
        Ok(apply_options(call, &options))
    }

    /// Mints the tokens of the stake identified by `message_hash`.
    pub async fn progress_mint(
        &self,
        message_hash: [u8; 32],
        unlock_secret: [u8; 32],
        options: TxOptions,
    ) -> Result<TransactionReceipt, BridgeError> {
        let call = self.progress_mint_raw_tx(message_hash, unlock_secret, options)?;
        info!("Progressing mint 0x{}", hex::encode(message_hash));
        submit(&call, self.observer.as_ref()).await
    }
}

impl CoGatewayClient<Provider<Http>> {
    /// Creates a client talking to the node at `endpoint`.
    pub fn connect(
        endpoint: &str,
        co_gateway: &str,
        facilitator: &str,
    ) -> Result<Self, BridgeError> {
        let provider = connect_http(endpoint)?;
        Self::new(Arc::new(provider), co_gateway, facilitator)
    }
}
