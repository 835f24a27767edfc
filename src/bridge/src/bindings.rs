//! Ethereum contract bindings for the gateway contracts.

use crate::errors::BridgeError;
use ethers::{
    abi::{Abi, Detokenize, Tokenize},
    contract::{Contract, ContractCall},
    providers::Middleware,
    types::{Address, Bytes, U256},
};
use std::sync::Arc;

fn method<M, T, D>(
    contract: &Contract<M>,
    name: &str,
    args: T,
) -> Result<ContractCall<M, D>, BridgeError>
where
    M: Middleware,
    T: Tokenize,
    D: Detokenize,
{
    contract
        .method(name, args)
        .map_err(|e| BridgeError::ContractError(format!("Method {} not available: {}", name, e)))
}

/// The EIP20Gateway contract interface
pub struct GatewayContract<M: Middleware> {
    contract: Contract<M>,
}

impl<M: Middleware> GatewayContract<M> {
    /// Creates a new instance of the contract
    pub fn new(address: Address, abi: Abi, client: impl Into<Arc<M>>) -> Self {
        let contract = Contract::new(address, abi, client.into());
        Self { contract }
    }

    /// Returns the address the contract is bound to
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Proves the storage root of the co-gateway account at a block height
    pub fn prove_gateway(
        &self,
        block_height: U256,
        rlp_account: Bytes,
        rlp_parent_nodes: Bytes,
    ) -> Result<ContractCall<M, bool>, BridgeError> {
        method(
            &self.contract,
            "proveGateway",
            (block_height, rlp_account, rlp_parent_nodes),
        )
    }

    /// Completes a stake by revealing the unlock secret
    pub fn progress_stake(
        &self,
        message_hash: [u8; 32],
        unlock_secret: [u8; 32],
    ) -> Result<ContractCall<M, (Address, U256)>, BridgeError> {
        method(&self.contract, "progressStake", (message_hash, unlock_secret))
    }
}

/// The EIP20CoGateway contract interface
pub struct CoGatewayContract<M: Middleware> {
    contract: Contract<M>,
}

impl<M: Middleware> CoGatewayContract<M> {
    /// Creates a new instance of the contract
    pub fn new(address: Address, abi: Abi, client: impl Into<Arc<M>>) -> Self {
        let contract = Contract::new(address, abi, client.into());
        Self { contract }
    }

    /// Returns the address the contract is bound to
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Proves the storage root of the gateway account at a block height
    pub fn prove_gateway(
        &self,
        block_height: U256,
        rlp_account: Bytes,
        rlp_parent_nodes: Bytes,
    ) -> Result<ContractCall<M, bool>, BridgeError> {
        method(
            &self.contract,
            "proveGateway",
            (block_height, rlp_account, rlp_parent_nodes),
        )
    }

    /// Confirms a stake intent declared on the origin chain
    #[allow(clippy::too_many_arguments)]
    pub fn confirm_stake_intent(
        &self,
        staker: Address,
        staker_nonce: U256,
        beneficiary: Address,
        amount: U256,
        gas_price: U256,
        gas_limit: U256,
        hash_lock: [u8; 32],
        block_height: U256,
        rlp_parent_nodes: Bytes,
    ) -> Result<ContractCall<M, [u8; 32]>, BridgeError> {
        method(
            &self.contract,
            "confirmStakeIntent",
            (
                staker,
                staker_nonce,
                beneficiary,
                amount,
                gas_price,
                gas_limit,
                hash_lock,
                block_height,
                rlp_parent_nodes,
            ),
        )
    }

    /// Mints the staked amount by revealing the unlock secret
    pub fn progress_mint(
        &self,
        message_hash: [u8; 32],
        unlock_secret: [u8; 32],
    ) -> Result<ContractCall<M, (Address, U256, U256, U256)>, BridgeError> {
        method(&self.contract, "progressMint", (message_hash, unlock_secret))
    }
}
