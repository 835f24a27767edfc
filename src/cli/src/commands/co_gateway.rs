//! Co-gateway commands for the facilitator CLI.

use super::TxArgs;
use crate::config::FacilitatorConfig;
use crate::errors::CliError;
use ethers::{
    providers::Middleware,
    types::{Address, Bytes, TransactionReceipt, U256},
};
use mosaic_bridge::{CoGatewayClient, StakeIntent};
use mosaic_core::{parse_address, parse_bytes, parse_bytes32, parse_u256};
use std::sync::Arc;
use structopt::StructOpt;
use tracing::warn;

/// Transactions sent to the co-gateway on the auxiliary chain.
#[derive(Debug, StructOpt)]
pub enum CoGatewayCommand {
    /// Prove the gateway storage root at a block height
    #[structopt(name = "prove-gateway")]
    ProveGateway {
        /// Block height of the proven state
        #[structopt(long, parse(try_from_str = parse_u256))]
        block_height: U256,

        /// RLP-encoded gateway account, hex
        #[structopt(long, parse(try_from_str = parse_bytes))]
        rlp_account: Bytes,

        /// RLP-encoded account proof nodes, hex
        #[structopt(long, parse(try_from_str = parse_bytes))]
        rlp_parent_nodes: Bytes,

        #[structopt(flatten)]
        tx: TxArgs,
    },

    /// Confirm a stake intent declared on the gateway
    #[structopt(name = "confirm-stake-intent")]
    ConfirmStakeIntent {
        /// Account that staked on the origin chain
        #[structopt(long, parse(try_from_str = parse_address))]
        staker: Address,

        /// Nonce of the staker
        #[structopt(long, parse(try_from_str = parse_u256))]
        staker_nonce: U256,

        /// Account receiving the minted tokens
        #[structopt(long, parse(try_from_str = parse_address))]
        beneficiary: Address,

        /// Staked amount
        #[structopt(long, parse(try_from_str = parse_u256))]
        amount: U256,

        /// Reward gas price agreed by the staker
        #[structopt(long, parse(try_from_str = parse_u256))]
        gas_price: U256,

        /// Reward gas limit agreed by the staker
        #[structopt(long, parse(try_from_str = parse_u256))]
        gas_limit: U256,

        /// Hash lock of the stake, hex
        #[structopt(long, parse(try_from_str = parse_bytes32))]
        hash_lock: [u8; 32],

        /// Block height of the proven gateway state
        #[structopt(long, parse(try_from_str = parse_u256))]
        block_height: U256,

        /// RLP-encoded storage proof nodes, hex
        #[structopt(long, parse(try_from_str = parse_bytes))]
        rlp_parent_nodes: Bytes,

        #[structopt(flatten)]
        tx: TxArgs,
    },

    /// Progress a mint by revealing its unlock secret
    #[structopt(name = "progress-mint")]
    ProgressMint {
        /// Message hash of the stake, hex
        #[structopt(long, parse(try_from_str = parse_bytes32))]
        message_hash: [u8; 32],

        /// Unlock secret of the stake's hash lock, hex
        #[structopt(long, parse(try_from_str = parse_bytes32))]
        unlock_secret: [u8; 32],

        #[structopt(flatten)]
        tx: TxArgs,
    },
}

/// Runs a co-gateway command.
pub async fn run<M: Middleware + 'static>(
    client: Arc<M>,
    config: &FacilitatorConfig,
    cmd: CoGatewayCommand,
) -> Result<TransactionReceipt, CliError> {
    if config.co_gateway.is_empty() {
        return Err(CliError::ConfigError("No co-gateway address configured".to_string()));
    }
    if config.facilitator.is_empty() {
        return Err(CliError::ConfigError("No facilitator address configured".to_string()));
    }

    let co_gateway = CoGatewayClient::with_abi_provider(
        client,
        &config.co_gateway,
        &config.facilitator,
        &config.abi_provider(),
    )?
    .with_gas_defaults(config.gas_defaults());

    let receipt = match cmd {
        CoGatewayCommand::ProveGateway {
            block_height,
            rlp_account,
            rlp_parent_nodes,
            tx,
        } => {
            let options = options(&co_gateway, &tx);
            co_gateway
                .prove_gateway(block_height, rlp_account, rlp_parent_nodes, options)
                .await?
        }
        CoGatewayCommand::ConfirmStakeIntent {
            staker,
            staker_nonce,
            beneficiary,
            amount,
            gas_price,
            gas_limit,
            hash_lock,
            block_height,
            rlp_parent_nodes,
            tx,
        } => {
            let intent = StakeIntent {
                staker,
                staker_nonce,
                beneficiary,
                amount,
                gas_price,
                gas_limit,
                hash_lock,
            };
            let options = options(&co_gateway, &tx);
            co_gateway
                .confirm_stake_intent(intent, block_height, rlp_parent_nodes, options)
                .await?
        }
        CoGatewayCommand::ProgressMint {
            message_hash,
            unlock_secret,
            tx,
        } => {
            co_gateway
                .progress_mint(message_hash, unlock_secret, options(&co_gateway, &tx))
                .await?
        }
    };

    Ok(receipt)
}

fn options<M: Middleware + 'static>(
    co_gateway: &CoGatewayClient<M>,
    tx: &TxArgs,
) -> mosaic_core::TxOptions {
    if let Some(from) = tx.from {
        if from != co_gateway.facilitator() {
            warn!(
                "Ignoring --from {:?}, co-gateway transactions are sent by facilitator {:?}",
                from,
                co_gateway.facilitator()
            );
        }
    }
    tx.to_options()
}
