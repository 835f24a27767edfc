//! Gateway commands for the facilitator CLI.

use super::TxArgs;
use crate::config::FacilitatorConfig;
use crate::errors::CliError;
use ethers::{
    providers::Middleware,
    types::{Bytes, TransactionReceipt, U256},
};
use mosaic_bridge::GatewayClient;
use mosaic_core::{parse_address, parse_bytes, parse_bytes32, parse_u256};
use std::sync::Arc;
use structopt::StructOpt;
use tracing::debug;

/// Transactions sent to the gateway on the origin chain.
#[derive(Debug, StructOpt)]
pub enum GatewayCommand {
    /// Prove the co-gateway storage root at a block height
    #[structopt(name = "prove-gateway")]
    ProveGateway {
        /// Block height of the proven state
        #[structopt(long, parse(try_from_str = parse_u256))]
        block_height: U256,

        /// RLP-encoded co-gateway account, hex
        #[structopt(long, parse(try_from_str = parse_bytes))]
        rlp_account: Bytes,

        /// RLP-encoded account proof nodes, hex
        #[structopt(long, parse(try_from_str = parse_bytes))]
        rlp_parent_nodes: Bytes,

        #[structopt(flatten)]
        tx: TxArgs,
    },

    /// Progress a stake by revealing its unlock secret
    #[structopt(name = "progress-stake")]
    ProgressStake {
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

/// Runs a gateway command.
pub async fn run<M: Middleware + 'static>(
    client: Arc<M>,
    config: &FacilitatorConfig,
    cmd: GatewayCommand,
) -> Result<TransactionReceipt, CliError> {
    if config.gateway.is_empty() {
        return Err(CliError::ConfigError("No gateway address configured".to_string()));
    }

    let gateway = GatewayClient::with_abi_provider(client, &config.gateway, &config.abi_provider())?
        .with_gas_defaults(config.gas_defaults());

    match cmd {
        GatewayCommand::ProveGateway {
            block_height,
            rlp_account,
            rlp_parent_nodes,
            tx,
        } => {
            let options = with_default_sender(config, &tx)?;
            let receipt = gateway
                .prove_gateway(block_height, rlp_account, rlp_parent_nodes, options)
                .await?;
            Ok(receipt)
        }
        GatewayCommand::ProgressStake {
            message_hash,
            unlock_secret,
            tx,
        } => {
            let options = with_default_sender(config, &tx)?;
            let receipt = gateway
                .progress_stake(message_hash, unlock_secret, options)
                .await?;
            Ok(receipt)
        }
    }
}

/// Fills in the configured facilitator when `--from` was not given.
fn with_default_sender(
    config: &FacilitatorConfig,
    tx: &TxArgs,
) -> Result<mosaic_core::TxOptions, CliError> {
    let mut options = tx.to_options();
    if options.from.is_none() && !config.facilitator.is_empty() {
        debug!("No sender given, using facilitator {}", config.facilitator);
        options.from = Some(parse_address(&config.facilitator)?);
    }
    Ok(options)
}
