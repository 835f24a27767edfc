//! Commands for the facilitator CLI.

pub mod co_gateway;
pub mod gateway;
pub mod init_config;

use ethers::types::{Address, U256};
use mosaic_core::{parse_address, parse_u256, TxOptions};
use structopt::StructOpt;

/// Transaction options shared by every contract command.
#[derive(Debug, Clone, Default, StructOpt)]
pub struct TxArgs {
    /// Sender of the transaction
    #[structopt(long, parse(try_from_str = parse_address))]
    pub from: Option<Address>,

    /// Gas price of the transaction, in wei
    #[structopt(long = "tx-gas-price", parse(try_from_str = parse_u256))]
    pub tx_gas_price: Option<U256>,

    /// Gas limit of the transaction
    #[structopt(long = "tx-gas", parse(try_from_str = parse_u256))]
    pub tx_gas: Option<U256>,

    /// Nonce of the sender
    #[structopt(long, parse(try_from_str = parse_u256))]
    pub nonce: Option<U256>,
}

impl TxArgs {
    /// Converts the arguments into transaction options.
    pub fn to_options(&self) -> TxOptions {
        TxOptions {
            from: self.from,
            gas_price: self.tx_gas_price,
            gas: self.tx_gas,
            nonce: self.nonce,
            value: None,
        }
    }
}
