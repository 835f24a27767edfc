//! Transaction options for gateway contract calls.

use crate::errors::CoreError;
use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};

/// Default gas price in wei (`0x5B9ACA00`, 1536870912).
pub const DEFAULT_GAS_PRICE: u64 = 0x5B9A_CA00;

/// Default gas limit.
pub const DEFAULT_GAS_LIMIT: u64 = 1_000_000;

/// Gas parameters applied when the caller does not supply their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasDefaults {
    /// Gas price in wei
    pub gas_price: U256,
    /// Gas limit
    pub gas: U256,
}

impl Default for GasDefaults {
    fn default() -> Self {
        Self {
            gas_price: U256::from(DEFAULT_GAS_PRICE),
            gas: U256::from(DEFAULT_GAS_LIMIT),
        }
    }
}

/// Caller-supplied transaction options. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOptions {
    /// Sender of the transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Gas price in wei
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// Gas limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
    /// Sender nonce
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<U256>,
    /// Wei sent along with the call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
}

impl TxOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender.
    pub fn from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the gas price.
    pub fn gas_price<T: Into<U256>>(mut self, gas_price: T) -> Self {
        self.gas_price = Some(gas_price.into());
        self
    }

    /// Sets the gas limit.
    pub fn gas<T: Into<U256>>(mut self, gas: T) -> Self {
        self.gas = Some(gas.into());
        self
    }

    /// Sets the nonce.
    pub fn nonce<T: Into<U256>>(mut self, nonce: T) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Sets the value.
    pub fn value<T: Into<U256>>(mut self, value: T) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Fills in the gas parameters the caller left out.
    pub fn merge(self, defaults: &GasDefaults) -> MergedTxOptions {
        MergedTxOptions {
            from: self.from,
            gas_price: self.gas_price.unwrap_or(defaults.gas_price),
            gas: self.gas.unwrap_or(defaults.gas),
            nonce: self.nonce,
            value: self.value,
        }
    }
}

/// Options with gas parameters resolved but the sender still open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTxOptions {
    from: Option<Address>,
    gas_price: U256,
    gas: U256,
    nonce: Option<U256>,
    value: Option<U256>,
}

impl MergedTxOptions {
    /// Resolves the options, failing if the caller did not name a sender.
    pub fn require_from(self) -> Result<ResolvedTxOptions, CoreError> {
        let from = self.from.ok_or(CoreError::MissingOption("from"))?;
        Ok(self.resolve(from))
    }

    /// Resolves the options with a fixed sender, replacing any the caller set.
    pub fn with_from(self, from: Address) -> ResolvedTxOptions {
        self.resolve(from)
    }

    fn resolve(self, from: Address) -> ResolvedTxOptions {
        ResolvedTxOptions {
            from,
            gas_price: self.gas_price,
            gas: self.gas,
            nonce: self.nonce,
            value: self.value,
        }
    }
}

/// Fully resolved options, ready to be applied to a contract call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTxOptions {
    /// Sender of the transaction
    pub from: Address,
    /// Gas price in wei
    pub gas_price: U256,
    /// Gas limit
    pub gas: U256,
    /// Sender nonce
    pub nonce: Option<U256>,
    /// Wei sent along with the call
    pub value: Option<U256>,
}
