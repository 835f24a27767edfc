//! Configuration for the facilitator CLI.

use crate::errors::CliError;
use anyhow::Result;
use ethers::types::U256;
use mosaic_bridge::AbiProvider;
use mosaic_core::types::{DEFAULT_GAS_LIMIT, DEFAULT_GAS_PRICE};
use mosaic_core::GasDefaults;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Environment variable holding the facilitator's signing key.
pub const PRIVATE_KEY_ENV: &str = "FACILITATOR_PRIVATE_KEY";

/// Interprets the value of [`PRIVATE_KEY_ENV`].
///
/// An unset variable means the node signs; a value that is not valid
/// unicode is an error rather than a silent fallback to the node.
pub fn signing_key(var: Result<String, VarError>) -> Result<Option<String>, CliError> {
    match var {
        Ok(private_key) => Ok(Some(private_key)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e @ VarError::NotUnicode(_)) => Err(CliError::ConfigError(format!(
            "{} is unreadable: {}",
            PRIVATE_KEY_ENV, e
        ))),
    }
}

/// Configuration for the facilitator CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitatorConfig {
    /// The node to send transactions to
    pub rpc_url: String,
    /// Address of the gateway on the origin chain
    pub gateway: String,
    /// Address of the co-gateway on the auxiliary chain
    pub co_gateway: String,
    /// Facilitator account
    pub facilitator: String,
    /// The gas price to use for transactions
    pub gas_price: u64,
    /// The gas limit to use for transactions
    pub gas_limit: u64,
    /// Directory with contract ABIs overriding the built-in ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi_dir: Option<PathBuf>,
}

impl Default for FacilitatorConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            gateway: String::new(),
            co_gateway: String::new(),
            facilitator: String::new(),
            gas_price: DEFAULT_GAS_PRICE,
            gas_limit: DEFAULT_GAS_LIMIT,
            abi_dir: None,
        }
    }
}

impl FacilitatorConfig {
    /// Loads configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to a file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default location of the configuration file.
    pub fn default_path() -> PathBuf {
        let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.push("mosaic-facilitator");
        dir.push("config.json");
        dir
    }

    /// Returns the gas parameters applied to every transaction.
    pub fn gas_defaults(&self) -> GasDefaults {
        GasDefaults {
            gas_price: U256::from(self.gas_price),
            gas: U256::from(self.gas_limit),
        }
    }

    /// Returns the ABI provider for the configured ABI directory.
    pub fn abi_provider(&self) -> AbiProvider {
        match &self.abi_dir {
            Some(dir) => AbiProvider::with_dir(dir),
            None => AbiProvider::new(),
        }
    }
}
