//! ABI lookup for the gateway contracts.

use crate::errors::BridgeError;
use ethers::abi::Abi;
use std::path::PathBuf;
use tracing::debug;

/// Contract name of the origin-chain gateway.
pub const GATEWAY_CONTRACT: &str = "EIP20Gateway";

/// Contract name of the auxiliary-chain co-gateway.
pub const CO_GATEWAY_CONTRACT: &str = "EIP20CoGateway";

const GATEWAY_ABI: &str = include_str!("../contracts/EIP20Gateway.abi");
const CO_GATEWAY_ABI: &str = include_str!("../contracts/EIP20CoGateway.abi");

/// Resolves contract ABIs by contract name.
///
/// ABIs for both gateway contracts ship with the crate. When an ABI
/// directory is configured, `<dir>/<name>.abi` takes precedence so that
/// ABIs from a newer contract build can be used without recompiling.
#[derive(Debug, Clone, Default)]
pub struct AbiProvider {
    abi_dir: Option<PathBuf>,
}

impl AbiProvider {
    /// Creates a provider serving the embedded ABIs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider that looks in `dir` before the embedded ABIs.
    pub fn with_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            abi_dir: Some(dir.into()),
        }
    }

    /// Returns the ABI of the named contract.
    pub fn get_abi(&self, name: &str) -> Result<Abi, BridgeError> {
        let json = match self.read_from_dir(name)? {
            Some(json) => json,
            None => embedded_abi(name)?.to_string(),
        };

        serde_json::from_str::<Abi>(&json)
            .map_err(|e| BridgeError::AbiError(format!("Malformed ABI for {}: {}", name, e)))
    }

    fn read_from_dir(&self, name: &str) -> Result<Option<String>, BridgeError> {
        let dir = match &self.abi_dir {
            Some(dir) => dir,
            None => return Ok(None),
        };

        let path = dir.join(format!("{}.abi", name));
        if !path.is_file() {
            debug!("No ABI for {} at {}, using embedded ABI", name, path.display());
            return Ok(None);
        }

        debug!("Loading ABI for {} from {}", name, path.display());
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| BridgeError::AbiError(format!("Failed to read {}: {}", path.display(), e)))
    }
}

fn embedded_abi(name: &str) -> Result<&'static str, BridgeError> {
    match name {
        GATEWAY_CONTRACT => Ok(GATEWAY_ABI),
        CO_GATEWAY_CONTRACT => Ok(CO_GATEWAY_ABI),
        _ => Err(BridgeError::AbiError(format!("Unknown contract: {}", name))),
    }
}
