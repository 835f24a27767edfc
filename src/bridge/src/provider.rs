//! Construction of Ethereum clients from endpoint URLs.

use crate::errors::BridgeError;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::LocalWallet,
};

/// Creates an HTTP provider for the given endpoint.
pub fn connect_http(endpoint: &str) -> Result<Provider<Http>, BridgeError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(BridgeError::EthereumError(
            "Mandatory parameter 'endpoint' is missing".to_string(),
        ));
    }

    Provider::<Http>::try_from(endpoint)
        .map_err(|e| BridgeError::EthereumError(format!("Failed to create provider: {}", e)))
}

/// Creates an HTTP provider that signs transactions with a local key.
///
/// The chain id used for signing is queried from the endpoint.
pub async fn connect_with_wallet(
    endpoint: &str,
    private_key: &str,
) -> Result<SignerMiddleware<Provider<Http>, LocalWallet>, BridgeError> {
    // Create a provider
    let provider = connect_http(endpoint)?;

    // Create a wallet
    let wallet = private_key
        .trim()
        .parse::<LocalWallet>()
        .map_err(|e| BridgeError::SignatureError(format!("Invalid private key: {}", e)))?;

    // Create a signer bound to the endpoint's chain id
    SignerMiddleware::new_with_provider_chain(provider, wallet)
        .await
        .map_err(|e| BridgeError::EthereumError(format!("Failed to query chain id: {}", e)))
}
