//! Gateway and co-gateway contract clients for the Mosaic facilitator.
//!
//! This crate builds and submits facilitator transactions against the
//! `EIP20Gateway` contract on the origin chain and the `EIP20CoGateway`
//! contract on the auxiliary chain, relaying each transaction's lifecycle
//! to a [`TxObserver`].

pub mod abi;
pub mod bindings;
pub mod co_gateway;
pub mod errors;
pub mod gateway;
pub mod lifecycle;
pub mod provider;

// Re-export commonly used types
pub use abi::AbiProvider;
pub use co_gateway::{CoGatewayClient, StakeIntent};
pub use errors::BridgeError;
pub use gateway::GatewayClient;
pub use lifecycle::{ChannelObserver, LoggingObserver, TxEvent, TxObserver};
