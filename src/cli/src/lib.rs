//! Facilitator CLI for the Mosaic gateway and co-gateway contracts.

pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types and functions
pub use commands::{co_gateway, gateway, init_config};
pub use config::FacilitatorConfig;
pub use errors::CliError;
