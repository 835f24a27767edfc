//! Facilitator CLI for the Mosaic gateway and co-gateway contracts.

use anyhow::Result;
use colored::Colorize;
use ethers::{providers::Middleware, types::TransactionReceipt};
use mosaic_bridge::provider::{connect_http, connect_with_wallet};
use mosaic_cli::commands::{
    co_gateway::{self, CoGatewayCommand},
    gateway::{self, GatewayCommand},
    init_config,
};
use mosaic_cli::config::{signing_key, PRIVATE_KEY_ENV};
use mosaic_cli::{CliError, FacilitatorConfig};
use std::path::PathBuf;
use std::sync::Arc;
use structopt::StructOpt;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command line arguments for the facilitator CLI.
#[derive(Debug, StructOpt)]
#[structopt(name = "facilitator", about = "Mosaic gateway facilitator")]
struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Node to send transactions to
    #[structopt(short, long)]
    rpc: Option<String>,

    /// Subcommand to run
    #[structopt(subcommand)]
    cmd: Command,
}

/// Subcommands for the facilitator CLI.
#[derive(Debug, StructOpt)]
enum Command {
    /// Write a default configuration file
    #[structopt(name = "init-config")]
    InitConfig {
        /// Overwrite an existing file
        #[structopt(long)]
        force: bool,
    },

    /// Send a transaction to the gateway
    #[structopt(name = "gateway")]
    Gateway(GatewayCommand),

    /// Send a transaction to the co-gateway
    #[structopt(name = "co-gateway")]
    CoGateway(CoGatewayCommand),
}

/// A command that sends a contract transaction.
enum ContractCommand {
    Gateway(GatewayCommand),
    CoGateway(CoGatewayCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let opt = Opt::from_args();
    let config_path = opt.config.clone().unwrap_or_else(FacilitatorConfig::default_path);

    let cmd = match opt.cmd {
        Command::InitConfig { force } => {
            init_config::run(&config_path, force)?;
            println!("{} {}", "Configuration written:".green(), config_path.display());
            return Ok(());
        }
        Command::Gateway(cmd) => ContractCommand::Gateway(cmd),
        Command::CoGateway(cmd) => ContractCommand::CoGateway(cmd),
    };

    // Load configuration
    let mut config = if opt.config.is_some() || config_path.exists() {
        debug!("Loading configuration from {}", config_path.display());
        FacilitatorConfig::from_file(&config_path)?
    } else {
        info!("No configuration at {}, using defaults", config_path.display());
        FacilitatorConfig::default()
    };

    // Override node if specified
    if let Some(rpc) = opt.rpc {
        config.rpc_url = rpc;
    }

    // Sign locally when a key is available, otherwise rely on the node
    let receipt = match signing_key(std::env::var(PRIVATE_KEY_ENV))? {
        Some(private_key) => {
            let client = connect_with_wallet(&config.rpc_url, &private_key)
                .await
                .map_err(CliError::from)?;
            send(Arc::new(client), &config, cmd).await?
        }
        None => {
            let client = connect_http(&config.rpc_url).map_err(CliError::from)?;
            send(Arc::new(client), &config, cmd).await?
        }
    };

    println!("{} {:?}", "Transaction mined:".green(), receipt.transaction_hash);
    if let Some(block_number) = receipt.block_number {
        println!("{} {}", "Block:".green(), block_number);
    }
    if let Some(gas_used) = receipt.gas_used {
        println!("{} {}", "Gas used:".green(), gas_used);
    }

    Ok(())
}

async fn send<M: Middleware + 'static>(
    client: Arc<M>,
    config: &FacilitatorConfig,
    cmd: ContractCommand,
) -> Result<TransactionReceipt, CliError> {
    match cmd {
        ContractCommand::Gateway(cmd) => gateway::run(client, config, cmd).await,
        ContractCommand::CoGateway(cmd) => co_gateway::run(client, config, cmd).await,
    }
}
