use marketplace::Address;
use clap::{Parser, Subcommand};
use eyre::Result;
use marketplace::types::config_wrapper::{ConfigWrapper, DEFAULT_CONFIG_PATH};
use marketplace::{MarketplaceContract, RoleService, connect};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(long = "config", short = 'c', default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Network ID, selects the RPC endpoint and address override
    #[arg(long = "network", short = 'n')]
    network_id: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the role of an address
    Role {
        /// Address to look up
        #[arg(long = "address", short = 'a')]
        address: Address,
    },
    /// Grant the admin role to an address
    AddAdmin {
        /// Address to promote
        #[arg(long = "address", short = 'a')]
        address: Address,

        /// Sender of the transaction
        #[arg(long = "caller")]
        caller: Address,
    },
    /// Revoke the admin role of an address
    RemoveAdmin {
        /// Address to demote
        #[arg(long = "address", short = 'a')]
        address: Address,

        /// Sender of the transaction
        #[arg(long = "caller")]
        caller: Address,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = ConfigWrapper::from_file(Some(&cli.config))?;
    let service = connect(&config, cli.network_id)?;
    service.wait_ready().await?;

    run(&service, &cli.command).await
}

async fn run<C>(service: &RoleService<C>, command: &Commands) -> Result<()>
where
    C: MarketplaceContract + 'static,
{
    match command {
        Commands::Role { address } => {
            let role = service.get_role_by_address(*address).await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "address": address.to_string(),
                    "role": role,
                }))?
            );
        }
        Commands::AddAdmin { address, caller } => {
            let receipt = service.set_admin_role_by_address(*address, *caller).await?;
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
        Commands::RemoveAdmin { address, caller } => {
            let receipt = service
                .remove_admin_role_by_address(*address, *caller)
                .await?;
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
    }

    Ok(())
}
