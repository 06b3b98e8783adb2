//! Token launchpad - Main executable
//!
//! Exposes the deployment tools to a host either one call per process or as a
//! newline-delimited JSON stream on stdin/stdout.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::info;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use token_launchpad::commands::{
    register_commands, DeployEvmTokenArgs, DeploySolanaTokenArgs, GetTokenInfoArgs,
    ListNetworksArgs, ToolCall,
};
use token_launchpad::{AppConfig, Credentials, DeploymentRequest, ServiceContainer, ToolRouter, Router};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to ./launchpad.{toml,yaml,json} when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance the launch wizard with the answers collected so far (JSON object)
    Launch {
        #[arg(default_value = "{}")]
        request: String,
    },
    /// Deploy an EVM token in one step
    DeployEvm {
        #[arg(long)]
        network: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value_t = 18)]
        decimals: i64,
        #[arg(long)]
        total_supply: String,
        /// Read from LAUNCHPAD_EVM_PRIVATE_KEY when omitted
        #[arg(long, env = "LAUNCHPAD_EVM_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },
    /// Deploy a Solana token in one step
    DeploySolana {
        #[arg(long)]
        network: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value_t = 9)]
        decimals: i64,
        #[arg(long)]
        supply: String,
        /// Read from LAUNCHPAD_SOLANA_KEYPAIR when omitted
        #[arg(long, env = "LAUNCHPAD_SOLANA_KEYPAIR", hide_env_values = true)]
        keypair: String,
    },
    /// Show on-chain details of a deployed token
    TokenInfo {
        #[arg(long)]
        chain: String,
        #[arg(long)]
        network: String,
        address: String,
    },
    /// List supported networks of a chain family
    Networks { chain: String },
    /// Run one raw `{"tool": ..., "args": ...}` request
    Call { request: String },
    /// Serve tool requests as newline-delimited JSON on stdin/stdout
    Stdio,
    /// Print the available tools
    Tools,
}

impl Commands {
    fn into_call(self) -> Result<ToolCall> {
        let call = match self {
            Commands::Launch { request } => {
                let request: DeploymentRequest =
                    serde_json::from_str(&request).context("Invalid launch request JSON")?;
                ToolCall::LaunchToken(request)
            }
            Commands::DeployEvm {
                network,
                name,
                symbol,
                decimals,
                total_supply,
                private_key,
            } => ToolCall::DeployEvmToken(DeployEvmTokenArgs {
                network,
                name,
                symbol,
                decimals,
                total_supply,
                private_key: Credentials::new(private_key),
            }),
            Commands::DeploySolana {
                network,
                name,
                symbol,
                decimals,
                supply,
                keypair,
            } => ToolCall::DeploySolanaToken(DeploySolanaTokenArgs {
                network,
                name,
                symbol,
                decimals,
                supply,
                keypair: Credentials::new(keypair),
            }),
            Commands::TokenInfo {
                chain,
                network,
                address,
            } => ToolCall::GetTokenInfo(GetTokenInfoArgs {
                address,
                network,
                chain,
            }),
            Commands::Networks { chain } => ToolCall::ListNetworks(ListNetworksArgs { chain }),
            Commands::Call { request } => {
                serde_json::from_str(&request).context("Invalid tool request JSON")?
            }
            Commands::Stdio | Commands::Tools => {
                anyhow::bail!("not a single tool call")
            }
        };
        Ok(call)
    }
}

/// One request per line in, one `{"output": "..."}` line out, in order.
async fn serve_stdio(router: &ToolRouter) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let output = router.dispatch_json(&line).await;
        let mut reply = json!({ "output": output }).to_string();
        reply.push('\n');
        stdout.write_all(reply.as_bytes()).await?;
        stdout.flush().await?;
    }

    Ok(())
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info", on stderr so stdout stays for the host
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    if let Commands::Tools = cli.command {
        for (name, description) in register_commands() {
            println!("{:<22} {}", name, description);
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => AppConfig::from_sources(Some(path.as_path()))?,
        None => AppConfig::load()?,
    };
    info!("Starting token launchpad v{}", token_launchpad::VERSION);

    let services = Arc::new(ServiceContainer::new(&config)?);
    let router = ToolRouter::new(services);

    match cli.command {
        Commands::Stdio => {
            info!("Serving tool requests on stdin");
            serve_stdio(&router).await?;
        }
        command => {
            let call = command.into_call()?;
            println!("{}", router.dispatch(call).await);
        }
    }

    Ok(())
}
