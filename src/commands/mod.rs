use anyhow::Result;
use serde::Deserialize;
use std::sync::Arc;

use crate::di::ServiceContainer;
use crate::entity::DeploymentRequest;

pub mod deploy_evm_token;
pub mod deploy_solana_token;
pub mod get_token_info;
pub mod launch_token;
pub mod list_networks;

pub use deploy_evm_token::{DeployEvmTokenArgs, DeployEvmTokenCommand};
pub use deploy_solana_token::{DeploySolanaTokenArgs, DeploySolanaTokenCommand};
pub use get_token_info::{GetTokenInfoArgs, GetTokenInfoCommand};
pub use launch_token::LaunchTokenCommand;
pub use list_networks::{ListNetworksArgs, ListNetworksCommand};

/// Trait that defines a tool handler
pub trait CommandHandler {
    type Args;

    /// The tool name, as the host calls it
    fn command_name() -> &'static str;

    /// The tool description shown to the host
    fn description() -> &'static str;

    /// Execute the tool and produce the text answer
    async fn execute(args: Self::Args, services: Arc<ServiceContainer>) -> Result<String>;
}

/// One host request: `{"tool": "...", "args": {...}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "tool", content = "args", rename_all = "kebab-case")]
pub enum ToolCall {
    LaunchToken(DeploymentRequest),
    DeployEvmToken(DeployEvmTokenArgs),
    DeploySolanaToken(DeploySolanaTokenArgs),
    GetTokenInfo(GetTokenInfoArgs),
    ListNetworks(ListNetworksArgs),
}

impl ToolCall {
    pub fn tool_name(&self) -> &'static str {
        match self {
            ToolCall::LaunchToken(_) => LaunchTokenCommand::command_name(),
            ToolCall::DeployEvmToken(_) => DeployEvmTokenCommand::command_name(),
            ToolCall::DeploySolanaToken(_) => DeploySolanaTokenCommand::command_name(),
            ToolCall::GetTokenInfo(_) => GetTokenInfoCommand::command_name(),
            ToolCall::ListNetworks(_) => ListNetworksCommand::command_name(),
        }
    }
}

/// Register all tool handlers exposed to the host
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            LaunchTokenCommand::command_name(),
            LaunchTokenCommand::description(),
        ),
        (
            DeployEvmTokenCommand::command_name(),
            DeployEvmTokenCommand::description(),
        ),
        (
            DeploySolanaTokenCommand::command_name(),
            DeploySolanaTokenCommand::description(),
        ),
        (
            GetTokenInfoCommand::command_name(),
            GetTokenInfoCommand::description(),
        ),
        (
            ListNetworksCommand::command_name(),
            ListNetworksCommand::description(),
        ),
    ]
}
