use async_trait::async_trait;
use log::{error, info};
use std::sync::Arc;

use crate::commands::{
    CommandHandler, DeployEvmTokenCommand, DeploySolanaTokenCommand, GetTokenInfoCommand,
    LaunchTokenCommand, ListNetworksCommand, ToolCall,
};
use crate::di::ServiceContainer;

// Base router trait
#[async_trait]
pub trait Router: Send + Sync {
    /// Run one tool call. Every outcome, failures included, is text for the host.
    async fn dispatch(&self, call: ToolCall) -> String;
}

// Tool router implementation
pub struct ToolRouter {
    services: Arc<ServiceContainer>,
}

impl ToolRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }

    /// Parse a `{"tool": ..., "args": ...}` request and dispatch it.
    pub async fn dispatch_json(&self, raw: &str) -> String {
        match serde_json::from_str::<ToolCall>(raw) {
            Ok(call) => self.dispatch(call).await,
            Err(e) => {
                error!("Rejected tool request: {}", e);
                format!("❌ Error: invalid tool request: {}", e)
            }
        }
    }
}

#[async_trait]
impl Router for ToolRouter {
    async fn dispatch(&self, call: ToolCall) -> String {
        let tool = call.tool_name();
        info!("Tool call received: {}", tool);

        let services = self.services.clone();
        let result = match call {
            ToolCall::LaunchToken(args) => LaunchTokenCommand::execute(args, services).await,
            ToolCall::DeployEvmToken(args) => DeployEvmTokenCommand::execute(args, services).await,
            ToolCall::DeploySolanaToken(args) => {
                DeploySolanaTokenCommand::execute(args, services).await
            }
            ToolCall::GetTokenInfo(args) => GetTokenInfoCommand::execute(args, services).await,
            ToolCall::ListNetworks(args) => ListNetworksCommand::execute(args, services).await,
        };

        match result {
            Ok(text) => text,
            Err(e) => {
                error!("Tool {} failed: {:#}", tool, e);
                format!("❌ Error: {}", e)
            }
        }
    }
}
