use anyhow::Result;
use serde::Deserialize;
use std::sync::Arc;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::entity::{BackendFamily, Credentials, DeploymentRequest};
use crate::interactor::DeployInteractorImpl;
use crate::presenter::{DeployPresenter, DeployPresenterImpl};
use crate::view::MarkdownReportView;

fn default_decimals() -> i64 {
    BackendFamily::Solana.default_decimals() as i64
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploySolanaTokenArgs {
    pub network: String,
    pub name: String,
    pub symbol: String,
    #[serde(default = "default_decimals")]
    pub decimals: i64,
    pub supply: String,
    pub keypair: Credentials,
}

impl From<DeploySolanaTokenArgs> for DeploymentRequest {
    fn from(args: DeploySolanaTokenArgs) -> Self {
        DeploymentRequest {
            blockchain: Some(BackendFamily::Solana.as_str().to_string()),
            network: Some(args.network),
            name: Some(args.name),
            symbol: Some(args.symbol),
            decimals: Some(args.decimals),
            supply: Some(args.supply),
            credentials: Some(args.keypair),
            create_pool: Some("no".to_string()),
            ..Default::default()
        }
    }
}

pub struct DeploySolanaTokenCommand;

impl CommandHandler for DeploySolanaTokenCommand {
    type Args = DeploySolanaTokenArgs;

    fn command_name() -> &'static str {
        "deploy-solana-token"
    }

    fn description() -> &'static str {
        "Deploy a Token-2022 mint with the launchpad transfer fee on Solana (all parameters up front)"
    }

    async fn execute(args: DeploySolanaTokenArgs, services: Arc<ServiceContainer>) -> Result<String> {
        let logger = services.invocation_logger();
        let interactor = Arc::new(DeployInteractorImpl::new(
            services.backends(&logger),
            services.fee_config(),
            logger,
        ));
        let presenter = DeployPresenterImpl::new(interactor, Arc::new(MarkdownReportView::new()));

        Ok(presenter.deploy(&args.into()).await)
    }
}
