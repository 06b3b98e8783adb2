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
    BackendFamily::Evm.default_decimals() as i64
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployEvmTokenArgs {
    pub network: String,
    pub name: String,
    pub symbol: String,
    #[serde(default = "default_decimals")]
    pub decimals: i64,
    pub total_supply: String,
    pub private_key: Credentials,
}

impl From<DeployEvmTokenArgs> for DeploymentRequest {
    fn from(args: DeployEvmTokenArgs) -> Self {
        DeploymentRequest {
            blockchain: Some(BackendFamily::Evm.as_str().to_string()),
            network: Some(args.network),
            name: Some(args.name),
            symbol: Some(args.symbol),
            decimals: Some(args.decimals),
            supply: Some(args.total_supply),
            credentials: Some(args.private_key),
            create_pool: Some("no".to_string()),
            ..Default::default()
        }
    }
}

pub struct DeployEvmTokenCommand;

impl CommandHandler for DeployEvmTokenCommand {
    type Args = DeployEvmTokenArgs;

    fn command_name() -> &'static str {
        "deploy-evm-token"
    }

    fn description() -> &'static str {
        "Deploy an ERC-20 token with the launchpad transfer fee on an EVM network (all parameters up front)"
    }

    async fn execute(args: DeployEvmTokenArgs, services: Arc<ServiceContainer>) -> Result<String> {
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
