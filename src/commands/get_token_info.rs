use anyhow::Result;
use serde::Deserialize;
use std::sync::Arc;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::interactor::TokenInfoInteractorImpl;
use crate::presenter::{TokenInfoPresenter, TokenInfoPresenterImpl};
use crate::view::MarkdownTokenInfoView;

#[derive(Debug, Clone, Deserialize)]
pub struct GetTokenInfoArgs {
    pub address: String,
    pub network: String,
    pub chain: String,
}

pub struct GetTokenInfoCommand;

impl CommandHandler for GetTokenInfoCommand {
    type Args = GetTokenInfoArgs;

    fn command_name() -> &'static str {
        "get-token-info"
    }

    fn description() -> &'static str {
        "Read name, symbol, decimals, supply and fee settings of a deployed token"
    }

    async fn execute(args: GetTokenInfoArgs, services: Arc<ServiceContainer>) -> Result<String> {
        let logger = services.invocation_logger();
        let interactor = Arc::new(TokenInfoInteractorImpl::new(services.backends(&logger)));
        let presenter =
            TokenInfoPresenterImpl::new(interactor, Arc::new(MarkdownTokenInfoView::new()));

        Ok(presenter
            .show_token_info(&args.chain, &args.address, &args.network)
            .await)
    }
}
