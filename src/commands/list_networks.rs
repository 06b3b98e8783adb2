use anyhow::Result;
use serde::Deserialize;
use std::sync::Arc;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::interactor::TokenInfoInteractorImpl;
use crate::presenter::{TokenInfoPresenter, TokenInfoPresenterImpl};
use crate::view::MarkdownTokenInfoView;

#[derive(Debug, Clone, Deserialize)]
pub struct ListNetworksArgs {
    pub chain: String,
}

pub struct ListNetworksCommand;

impl CommandHandler for ListNetworksCommand {
    type Args = ListNetworksArgs;

    fn command_name() -> &'static str {
        "list-networks"
    }

    fn description() -> &'static str {
        "List the networks available for \"evm\" or \"solana\""
    }

    async fn execute(args: ListNetworksArgs, services: Arc<ServiceContainer>) -> Result<String> {
        let logger = services.invocation_logger();
        let interactor = Arc::new(TokenInfoInteractorImpl::new(services.backends(&logger)));
        let presenter =
            TokenInfoPresenterImpl::new(interactor, Arc::new(MarkdownTokenInfoView::new()));

        Ok(presenter.show_networks(&args.chain))
    }
}
