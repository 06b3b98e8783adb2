use anyhow::Result;
use serde_json::json;
use std::sync::Arc;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::entity::{next_state, DeploymentRequest};
use crate::interactor::DeployInteractorImpl;
use crate::presenter::{WizardPresenter, WizardPresenterImpl};
use crate::view::{MarkdownReportView, MarkdownWizardView};

pub struct LaunchTokenCommand;

impl CommandHandler for LaunchTokenCommand {
    type Args = DeploymentRequest;

    fn command_name() -> &'static str {
        "launch-token"
    }

    fn description() -> &'static str {
        "Interactive token launch wizard: deploys a token with the launchpad transfer fee on EVM or Solana, optionally with a liquidity pool"
    }

    async fn execute(args: DeploymentRequest, services: Arc<ServiceContainer>) -> Result<String> {
        let logger = services.invocation_logger();
        logger.debug(
            "Launch wizard invoked",
            json!({ "state": format!("{:?}", next_state(&args)) }),
        );

        let interactor = Arc::new(DeployInteractorImpl::new(
            services.backends(&logger),
            services.fee_config(),
            logger,
        ));
        let view = Arc::new(MarkdownWizardView::new());
        let report = Arc::new(MarkdownReportView::new());
        let presenter = WizardPresenterImpl::new(interactor, view, report);

        Ok(presenter.advance(&args).await)
    }
}
