use async_trait::async_trait;
use std::sync::Arc;

use crate::entity::state::{family_of, step_position};
use crate::entity::{next_step, DeploymentRequest, WizardStep};
use crate::interactor::DeployInteractor;
use crate::view::{PromptContext, ReportView, WizardView};

#[async_trait]
pub trait WizardPresenter: Send + Sync {
    /// Ask the next question, or deploy once every applicable answer is present.
    async fn advance(&self, request: &DeploymentRequest) -> String;
}

pub struct WizardPresenterImpl<I, V, R> {
    interactor: Arc<I>,
    view: Arc<V>,
    report: Arc<R>,
}

impl<I, V, R> WizardPresenterImpl<I, V, R>
where
    I: DeployInteractor,
    V: WizardView,
    R: ReportView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>, report: Arc<R>) -> Self {
        Self {
            interactor,
            view,
            report,
        }
    }

    fn prompt(&self, request: &DeploymentRequest, step: WizardStep) -> String {
        let family = family_of(request);

        let note = match (step, request.blockchain()) {
            (WizardStep::Blockchain, Some(value)) => Some(format!(
                "\"{}\" is not a supported blockchain. Please answer \"evm\" or \"solana\".",
                value
            )),
            _ => None,
        };
        let networks = family
            .map(|f| self.interactor.networks(f))
            .unwrap_or_default();
        let network = match (family, request.network()) {
            (Some(f), Some(name)) => self.interactor.find_network(f, name),
            _ => None,
        };

        let context = PromptContext {
            request,
            family,
            position: step_position(request, step),
            networks,
            network,
            note,
        };
        self.view.prompt(step, &context)
    }
}

#[async_trait]
impl<I, V, R> WizardPresenter for WizardPresenterImpl<I, V, R>
where
    I: DeployInteractor + Send + Sync,
    V: WizardView + Send + Sync,
    R: ReportView + Send + Sync,
{
    async fn advance(&self, request: &DeploymentRequest) -> String {
        if let Some(step) = next_step(request) {
            return self.prompt(request, step);
        }

        let prepared = match self.interactor.prepare(request) {
            Ok(prepared) => prepared,
            Err(e) => return self.report.deployment_failed(&e),
        };

        match self.interactor.launch(prepared).await {
            Ok(outcome) => self.report.launch_report(&outcome),
            Err(e) => self.report.deployment_failed(&e),
        }
    }
}
