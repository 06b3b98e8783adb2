use async_trait::async_trait;
use std::sync::Arc;

use crate::entity::DeploymentRequest;
use crate::interactor::DeployInteractor;
use crate::view::ReportView;

#[async_trait]
pub trait DeployPresenter: Send + Sync {
    /// Deploy from a complete request without a pool.
    async fn deploy(&self, request: &DeploymentRequest) -> String;
}

pub struct DeployPresenterImpl<I, R> {
    interactor: Arc<I>,
    report: Arc<R>,
}

impl<I, R> DeployPresenterImpl<I, R>
where
    I: DeployInteractor,
    R: ReportView,
{
    pub fn new(interactor: Arc<I>, report: Arc<R>) -> Self {
        Self { interactor, report }
    }
}

#[async_trait]
impl<I, R> DeployPresenter for DeployPresenterImpl<I, R>
where
    I: DeployInteractor + Send + Sync,
    R: ReportView + Send + Sync,
{
    async fn deploy(&self, request: &DeploymentRequest) -> String {
        let result = match self.interactor.prepare(request) {
            Ok(prepared) => self.interactor.launch(prepared).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(outcome) => self.report.deployment_summary(&outcome),
            Err(e) => self.report.error(&e),
        }
    }
}
