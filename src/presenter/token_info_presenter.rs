use async_trait::async_trait;
use std::sync::Arc;

use crate::interactor::TokenInfoInteractor;
use crate::view::TokenInfoView;

#[async_trait]
pub trait TokenInfoPresenter: Send + Sync {
    async fn show_token_info(&self, chain: &str, address: &str, network: &str) -> String;

    fn show_networks(&self, chain: &str) -> String;
}

pub struct TokenInfoPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> TokenInfoPresenterImpl<I, V>
where
    I: TokenInfoInteractor,
    V: TokenInfoView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> TokenInfoPresenter for TokenInfoPresenterImpl<I, V>
where
    I: TokenInfoInteractor + Send + Sync,
    V: TokenInfoView + Send + Sync,
{
    async fn show_token_info(&self, chain: &str, address: &str, network: &str) -> String {
        match self.interactor.get_token_info(chain, address, network).await {
            Ok(info) => self.view.token_info(&info),
            Err(e) => self.view.error(&e),
        }
    }

    fn show_networks(&self, chain: &str) -> String {
        match self.interactor.list_networks(chain) {
            Ok((family, networks)) => self.view.networks(family, &networks),
            Err(e) => self.view.error(&e),
        }
    }
}
