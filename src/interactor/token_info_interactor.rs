use async_trait::async_trait;

use crate::chain::BackendSet;
use crate::entity::{BackendFamily, LaunchpadError, NetworkDescriptor, TokenInfo};
use crate::validation;

#[async_trait]
pub trait TokenInfoInteractor: Send + Sync {
    async fn get_token_info(
        &self,
        chain: &str,
        address: &str,
        network: &str,
    ) -> Result<TokenInfo, LaunchpadError>;

    /// The family `chain` names and its networks, in registry order.
    fn list_networks(
        &self,
        chain: &str,
    ) -> Result<(BackendFamily, Vec<NetworkDescriptor>), LaunchpadError>;
}

pub struct TokenInfoInteractorImpl {
    backends: BackendSet,
}

impl TokenInfoInteractorImpl {
    pub fn new(backends: BackendSet) -> Self {
        Self { backends }
    }

    fn family(chain: &str) -> Result<BackendFamily, LaunchpadError> {
        Ok(validation::parse_blockchain(chain)?)
    }
}

#[async_trait]
impl TokenInfoInteractor for TokenInfoInteractorImpl {
    async fn get_token_info(
        &self,
        chain: &str,
        address: &str,
        network: &str,
    ) -> Result<TokenInfo, LaunchpadError> {
        let family = Self::family(chain)?;
        self.backends
            .for_family(family)
            .get_token_info(address, network)
            .await
    }

    fn list_networks(
        &self,
        chain: &str,
    ) -> Result<(BackendFamily, Vec<NetworkDescriptor>), LaunchpadError> {
        let family = Self::family(chain)?;
        let networks = self
            .backends
            .for_family(family)
            .networks()
            .descriptors()
            .to_vec();
        Ok((family, networks))
    }
}
