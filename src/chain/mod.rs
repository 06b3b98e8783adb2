//! Capability contract shared by the EVM and Solana backends.
//!
//! Orchestration code only ever talks to these traits; it never inspects which
//! family sits behind them.
use async_trait::async_trait;
use std::sync::Arc;

use crate::entity::{
    BackendFamily, Credentials, DeploymentResult, FeeConfig, LaunchpadError, PoolOutcome,
    PoolRequest, TokenInfo, TokenSpec,
};

pub mod registry;

pub use registry::{resolve_rpc_endpoint, NetworkRegistry};

#[async_trait]
pub trait ChainBackend: Send + Sync {
    fn networks(&self) -> &NetworkRegistry;

    /// Deploy a token carrying the mandatory transfer fee and wait for confirmation.
    async fn deploy_token(
        &self,
        spec: &TokenSpec,
        credentials: &Credentials,
        fee: &FeeConfig,
        network: &str,
    ) -> Result<DeploymentResult, LaunchpadError>;

    async fn get_token_info(&self, address: &str, network: &str)
        -> Result<TokenInfo, LaunchpadError>;

    async fn create_pool(
        &self,
        request: &PoolRequest,
        credentials: &Credentials,
    ) -> Result<PoolOutcome, LaunchpadError>;
}

/// One backend per family, picked by the family a request names.
#[derive(Clone)]
pub struct BackendSet {
    evm: Arc<dyn ChainBackend>,
    solana: Arc<dyn ChainBackend>,
}

impl BackendSet {
    pub fn new(evm: Arc<dyn ChainBackend>, solana: Arc<dyn ChainBackend>) -> Self {
        Self { evm, solana }
    }

    pub fn for_family(&self, family: BackendFamily) -> Arc<dyn ChainBackend> {
        match family {
            BackendFamily::Evm => self.evm.clone(),
            BackendFamily::Solana => self.solana.clone(),
        }
    }
}

/// Provisions a trading venue for a freshly deployed token.
#[async_trait]
pub trait PoolOrchestrator: Send + Sync {
    async fn create_pool(
        &self,
        request: &PoolRequest,
        credentials: &Credentials,
    ) -> Result<PoolOutcome, LaunchpadError>;
}

/// Itemised balance shortfalls, joined into one balance error.
pub(crate) fn shortfall_error(shortfalls: Vec<String>) -> Option<LaunchpadError> {
    if shortfalls.is_empty() {
        None
    } else {
        Some(LaunchpadError::Balance(shortfalls.join("; ")))
    }
}
