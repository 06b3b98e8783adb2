use async_trait::async_trait;
use std::sync::Arc;

use crate::chain::BackendSet;
use crate::entity::{
    BackendFamily, Credentials, DeploymentRequest, DeploymentResult, FeeConfig, LaunchpadError,
    NetworkDescriptor, PoolAmounts, PoolOutcome, PoolRequest, SolanaDex, TokenSpec, ValidationError,
};
use crate::logger::LaunchpadLogger;
use crate::validation;

/// Pool part of a launch, validated before anything is submitted.
#[derive(Debug, Clone)]
pub struct PoolPlan {
    pub amounts: PoolAmounts,
    pub dex: Option<SolanaDex>,
}

/// A fully validated launch. Nothing has touched a chain yet.
#[derive(Debug, Clone)]
pub struct PreparedLaunch {
    pub family: BackendFamily,
    pub network: String,
    pub spec: TokenSpec,
    pub credentials: Credentials,
    pub pool: Option<PoolPlan>,
}

/// Deployment always succeeded if this exists; the pool step reports separately.
#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    pub family: BackendFamily,
    pub spec: TokenSpec,
    pub deployment: DeploymentResult,
    pub fee: FeeConfig,
    pub pool: Option<Result<PoolOutcome, LaunchpadError>>,
}

#[async_trait]
pub trait DeployInteractor: Send + Sync {
    fn networks(&self, family: BackendFamily) -> Vec<NetworkDescriptor>;

    fn find_network(&self, family: BackendFamily, name: &str) -> Option<NetworkDescriptor>;

    /// Validate every field of a complete request, pool inputs included.
    fn prepare(&self, request: &DeploymentRequest) -> Result<PreparedLaunch, LaunchpadError>;

    /// Deploy, then run the optional pool step.
    async fn launch(&self, prepared: PreparedLaunch) -> Result<LaunchOutcome, LaunchpadError>;
}

pub struct DeployInteractorImpl {
    backends: BackendSet,
    fee: Arc<FeeConfig>,
    logger: LaunchpadLogger,
}

impl DeployInteractorImpl {
    pub fn new(backends: BackendSet, fee: Arc<FeeConfig>, logger: LaunchpadLogger) -> Self {
        Self {
            backends,
            fee,
            logger,
        }
    }

    fn prepare_pool(
        &self,
        request: &DeploymentRequest,
        family: BackendFamily,
        spec: &TokenSpec,
    ) -> Result<Option<PoolPlan>, ValidationError> {
        if !request.wants_pool() {
            return Ok(None);
        }

        let dex = match family {
            BackendFamily::Solana => {
                let choice = request
                    .solana_dex()
                    .ok_or(ValidationError::MissingField("solanaDex"))?;
                Some(validation::parse_solana_dex(choice)?)
            }
            BackendFamily::Evm => None,
        };

        let token_amount = request
            .token_for_pool()
            .ok_or(ValidationError::MissingField("tokenForPool"))?;
        let base_amount = request
            .base_for_pool()
            .ok_or(ValidationError::MissingField("baseForPool"))?;

        let token_base_units = validation::parse_amount("tokenForPool", token_amount, spec.decimals)?;
        if token_base_units > spec.total_supply {
            return Err(ValidationError::InvalidAmount {
                field: "tokenForPool",
                reason: "amount exceeds the total supply".to_string(),
            });
        }
        let base_units =
            validation::parse_amount("baseForPool", base_amount, family.native_decimals())?;

        Ok(Some(PoolPlan {
            amounts: PoolAmounts {
                token_amount: token_amount.trim().to_string(),
                token_base_units,
                base_amount: base_amount.trim().to_string(),
                base_units,
            },
            dex,
        }))
    }
}

#[async_trait]
impl DeployInteractor for DeployInteractorImpl {
    fn networks(&self, family: BackendFamily) -> Vec<NetworkDescriptor> {
        self.backends
            .for_family(family)
            .networks()
            .descriptors()
            .to_vec()
    }

    fn find_network(&self, family: BackendFamily, name: &str) -> Option<NetworkDescriptor> {
        self.backends
            .for_family(family)
            .networks()
            .lookup(name)
            .ok()
            .cloned()
    }

    fn prepare(&self, request: &DeploymentRequest) -> Result<PreparedLaunch, LaunchpadError> {
        let blockchain = request
            .blockchain()
            .ok_or(ValidationError::MissingField("blockchain"))?;
        let family = validation::parse_blockchain(blockchain)?;

        let network = request
            .network()
            .ok_or(ValidationError::MissingField("network"))?;
        let descriptor = self.backends.for_family(family).networks().lookup(network)?.clone();

        let name = request.name().ok_or(ValidationError::MissingField("name"))?;
        let symbol = request
            .symbol()
            .ok_or(ValidationError::MissingField("symbol"))?;
        let supply = request
            .supply()
            .ok_or(ValidationError::MissingField("supply"))?;
        let decimals = request
            .decimals
            .unwrap_or(family.default_decimals() as i64);
        let spec = validation::build_token_spec(name.trim(), symbol.trim(), decimals, supply, family)?;

        let credentials = request
            .credentials()
            .ok_or(ValidationError::MissingField("credentials"))?;
        validation::validate_credentials(credentials, family)?;
        validation::validate_fee_collector(self.fee.collector_for(family), family)?;

        let pool = self.prepare_pool(request, family, &spec)?;

        Ok(PreparedLaunch {
            family,
            network: descriptor.key,
            spec,
            credentials: Credentials::new(credentials),
            pool,
        })
    }

    async fn launch(&self, prepared: PreparedLaunch) -> Result<LaunchOutcome, LaunchpadError> {
        let backend = self.backends.for_family(prepared.family);

        let deployment = backend
            .deploy_token(
                &prepared.spec,
                &prepared.credentials,
                &self.fee,
                &prepared.network,
            )
            .await?;

        let pool = match prepared.pool {
            Some(plan) => {
                let request = PoolRequest {
                    token_address: deployment.asset_address.clone(),
                    token_symbol: prepared.spec.symbol.clone(),
                    token_decimals: prepared.spec.decimals,
                    network: prepared.network.clone(),
                    amounts: plan.amounts,
                    dex: plan.dex,
                };
                let result = backend.create_pool(&request, &prepared.credentials).await;
                if let Err(e) = &result {
                    self.logger.error(
                        "Pool creation failed after a successful deployment",
                        serde_json::json!({
                            "token": deployment.asset_address,
                            "kind": e.kind(),
                            "error": e.to_string(),
                        }),
                    );
                }
                Some(result)
            }
            None => None,
        };

        Ok(LaunchOutcome {
            family: prepared.family,
            spec: prepared.spec,
            deployment,
            fee: (*self.fee).clone(),
            pool,
        })
    }
}
