use alloy::primitives::{Address, Bytes};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::chain::{ChainBackend, NetworkRegistry, PoolOrchestrator};
use crate::entity::{
    BackendFamily, Credentials, DeploymentResult, EvmTokenInfo, FeeConfig, LaunchpadError,
    PoolOutcome, PoolRequest, TokenInfo, TokenSpec, ValidationError,
};
use crate::evm::contracts::deployment_code;
use crate::evm::pool::UniswapPoolOrchestrator;
use crate::evm::rpc::EvmConnector;
use crate::logger::LaunchpadLogger;
use crate::validation;

pub struct EvmBackend {
    networks: Arc<NetworkRegistry>,
    connector: Arc<dyn EvmConnector>,
    token_bytecode: Option<Bytes>,
    pool: UniswapPoolOrchestrator,
    logger: LaunchpadLogger,
}

impl EvmBackend {
    pub fn new(
        networks: Arc<NetworkRegistry>,
        connector: Arc<dyn EvmConnector>,
        token_bytecode: Option<Bytes>,
        slippage_bps: u16,
        logger: LaunchpadLogger,
    ) -> Self {
        let pool = UniswapPoolOrchestrator::new(
            networks.clone(),
            connector.clone(),
            slippage_bps,
            logger.clone(),
        );
        Self {
            networks,
            connector,
            token_bytecode,
            pool,
            logger,
        }
    }

    async fn deploy(
        &self,
        spec: &TokenSpec,
        credentials: &Credentials,
        fee: &FeeConfig,
        network: &str,
    ) -> Result<DeploymentResult, LaunchpadError> {
        let descriptor = self.networks.lookup(network)?;

        validation::recheck_token_spec(spec, BackendFamily::Evm)?;
        validation::validate_evm_private_key(credentials.expose())?;
        validation::validate_fee_collector(&fee.evm_fee_collector, BackendFamily::Evm)?;
        let fee_collector: Address = fee
            .evm_fee_collector
            .parse()
            .map_err(|_| ValidationError::InvalidFeeCollector)?;

        let bytecode = self.token_bytecode.as_ref().ok_or_else(|| {
            LaunchpadError::Configuration(
                "EVM token bytecode is not configured (set evm.token_bytecode_path)".to_string(),
            )
        })?;

        let rpc = self
            .connector
            .connect(descriptor, Some(credentials))
            .await
            .map_err(LaunchpadError::submission)?;
        let deployer = rpc.signer_address().ok_or_else(|| {
            LaunchpadError::Submission("Connection has no signing wallet".to_string())
        })?;

        self.logger.info(
            "Deploying token contract",
            json!({
                "network": descriptor.key,
                "chainId": descriptor.network_id.to_string(),
                "deployer": deployer.to_checksum(None),
                "feeCollector": fee.evm_fee_collector,
                "feePercentage": fee.fee_percentage,
            }),
        );

        let code = deployment_code(bytecode, spec, fee_collector);
        let (address, tx) = rpc
            .deploy_contract(code)
            .await
            .map_err(LaunchpadError::submission)?;

        let address = address.to_checksum(None);
        let tx = tx.to_string();
        self.logger.log_deployment(
            BackendFamily::Evm,
            &descriptor.key,
            &address,
            &spec.name,
            &spec.symbol,
            &tx,
        );

        Ok(DeploymentResult {
            explorer_url: descriptor.address_url(&address),
            asset_address: address,
            transaction_id: tx,
            network_display_name: descriptor.display_name.clone(),
            signer_address: deployer.to_checksum(None),
        })
    }
}

#[async_trait]
impl ChainBackend for EvmBackend {
    fn networks(&self) -> &NetworkRegistry {
        &self.networks
    }

    async fn deploy_token(
        &self,
        spec: &TokenSpec,
        credentials: &Credentials,
        fee: &FeeConfig,
        network: &str,
    ) -> Result<DeploymentResult, LaunchpadError> {
        self.logger.info(
            "Starting EVM token deployment",
            json!({ "network": network, "name": spec.name, "symbol": spec.symbol }),
        );

        let result = self.deploy(spec, credentials, fee, network).await;
        if let Err(e) = &result {
            self.logger.error(
                "EVM token deployment failed",
                json!({ "network": network, "kind": e.kind(), "error": e.to_string() }),
            );
        }
        result
    }

    async fn get_token_info(
        &self,
        address: &str,
        network: &str,
    ) -> Result<TokenInfo, LaunchpadError> {
        let descriptor = self.networks.lookup(network)?;
        validation::validate_address(address, BackendFamily::Evm)?;
        let token: Address = address
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidAddress {
                family: BackendFamily::Evm,
                address: address.to_string(),
            })?;

        let rpc = self
            .connector
            .connect(descriptor, None)
            .await
            .map_err(LaunchpadError::submission)?;
        let metadata = rpc
            .token_metadata(token)
            .await
            .map_err(LaunchpadError::submission)?;

        let address = token.to_checksum(None);
        Ok(TokenInfo::Evm(EvmTokenInfo {
            explorer_url: descriptor.address_url(&address),
            address,
            name: metadata.name,
            symbol: metadata.symbol,
            decimals: metadata.decimals,
            total_supply: metadata.total_supply.to_string(),
            fee_collector: metadata.fee_collector.to_checksum(None),
            network: descriptor.display_name.clone(),
        }))
    }

    async fn create_pool(
        &self,
        request: &PoolRequest,
        credentials: &Credentials,
    ) -> Result<PoolOutcome, LaunchpadError> {
        self.pool.create_pool(request, credentials).await
    }
}
