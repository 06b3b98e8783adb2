use async_trait::async_trait;
use serde_json::json;
use solana_sdk::signature::{Keypair, Signer};
use std::sync::Arc;

use crate::chain::{ChainBackend, NetworkRegistry, PoolOrchestrator};
use crate::entity::{
    BackendFamily, Credentials, DeploymentResult, FeeConfig, LaunchpadError, PoolOutcome,
    PoolRequest, SolanaTokenInfo, TokenInfo, TokenSpec, ValidationError,
};
use crate::logger::LaunchpadLogger;
use crate::solana::pool::SolanaPoolOrchestrator;
use crate::solana::rpc::SolanaConnector;
use crate::solana::tokens::{fee_mint_account_len, fee_mint_instructions, FeeMintParams};
use crate::solana::wallet::{keypair_from_json, parse_pubkey};
use crate::validation;

pub struct SolanaBackend {
    networks: Arc<NetworkRegistry>,
    connector: Arc<dyn SolanaConnector>,
    pool: SolanaPoolOrchestrator,
    logger: LaunchpadLogger,
}

impl SolanaBackend {
    pub fn new(
        networks: Arc<NetworkRegistry>,
        connector: Arc<dyn SolanaConnector>,
        logger: LaunchpadLogger,
    ) -> Self {
        let pool = SolanaPoolOrchestrator::new(networks.clone(), connector.clone(), logger.clone());
        Self {
            networks,
            connector,
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

        validation::recheck_token_spec(spec, BackendFamily::Solana)?;
        let supply =
            u64::try_from(spec.total_supply).map_err(|_| ValidationError::SupplyExceedsCapacity {
                family: BackendFamily::Solana,
                base_units: spec.total_supply.to_string(),
            })?;
        validation::validate_fee_collector(&fee.solana_fee_collector, BackendFamily::Solana)?;
        let fee_collector = parse_pubkey(&fee.solana_fee_collector)
            .map_err(|_| ValidationError::InvalidFeeCollector)?;
        let payer = keypair_from_json(credentials.expose())
            .map_err(|e| ValidationError::InvalidKeypair(e.to_string()))?;

        let rpc = self
            .connector
            .connect(descriptor)
            .await
            .map_err(LaunchpadError::submission)?;

        let mint = Keypair::new();
        let account_len = fee_mint_account_len().map_err(LaunchpadError::submission)?;
        let rent_lamports = rpc
            .minimum_balance_for_rent_exemption(account_len)
            .await
            .map_err(LaunchpadError::submission)?;

        let params = FeeMintParams {
            payer: payer.pubkey(),
            mint: mint.pubkey(),
            fee_collector,
            decimals: spec.decimals,
            supply,
            fee_basis_points: fee.fee_basis_points(),
            rent_lamports,
        };
        let instructions =
            fee_mint_instructions(&params, account_len).map_err(LaunchpadError::submission)?;

        self.logger.info(
            "Creating Token-2022 mint with transfer fee",
            json!({
                "network": descriptor.key,
                "mint": mint.pubkey().to_string(),
                "payer": payer.pubkey().to_string(),
                "feeCollector": fee.solana_fee_collector,
                "feeBasisPoints": params.fee_basis_points,
            }),
        );

        let signature = rpc
            .send_and_confirm(&instructions, &payer, &[&mint])
            .await
            .map_err(LaunchpadError::submission)?;

        let mint_address = mint.pubkey().to_string();
        let signature = signature.to_string();
        self.logger.log_deployment(
            BackendFamily::Solana,
            &descriptor.key,
            &mint_address,
            &spec.name,
            &spec.symbol,
            &signature,
        );

        Ok(DeploymentResult {
            explorer_url: descriptor.token_url(&mint_address),
            asset_address: mint_address,
            transaction_id: signature,
            network_display_name: descriptor.display_name.clone(),
            signer_address: payer.pubkey().to_string(),
        })
    }
}

#[async_trait]
impl ChainBackend for SolanaBackend {
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
            "Starting Solana token deployment",
            json!({ "network": network, "name": spec.name, "symbol": spec.symbol }),
        );

        let result = self.deploy(spec, credentials, fee, network).await;
        if let Err(e) = &result {
            self.logger.error(
                "Solana token deployment failed",
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
        validation::validate_address(address.trim(), BackendFamily::Solana)?;
        let mint = parse_pubkey(address).map_err(|_| ValidationError::InvalidAddress {
            family: BackendFamily::Solana,
            address: address.to_string(),
        })?;

        let rpc = self
            .connector
            .connect(descriptor)
            .await
            .map_err(LaunchpadError::submission)?;
        let state = rpc
            .get_mint(&mint)
            .await
            .map_err(LaunchpadError::submission)?
            .ok_or_else(|| LaunchpadError::Submission(format!("Mint account not found: {}", mint)))?;

        let mint_address = mint.to_string();
        Ok(TokenInfo::Solana(SolanaTokenInfo {
            explorer_url: descriptor.token_url(&mint_address),
            mint_address,
            decimals: state.decimals,
            supply: state.supply,
            mint_authority: state.mint_authority.map(|key| key.to_string()),
            freeze_authority: state.freeze_authority.map(|key| key.to_string()),
            transfer_fee_basis_points: state.transfer_fee_basis_points,
            fee_withdraw_authority: state.fee_withdraw_authority.map(|key| key.to_string()),
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
