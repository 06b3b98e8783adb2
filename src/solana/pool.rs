use alloy::primitives::U256;
use async_trait::async_trait;
use serde_json::json;
use solana_sdk::signature::Signer;
use std::sync::Arc;

use crate::chain::{shortfall_error, NetworkRegistry, PoolOrchestrator};
use crate::entity::{
    BackendFamily, Credentials, LaunchpadError, ManualPoolSetup, PoolOutcome, PoolRequest,
    SolanaDex, ValidationError,
};
use crate::logger::LaunchpadLogger;
use crate::solana::rpc::SolanaConnector;
use crate::solana::tokens::associated_token_account;
use crate::solana::wallet::{keypair_from_json, parse_pubkey};
use crate::utils::format_units;

/// Verifies the signer can fund a pool, then hands the user off to the DEX UI.
/// Pools are never created on-chain from here.
pub struct SolanaPoolOrchestrator {
    networks: Arc<NetworkRegistry>,
    connector: Arc<dyn SolanaConnector>,
    logger: LaunchpadLogger,
}

impl SolanaPoolOrchestrator {
    pub fn new(
        networks: Arc<NetworkRegistry>,
        connector: Arc<dyn SolanaConnector>,
        logger: LaunchpadLogger,
    ) -> Self {
        Self {
            networks,
            connector,
            logger,
        }
    }
}

fn guidance(dex: SolanaDex, token_amount: &str, base_amount: &str, mint: &str) -> String {
    format!(
        "Open {} and create a pool pairing {} tokens of {} with {} SOL, connecting the same wallet that deployed the token.",
        dex.display_name(),
        token_amount,
        mint,
        base_amount
    )
}

#[async_trait]
impl PoolOrchestrator for SolanaPoolOrchestrator {
    async fn create_pool(
        &self,
        request: &PoolRequest,
        credentials: &Credentials,
    ) -> Result<PoolOutcome, LaunchpadError> {
        let descriptor = self.networks.lookup(&request.network)?;
        let dex = request
            .dex
            .ok_or(ValidationError::MissingField("solanaDex"))?;
        let mint = parse_pubkey(&request.token_address).map_err(|_| {
            ValidationError::InvalidAddress {
                family: BackendFamily::Solana,
                address: request.token_address.clone(),
            }
        })?;
        let payer = keypair_from_json(credentials.expose())
            .map_err(|e| ValidationError::InvalidKeypair(e.to_string()))?;
        let owner = payer.pubkey();

        let amounts = &request.amounts;
        self.logger.info(
            format!("Validating balances for {} pool", dex.display_name()),
            json!({
                "network": descriptor.key,
                "mint": request.token_address,
                "tokenAmount": amounts.token_amount,
                "solAmount": amounts.base_amount,
            }),
        );

        let rpc = self
            .connector
            .connect(descriptor)
            .await
            .map_err(LaunchpadError::submission)?;

        let sol_balance = rpc
            .get_balance(&owner)
            .await
            .map_err(LaunchpadError::submission)?;
        let token_account = associated_token_account(&owner, &mint);
        let token_balance = rpc
            .token_account_balance(&token_account)
            .await
            .map_err(LaunchpadError::submission)?
            .unwrap_or(0);

        let mut shortfalls = Vec::new();
        if U256::from(token_balance) < amounts.token_base_units {
            shortfalls.push(format!(
                "Insufficient token balance. Have: {} {}, Need: {} {}",
                format_units(U256::from(token_balance), request.token_decimals),
                request.token_symbol,
                amounts.token_amount,
                request.token_symbol
            ));
        }
        if U256::from(sol_balance) < amounts.base_units {
            shortfalls.push(format!(
                "Insufficient SOL balance. Have: {} SOL, Need: {} SOL",
                format_units(
                    U256::from(sol_balance),
                    BackendFamily::Solana.native_decimals()
                ),
                amounts.base_amount
            ));
        }
        if let Some(err) = shortfall_error(shortfalls) {
            return Err(err);
        }

        let mainnet = !descriptor.is_testnet;
        let setup_url = dex.pool_creation_url(mainnet).to_string();
        self.logger.info(
            "Balances verified, pool must be created in the DEX interface",
            json!({ "dex": dex.display_name(), "url": setup_url }),
        );

        let mint_address = mint.to_string();
        Ok(PoolOutcome::ManualSetupRequired(ManualPoolSetup {
            dex,
            guidance: guidance(dex, &amounts.token_amount, &amounts.base_amount, &mint_address),
            setup_url,
            mint_address,
            token_amount: amounts.token_amount.clone(),
            base_amount: amounts.base_amount.clone(),
            base_symbol: descriptor.native_symbol.clone(),
            balances_verified: true,
        }))
    }
}
