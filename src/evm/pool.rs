use alloy::primitives::{address, Address, U256};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use crate::chain::{shortfall_error, NetworkRegistry, PoolOrchestrator};
use crate::entity::{
    BackendFamily, Credentials, FeeExemption, LaunchpadError, PoolOutcome, PoolRequest,
    PoolResult, ValidationError,
};
use crate::evm::rpc::{AddLiquidityEth, EvmConnector, EvmRpc};
use crate::logger::LaunchpadLogger;
use crate::utils::{apply_slippage, format_units};

const LIQUIDITY_DEADLINE_SECS: i64 = 20 * 60;

// (network key, router, venue)
const ROUTERS: &[(&str, Address, &str)] = &[
    ("ethereum", address!("7a250d5630B4cF539739dF2C5dAcb4c659F2488D"), "Uniswap V2"),
    ("sepolia", address!("eE567Fe1712Faf6149d80dA1E6934E354124CfE3"), "Uniswap V2"),
    ("bsc", address!("10ED43C718714eb63d5aA57B78B54704E256024E"), "PancakeSwap"),
    ("bscTestnet", address!("D99D1c33F9fC3444f8101754aBC46c52416550D1"), "PancakeSwap"),
    ("polygon", address!("a5E0829CaCEd8fFDD4De3c43696c57F7D7A678ff"), "QuickSwap"),
    ("mumbai", address!("a5E0829CaCEd8fFDD4De3c43696c57F7D7A678ff"), "QuickSwap"),
    ("arbitrum", address!("1b02dA8Cb0d097eB8D57A175b88c7D8b47997506"), "SushiSwap"),
    ("optimism", address!("1b02dA8Cb0d097eB8D57A175b88c7D8b47997506"), "SushiSwap"),
    ("base", address!("4752ba5dbc23f44d87826276bf6fd6b1c372ad24"), "Uniswap V2"),
];

/// Router and venue name for a network key, case-insensitive.
pub fn router_for(network: &str) -> Option<(Address, &'static str)> {
    let network = network.trim();
    ROUTERS
        .iter()
        .find(|(key, _, _)| key.eq_ignore_ascii_case(network))
        .map(|(_, router, venue)| (*router, *venue))
}

/// Adds token/native liquidity through a Uniswap V2 style router.
pub struct UniswapPoolOrchestrator {
    networks: Arc<NetworkRegistry>,
    connector: Arc<dyn EvmConnector>,
    slippage_bps: u16,
    logger: LaunchpadLogger,
}

impl UniswapPoolOrchestrator {
    pub fn new(
        networks: Arc<NetworkRegistry>,
        connector: Arc<dyn EvmConnector>,
        slippage_bps: u16,
        logger: LaunchpadLogger,
    ) -> Self {
        Self {
            networks,
            connector,
            slippage_bps,
            logger,
        }
    }

    async fn exempt_pair_from_fee(
        &self,
        rpc: &dyn EvmRpc,
        token: Address,
        pair: Address,
        wallet: Address,
    ) -> FeeExemption {
        let outcome = async {
            let owner = rpc.token_owner(token).await?;
            if owner != wallet {
                return Ok::<_, anyhow::Error>(FeeExemption::NotAuthority {
                    owner: owner.to_checksum(None),
                });
            }
            if rpc.is_excluded_from_fee(token, pair).await? {
                return Ok(FeeExemption::AlreadyExempt);
            }
            let tx = rpc.set_fee_exclusion(token, pair, true).await?;
            Ok(FeeExemption::Exempted {
                transaction_id: tx.to_string(),
            })
        }
        .await;

        match outcome {
            Ok(exemption) => {
                self.logger.info(
                    "Pool fee exemption finished",
                    json!({ "pair": pair.to_checksum(None), "result": exemption.note() }),
                );
                exemption
            }
            Err(e) => {
                self.logger.warn(
                    "Could not exclude pool from fees",
                    json!({ "pair": pair.to_checksum(None), "error": e.to_string() }),
                );
                FeeExemption::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[async_trait]
impl PoolOrchestrator for UniswapPoolOrchestrator {
    async fn create_pool(
        &self,
        request: &PoolRequest,
        credentials: &Credentials,
    ) -> Result<PoolOutcome, LaunchpadError> {
        let descriptor = self.networks.lookup(&request.network)?;
        let (router, venue) = router_for(&descriptor.key).ok_or_else(|| {
            LaunchpadError::Configuration(format!(
                "No DEX router configured for network: {}",
                descriptor.key
            ))
        })?;
        let token: Address =
            request
                .token_address
                .parse()
                .map_err(|_| ValidationError::InvalidAddress {
                    family: BackendFamily::Evm,
                    address: request.token_address.clone(),
                })?;

        let rpc = self
            .connector
            .connect(descriptor, Some(credentials))
            .await
            .map_err(LaunchpadError::submission)?;
        let wallet = rpc.signer_address().ok_or_else(|| {
            LaunchpadError::Submission("Connection has no signing wallet".to_string())
        })?;

        let amounts = &request.amounts;
        let native_decimals = BackendFamily::Evm.native_decimals();

        self.logger.info(
            format!("Creating {} pool", venue),
            json!({
                "network": descriptor.key,
                "token": request.token_address,
                "router": router.to_checksum(None),
                "tokenAmount": amounts.token_amount,
                "baseAmount": amounts.base_amount,
            }),
        );

        let token_balance = rpc
            .token_balance(token, wallet)
            .await
            .map_err(LaunchpadError::submission)?;
        let native_balance = rpc
            .native_balance(wallet)
            .await
            .map_err(LaunchpadError::submission)?;

        let mut shortfalls = Vec::new();
        if token_balance < amounts.token_base_units {
            shortfalls.push(format!(
                "Insufficient token balance. Have: {} {}, Need: {} {}",
                format_units(token_balance, request.token_decimals),
                request.token_symbol,
                amounts.token_amount,
                request.token_symbol
            ));
        }
        if native_balance < amounts.base_units {
            shortfalls.push(format!(
                "Insufficient {} balance. Have: {} {}, Need: {} {}",
                descriptor.native_symbol,
                format_units(native_balance, native_decimals),
                descriptor.native_symbol,
                amounts.base_amount,
                descriptor.native_symbol
            ));
        }
        if let Some(err) = shortfall_error(shortfalls) {
            return Err(err);
        }

        let factory = rpc
            .router_factory(router)
            .await
            .map_err(LaunchpadError::submission)?;
        let weth = rpc
            .router_weth(router)
            .await
            .map_err(LaunchpadError::submission)?;
        let existing = rpc
            .get_pair(factory, token, weth)
            .await
            .map_err(LaunchpadError::submission)?;
        self.logger.debug(
            "Probed pair before adding liquidity",
            json!({ "pairExists": existing != Address::ZERO }),
        );

        let allowance = rpc
            .allowance(token, wallet, router)
            .await
            .map_err(LaunchpadError::submission)?;
        let approval_transaction = if allowance < amounts.token_base_units {
            let tx = rpc
                .approve(token, router, amounts.token_base_units)
                .await
                .map_err(LaunchpadError::submission)?;
            self.logger
                .log_transaction(BackendFamily::Evm, &descriptor.key, &tx.to_string(), "approve");
            Some(tx.to_string())
        } else {
            None
        };

        let deadline = U256::from((Utc::now().timestamp() + LIQUIDITY_DEADLINE_SECS) as u64);
        let params = AddLiquidityEth {
            token,
            amount_token_desired: amounts.token_base_units,
            amount_token_min: apply_slippage(amounts.token_base_units, self.slippage_bps),
            amount_eth_min: apply_slippage(amounts.base_units, self.slippage_bps),
            to: wallet,
            deadline,
            value: amounts.base_units,
        };
        let tx = rpc
            .add_liquidity_eth(router, params)
            .await
            .map_err(LaunchpadError::submission)?;
        let tx_id = tx.to_string();
        self.logger
            .log_transaction(BackendFamily::Evm, &descriptor.key, &tx_id, "add_liquidity");

        // Liquidity is already added; a failed read-back must not turn into a pool failure.
        let pair = match rpc.get_pair(factory, token, weth).await {
            Ok(pair) if pair != Address::ZERO => Some(pair),
            Ok(_) => None,
            Err(e) => {
                self.logger.warn(
                    "Could not read pair address after adding liquidity",
                    json!({ "transactionId": tx_id, "error": e.to_string() }),
                );
                None
            }
        };
        let fee_exemption = match pair {
            Some(pair) => {
                self.exempt_pair_from_fee(rpc.as_ref(), token, pair, wallet)
                    .await
            }
            None => FeeExemption::Failed {
                reason: "pool address could not be determined".to_string(),
            },
        };

        Ok(PoolOutcome::Created(PoolResult {
            pool_address: pair.map(|pair| pair.to_checksum(None)),
            transaction_id: tx_id.clone(),
            token_amount: amounts.token_amount.clone(),
            base_amount: amounts.base_amount.clone(),
            base_symbol: descriptor.native_symbol.clone(),
            explorer_url: descriptor.tx_url(&tx_id),
            approval_transaction,
            fee_exemption,
        }))
    }
}
