use crate::entity::SolanaDex;
use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Funding for a new pool, kept both as entered and scaled to base units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolAmounts {
    pub token_amount: String,
    pub token_base_units: U256,
    pub base_amount: String,
    pub base_units: U256,
}

/// Input of a pool orchestrator, built after a successful deployment.
#[derive(Debug, Clone)]
pub struct PoolRequest {
    pub token_address: String,
    pub token_symbol: String,
    pub token_decimals: u8,
    pub network: String,
    pub amounts: PoolAmounts,
    pub dex: Option<SolanaDex>,
}

/// Best-effort step run after liquidity lands: excluding the pool from the transfer fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeExemption {
    Exempted { transaction_id: String },
    AlreadyExempt,
    NotAuthority { owner: String },
    Failed { reason: String },
}

impl FeeExemption {
    pub fn note(&self) -> String {
        match self {
            FeeExemption::Exempted { transaction_id } => format!(
                "Pool excluded from transfer fees (tx {}) - no fee on swaps",
                transaction_id
            ),
            FeeExemption::AlreadyExempt => "Pool already excluded from transfer fees".to_string(),
            FeeExemption::NotAuthority { owner } => format!(
                "Pool not excluded from fees: wallet is not the token owner (owner: {})",
                owner
            ),
            FeeExemption::Failed { reason } => {
                format!("Could not exclude pool from fees: {}", reason)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolResult {
    /// `None` when the pair could not be read back after the liquidity transaction
    pub pool_address: Option<String>,
    pub transaction_id: String,
    pub token_amount: String,
    pub base_amount: String,
    pub base_symbol: String,
    pub explorer_url: String,
    pub approval_transaction: Option<String>,
    pub fee_exemption: FeeExemption,
}

/// Pool creation that has to be finished by hand in a DEX UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualPoolSetup {
    pub dex: SolanaDex,
    pub setup_url: String,
    pub mint_address: String,
    pub token_amount: String,
    pub base_amount: String,
    pub base_symbol: String,
    pub balances_verified: bool,
    pub guidance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolOutcome {
    Created(PoolResult),
    ManualSetupRequired(ManualPoolSetup),
}
