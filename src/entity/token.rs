use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Validated token parameters. `total_supply` is already scaled to base units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpec {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
}

/// On-chain metadata of a deployed EVM token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvmTokenInfo {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: String,
    pub fee_collector: String,
    pub network: String,
    pub explorer_url: String,
}

/// On-chain metadata of a Solana mint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolanaTokenInfo {
    pub mint_address: String,
    pub decimals: u8,
    pub supply: u64,
    pub mint_authority: Option<String>,
    pub freeze_authority: Option<String>,
    pub transfer_fee_basis_points: Option<u16>,
    pub fee_withdraw_authority: Option<String>,
    pub network: String,
    pub explorer_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum TokenInfo {
    Evm(EvmTokenInfo),
    Solana(SolanaTokenInfo),
}
