use alloy::primitives::U256;
use std::str::FromStr;

use crate::entity::{BackendFamily, LaunchpadError, NetworkDescriptor, TokenInfo};
use crate::utils::format_units;

pub trait TokenInfoView: Send + Sync {
    fn token_info(&self, info: &TokenInfo) -> String;

    fn networks(&self, family: BackendFamily, networks: &[NetworkDescriptor]) -> String;

    fn error(&self, error: &LaunchpadError) -> String;
}

pub struct MarkdownTokenInfoView;

impl MarkdownTokenInfoView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownTokenInfoView {
    fn default() -> Self {
        Self::new()
    }
}

fn human_supply(raw: &str, decimals: u8) -> String {
    match U256::from_str(raw) {
        Ok(amount) => format_units(amount, decimals),
        Err(_) => raw.to_string(),
    }
}

impl TokenInfoView for MarkdownTokenInfoView {
    fn token_info(&self, info: &TokenInfo) -> String {
        match info {
            TokenInfo::Evm(info) => format!(
                "**{} ({})**\n\n\
                 📍 Address: `{}`\n\
                 🌐 Network: {}\n\
                 🔢 Decimals: {}\n\
                 💰 Supply: {} ({} base units)\n\
                 👤 Fee Collector: `{}`\n\
                 🔗 Explorer: {}",
                info.name,
                info.symbol,
                info.address,
                info.network,
                info.decimals,
                human_supply(&info.total_supply, info.decimals),
                info.total_supply,
                info.fee_collector,
                info.explorer_url
            ),
            TokenInfo::Solana(info) => {
                let fee = match info.transfer_fee_basis_points {
                    Some(bps) => format!(
                        "\n💸 Transfer Fee: {} bps, withdrawable by `{}`",
                        bps,
                        info.fee_withdraw_authority.as_deref().unwrap_or("none")
                    ),
                    None => String::new(),
                };
                format!(
                    "**Solana Token**\n\n\
                     📍 Mint: `{}`\n\
                     🌐 Network: {}\n\
                     🔢 Decimals: {}\n\
                     💰 Supply: {} ({} base units)\n\
                     👤 Authority: `{}`\n\
                     🧊 Freeze Authority: `{}`{}\n\
                     🔗 Explorer: {}",
                    info.mint_address,
                    info.network,
                    info.decimals,
                    format_units(U256::from(info.supply), info.decimals),
                    info.supply,
                    info.mint_authority.as_deref().unwrap_or("none"),
                    info.freeze_authority.as_deref().unwrap_or("none"),
                    fee,
                    info.explorer_url
                )
            }
        }
    }

    fn networks(&self, family: BackendFamily, networks: &[NetworkDescriptor]) -> String {
        let lines = networks
            .iter()
            .map(|n| {
                let kind = if n.is_testnet { "testnet" } else { "mainnet" };
                format!(
                    "  - {} ({}, {}, {}) {}",
                    n.key, n.display_name, n.network_id, kind, n.native_symbol
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("**{} networks**\n\n{}", family, lines)
    }

    fn error(&self, error: &LaunchpadError) -> String {
        format!("❌ Error: {}", error)
    }
}
