use crate::entity::Credentials;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything the wizard has collected so far. Re-supplied in full on every call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRequest {
    pub blockchain: Option<String>,
    pub network: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<i64>,
    pub supply: Option<String>,
    #[serde(skip_serializing)]
    pub credentials: Option<Credentials>,
    pub create_pool: Option<String>,
    #[serde(alias = "dexChoice")]
    pub solana_dex: Option<String>,
    #[serde(alias = "poolTokenAmount")]
    pub token_for_pool: Option<String>,
    #[serde(alias = "poolBaseAmount")]
    pub base_for_pool: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl DeploymentRequest {
    pub fn blockchain(&self) -> Option<&str> {
        present(&self.blockchain)
    }

    pub fn network(&self) -> Option<&str> {
        present(&self.network)
    }

    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn symbol(&self) -> Option<&str> {
        present(&self.symbol)
    }

    pub fn supply(&self) -> Option<&str> {
        present(&self.supply)
    }

    pub fn credentials(&self) -> Option<&str> {
        self.credentials
            .as_ref()
            .map(Credentials::expose)
            .filter(|v| !v.is_empty())
    }

    pub fn create_pool(&self) -> Option<&str> {
        present(&self.create_pool)
    }

    pub fn solana_dex(&self) -> Option<&str> {
        present(&self.solana_dex)
    }

    pub fn token_for_pool(&self) -> Option<&str> {
        present(&self.token_for_pool)
    }

    pub fn base_for_pool(&self) -> Option<&str> {
        present(&self.base_for_pool)
    }

    /// Only an exact, case-insensitive "yes" opts into pool creation.
    pub fn wants_pool(&self) -> bool {
        self.create_pool()
            .map(|answer| answer.eq_ignore_ascii_case("yes"))
            .unwrap_or(false)
    }
}

/// Solana DEX the user wants guidance for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolanaDex {
    Raydium,
    Meteora,
    Jupiter,
}

impl SolanaDex {
    pub fn display_name(&self) -> &'static str {
        match self {
            SolanaDex::Raydium => "Raydium",
            SolanaDex::Meteora => "Meteora",
            SolanaDex::Jupiter => "Jupiter",
        }
    }

    pub fn pool_creation_url(&self, mainnet: bool) -> &'static str {
        match (self, mainnet) {
            (SolanaDex::Raydium, true) => "https://raydium.io/liquidity/create-pool/",
            (SolanaDex::Raydium, false) => "https://raydium.io/",
            (SolanaDex::Meteora, true) => "https://app.meteora.ag/pools/create",
            (SolanaDex::Meteora, false) => "https://app.meteora.ag/",
            (SolanaDex::Jupiter, _) => "https://jup.ag/",
        }
    }
}

impl fmt::Display for SolanaDex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
