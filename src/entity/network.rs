use serde::{Deserialize, Serialize};
use std::fmt;

/// The two blockchain ecosystems a token can be launched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendFamily {
    Evm,
    Solana,
}

impl BackendFamily {
    pub fn max_decimals(&self) -> u8 {
        match self {
            BackendFamily::Evm => 18,
            BackendFamily::Solana => 9,
        }
    }

    pub fn default_decimals(&self) -> u8 {
        self.max_decimals()
    }

    /// Decimals of the family's native currency (wei / lamports).
    pub fn native_decimals(&self) -> u8 {
        match self {
            BackendFamily::Evm => 18,
            BackendFamily::Solana => 9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendFamily::Evm => "evm",
            BackendFamily::Solana => "solana",
        }
    }
}

impl fmt::Display for BackendFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendFamily::Evm => write!(f, "EVM"),
            BackendFamily::Solana => write!(f, "Solana"),
        }
    }
}

/// Chain id for EVM networks, cluster name for Solana.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkId {
    Chain(u64),
    Cluster(String),
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::Chain(id) => write!(f, "{}", id),
            NetworkId::Cluster(cluster) => write!(f, "{}", cluster),
        }
    }
}

/// Immutable connection and display metadata for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    pub key: String,
    pub display_name: String,
    pub network_id: NetworkId,
    pub rpc_endpoint: String,
    pub explorer_base_url: String,
    pub is_testnet: bool,
    pub native_symbol: String,
}

impl NetworkDescriptor {
    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer_base_url, address)
    }

    pub fn tx_url(&self, tx: &str) -> String {
        format!("{}/tx/{}", self.explorer_base_url, tx)
    }

    pub fn token_url(&self, mint: &str) -> String {
        format!(
            "{}/token/{}?cluster={}",
            self.explorer_base_url, mint, self.network_id
        )
    }
}
