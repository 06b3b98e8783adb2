use std::collections::HashMap;

use crate::chain::{resolve_rpc_endpoint, NetworkRegistry};
use crate::entity::{BackendFamily, NetworkDescriptor, NetworkId};

// (key, display name, cluster, rpc env var, default rpc, testnet)
const SOLANA_NETWORKS: &[(&str, &str, &str, &str, &str, bool)] = &[
    (
        "mainnet",
        "Solana Mainnet",
        "mainnet-beta",
        "SOLANA_MAINNET_RPC_URL",
        "https://api.mainnet-beta.solana.com",
        false,
    ),
    (
        "devnet",
        "Solana Devnet",
        "devnet",
        "SOLANA_DEVNET_RPC_URL",
        "https://api.devnet.solana.com",
        true,
    ),
    (
        "testnet",
        "Solana Testnet",
        "testnet",
        "SOLANA_TESTNET_RPC_URL",
        "https://api.testnet.solana.com",
        true,
    ),
];

const SOLANA_EXPLORER: &str = "https://solscan.io";

pub fn solana_registry(rpc_overrides: &HashMap<String, String>) -> NetworkRegistry {
    let networks = SOLANA_NETWORKS
        .iter()
        .map(
            |(key, name, cluster, rpc_env, default_rpc, is_testnet)| NetworkDescriptor {
                key: key.to_string(),
                display_name: name.to_string(),
                network_id: NetworkId::Cluster(cluster.to_string()),
                rpc_endpoint: resolve_rpc_endpoint(key, rpc_env, default_rpc, rpc_overrides),
                explorer_base_url: SOLANA_EXPLORER.to_string(),
                is_testnet: *is_testnet,
                native_symbol: "SOL".to_string(),
            },
        )
        .collect();

    NetworkRegistry::new(BackendFamily::Solana, networks)
}
