use std::collections::HashMap;

use crate::chain::{resolve_rpc_endpoint, NetworkRegistry};
use crate::entity::{BackendFamily, NetworkDescriptor, NetworkId};

struct EvmNetwork {
    key: &'static str,
    name: &'static str,
    chain_id: u64,
    rpc_env: &'static str,
    default_rpc: &'static str,
    explorer: &'static str,
    is_testnet: bool,
    native_symbol: &'static str,
}

const EVM_NETWORKS: &[EvmNetwork] = &[
    EvmNetwork {
        key: "ethereum",
        name: "Ethereum Mainnet",
        chain_id: 1,
        rpc_env: "ETHEREUM_RPC_URL",
        default_rpc: "https://eth.llamarpc.com",
        explorer: "https://etherscan.io",
        is_testnet: false,
        native_symbol: "ETH",
    },
    EvmNetwork {
        key: "sepolia",
        name: "Sepolia Testnet",
        chain_id: 11155111,
        rpc_env: "SEPOLIA_RPC_URL",
        default_rpc: "https://rpc.sepolia.org",
        explorer: "https://sepolia.etherscan.io",
        is_testnet: true,
        native_symbol: "ETH",
    },
    EvmNetwork {
        key: "bsc",
        name: "BNB Smart Chain",
        chain_id: 56,
        rpc_env: "BSC_RPC_URL",
        default_rpc: "https://bsc-dataseed.binance.org",
        explorer: "https://bscscan.com",
        is_testnet: false,
        native_symbol: "BNB",
    },
    EvmNetwork {
        key: "bscTestnet",
        name: "BSC Testnet",
        chain_id: 97,
        rpc_env: "BSC_TESTNET_RPC_URL",
        default_rpc: "https://data-seed-prebsc-1-s1.binance.org:8545",
        explorer: "https://testnet.bscscan.com",
        is_testnet: true,
        native_symbol: "BNB",
    },
    EvmNetwork {
        key: "polygon",
        name: "Polygon",
        chain_id: 137,
        rpc_env: "POLYGON_RPC_URL",
        default_rpc: "https://polygon-rpc.com",
        explorer: "https://polygonscan.com",
        is_testnet: false,
        native_symbol: "MATIC",
    },
    EvmNetwork {
        key: "mumbai",
        name: "Mumbai Testnet",
        chain_id: 80001,
        rpc_env: "MUMBAI_RPC_URL",
        default_rpc: "https://rpc-mumbai.maticvigil.com",
        explorer: "https://mumbai.polygonscan.com",
        is_testnet: true,
        native_symbol: "MATIC",
    },
    EvmNetwork {
        key: "arbitrum",
        name: "Arbitrum One",
        chain_id: 42161,
        rpc_env: "ARBITRUM_RPC_URL",
        default_rpc: "https://arb1.arbitrum.io/rpc",
        explorer: "https://arbiscan.io",
        is_testnet: false,
        native_symbol: "ETH",
    },
    EvmNetwork {
        key: "optimism",
        name: "Optimism",
        chain_id: 10,
        rpc_env: "OPTIMISM_RPC_URL",
        default_rpc: "https://mainnet.optimism.io",
        explorer: "https://optimistic.etherscan.io",
        is_testnet: false,
        native_symbol: "ETH",
    },
    EvmNetwork {
        key: "base",
        name: "Base",
        chain_id: 8453,
        rpc_env: "BASE_RPC_URL",
        default_rpc: "https://mainnet.base.org",
        explorer: "https://basescan.org",
        is_testnet: false,
        native_symbol: "ETH",
    },
];

/// Build the EVM registry, resolving each RPC endpoint once.
pub fn evm_registry(rpc_overrides: &HashMap<String, String>) -> NetworkRegistry {
    let networks = EVM_NETWORKS
        .iter()
        .map(|n| NetworkDescriptor {
            key: n.key.to_string(),
            display_name: n.name.to_string(),
            network_id: NetworkId::Chain(n.chain_id),
            rpc_endpoint: resolve_rpc_endpoint(n.key, n.rpc_env, n.default_rpc, rpc_overrides),
            explorer_base_url: n.explorer.to_string(),
            is_testnet: n.is_testnet,
            native_symbol: n.native_symbol.to_string(),
        })
        .collect();

    NetworkRegistry::new(BackendFamily::Evm, networks)
}
