//! Network registries, explorer links and RPC endpoint resolution.

use std::collections::HashMap;

use token_launchpad::chain::resolve_rpc_endpoint;
use token_launchpad::evm::evm_registry;
use token_launchpad::evm::pool::router_for;
use token_launchpad::solana::solana_registry;
use token_launchpad::{LaunchpadError, NetworkId};

#[test]
fn test_lookup_is_case_insensitive() {
    let registry = evm_registry(&HashMap::new());
    let network = registry.lookup("BscTestnet").unwrap();
    assert_eq!(network.key, "bscTestnet");
    assert_eq!(network.network_id, NetworkId::Chain(97));
    assert!(network.is_testnet);
    assert_eq!(network.native_symbol, "BNB");

    assert!(registry.contains("SEPOLIA"));
}

#[test]
fn test_unknown_network_is_a_configuration_error() {
    let registry = solana_registry(&HashMap::new());
    match registry.lookup("localnet") {
        Err(LaunchpadError::Configuration(message)) => {
            assert!(message.contains("localnet"));
            assert!(message.contains("mainnet, devnet, testnet"));
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_registry_order_and_size() {
    let evm = evm_registry(&HashMap::new());
    assert_eq!(
        evm.list_available(),
        vec![
            "ethereum",
            "sepolia",
            "bsc",
            "bscTestnet",
            "polygon",
            "mumbai",
            "arbitrum",
            "optimism",
            "base"
        ]
    );
    assert_eq!(solana_registry(&HashMap::new()).descriptors().len(), 3);
}

#[test]
fn test_explorer_links() {
    let evm = evm_registry(&HashMap::new());
    let sepolia = evm.lookup("sepolia").unwrap();
    assert_eq!(
        sepolia.address_url("0xabc"),
        "https://sepolia.etherscan.io/address/0xabc"
    );
    assert_eq!(sepolia.tx_url("0xdef"), "https://sepolia.etherscan.io/tx/0xdef");

    let solana = solana_registry(&HashMap::new());
    let mainnet = solana.lookup("mainnet").unwrap();
    assert_eq!(
        mainnet.token_url("Mint111"),
        "https://solscan.io/token/Mint111?cluster=mainnet-beta"
    );
}

#[test]
fn test_configured_rpc_override_wins() {
    let mut overrides = HashMap::new();
    overrides.insert("Devnet".to_string(), "http://127.0.0.1:8899".to_string());
    let registry = solana_registry(&overrides);
    assert_eq!(
        registry.lookup("devnet").unwrap().rpc_endpoint,
        "http://127.0.0.1:8899"
    );

    assert_eq!(
        resolve_rpc_endpoint(
            "nowhere",
            "LAUNCHPAD_TEST_UNSET_RPC_VAR",
            "https://default.example",
            &HashMap::new()
        ),
        "https://default.example"
    );
}

#[test]
fn test_every_evm_network_has_a_router() {
    let registry = evm_registry(&HashMap::new());
    for key in registry.list_available() {
        assert!(router_for(&key).is_some(), "no router for {}", key);
    }

    let (_, venue) = router_for("BSC").unwrap();
    assert_eq!(venue, "PancakeSwap");
    let (sepolia, _) = router_for("sepolia").unwrap();
    let (mainnet, _) = router_for("ethereum").unwrap();
    assert_ne!(sepolia, mainnet);
    assert!(router_for("hardhat").is_none());
}
