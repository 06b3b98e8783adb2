//! End-to-end launches through the tool router against scripted chains.

mod common;

use std::collections::HashSet;

use common::{EvmState, SolanaState, DEPLOYED_TOKEN, EVM_KEY};
use token_launchpad::commands::{DeployEvmTokenArgs, GetTokenInfoArgs, ListNetworksArgs};
use token_launchpad::{Credentials, DeploymentRequest, Router, ToolCall, ToolRouter};

fn evm_pool_request() -> DeploymentRequest {
    DeploymentRequest {
        create_pool: Some("yes".to_string()),
        token_for_pool: Some("500000".to_string()),
        base_for_pool: Some("1".to_string()),
        ..common::evm_request()
    }
}

#[tokio::test]
async fn test_evm_launch_with_pool() {
    let harness = common::harness();
    let router = ToolRouter::new(harness.services.clone());

    let text = router
        .dispatch(ToolCall::LaunchToken(evm_pool_request()))
        .await;

    assert!(text.contains("TOKEN DEPLOYED SUCCESSFULLY"), "{}", text);
    assert!(text.contains(&DEPLOYED_TOKEN.to_checksum(None)));
    assert!(text.contains("Sepolia Testnet"));
    assert!(text.contains("1% of all token transfers will go to:"));
    assert!(text.contains("0xd2C91503a0365F525699aFD55BaF10D7960Ac5b4"));
    assert!(text.contains("LIQUIDITY POOL CREATED"));
    assert!(text.contains("Pool created - Token is tradeable!"));

    let state = harness.evm.state.lock().unwrap();
    assert_eq!(state.deployed_code.len(), 1);
    assert_eq!(state.liquidity_calls.len(), 1);
}

#[tokio::test]
async fn test_pool_failure_is_reported_after_the_deployment() {
    let harness = common::harness_with(
        EvmState {
            native_balance: alloy::primitives::U256::ZERO,
            ..Default::default()
        },
        SolanaState::default(),
        Some(alloy::primitives::Bytes::from(vec![0x60, 0x80])),
    );
    let router = ToolRouter::new(harness.services.clone());

    let text = router
        .dispatch(ToolCall::LaunchToken(evm_pool_request()))
        .await;

    let deployed = text.find("TOKEN DEPLOYED SUCCESSFULLY").expect("deployment section");
    let failed = text.find("POOL CREATION FAILED").expect("pool section");
    assert!(deployed < failed);
    assert!(text.contains("Insufficient ETH balance"));
    assert!(text.contains("Set up liquidity (if creating DEX token)"));
    assert!(!text.contains("DEPLOYMENT FAILED"));
}

#[tokio::test]
async fn test_unknown_pair_address_is_still_a_created_pool() {
    let harness = common::harness_with(
        EvmState {
            fail_pair_readback: true,
            ..Default::default()
        },
        SolanaState::default(),
        Some(alloy::primitives::Bytes::from(vec![0x60, 0x80])),
    );
    let router = ToolRouter::new(harness.services.clone());

    let text = router
        .dispatch(ToolCall::LaunchToken(evm_pool_request()))
        .await;

    assert!(text.contains("LIQUIDITY POOL CREATED"), "{}", text);
    assert!(text.contains("unknown (check the transaction on the explorer)"));
    assert!(!text.contains("POOL CREATION FAILED"));
}

#[tokio::test]
async fn test_invalid_pool_amount_blocks_deployment() {
    let harness = common::harness();
    let router = ToolRouter::new(harness.services.clone());

    let text = router
        .dispatch(ToolCall::LaunchToken(DeploymentRequest {
            token_for_pool: Some("2000000".to_string()),
            ..evm_pool_request()
        }))
        .await;

    assert!(text.contains("DEPLOYMENT FAILED"));
    assert!(text.contains("amount exceeds the total supply"));
    assert!(text.contains("Nothing was submitted to the network."));
    assert!(harness.evm.connections.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_solana_launch_with_manual_pool() {
    let harness = common::harness();
    let router = ToolRouter::new(harness.services.clone());
    let keypair = common::keypair_json();

    let text = router
        .dispatch(ToolCall::LaunchToken(DeploymentRequest {
            create_pool: Some("yes".to_string()),
            solana_dex: Some("raydium".to_string()),
            token_for_pool: Some("500000".to_string()),
            base_for_pool: Some("1".to_string()),
            ..common::solana_request(&keypair)
        }))
        .await;

    assert!(text.contains("Mint Address"), "{}", text);
    assert!(text.contains("RAYDIUM POOL - MANUAL SETUP REQUIRED"));
    assert!(text.contains("https://raydium.io/"));
    assert!(text.contains("Create the pool in the DEX interface"));
}

#[tokio::test]
async fn test_unknown_network_is_rejected_before_any_connection() {
    let harness = common::harness();
    let router = ToolRouter::new(harness.services.clone());

    let text = router
        .dispatch(ToolCall::LaunchToken(DeploymentRequest {
            network: Some("goerli".to_string()),
            ..common::evm_request()
        }))
        .await;

    assert!(text.contains("Unknown EVM network: goerli"));
    assert!(harness.evm.connections.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_bytecode_is_a_configuration_error() {
    let harness = common::harness_with(EvmState::default(), SolanaState::default(), None);
    let router = ToolRouter::new(harness.services.clone());

    let text = router
        .dispatch(ToolCall::DeployEvmToken(DeployEvmTokenArgs {
            network: "sepolia".to_string(),
            name: "My Token".to_string(),
            symbol: "MTK".to_string(),
            decimals: 18,
            total_supply: "1000000".to_string(),
            private_key: Credentials::new(EVM_KEY),
        }))
        .await;

    assert!(text.contains("EVM token bytecode is not configured"));
    assert!(harness.evm.connections.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_credentials_never_reach_the_logs() {
    let harness = common::harness();
    let router = ToolRouter::new(harness.services.clone());
    let keypair = common::keypair_json();

    router
        .dispatch(ToolCall::LaunchToken(evm_pool_request()))
        .await;
    router
        .dispatch(ToolCall::LaunchToken(common::solana_request(&keypair)))
        .await;

    let logs = harness.sink.dump();
    assert!(!logs.is_empty());
    assert!(!logs.contains(&EVM_KEY[2..]));
    assert!(!logs.contains(&keypair));

    let debug = format!("{:?}", evm_pool_request());
    assert!(!debug.contains(&EVM_KEY[2..]));
}

#[tokio::test]
async fn test_each_invocation_has_its_own_id() {
    let harness = common::harness();
    let router = ToolRouter::new(harness.services.clone());

    router
        .dispatch(ToolCall::DeployEvmToken(DeployEvmTokenArgs {
            network: "sepolia".to_string(),
            name: "One".to_string(),
            symbol: "ONE".to_string(),
            decimals: 18,
            total_supply: "1000".to_string(),
            private_key: Credentials::new(EVM_KEY),
        }))
        .await;
    router
        .dispatch(ToolCall::DeployEvmToken(DeployEvmTokenArgs {
            network: "base".to_string(),
            name: "Two".to_string(),
            symbol: "TWO".to_string(),
            decimals: 18,
            total_supply: "1000".to_string(),
            private_key: Credentials::new(EVM_KEY),
        }))
        .await;

    let records = harness.sink.records();
    let ids: HashSet<String> = records
        .iter()
        .filter_map(|r| r.extra["invocationId"].as_str().map(str::to_string))
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(records.iter().all(|r| r.service == "opencoins-launchpad"));
    assert!(records
        .iter()
        .any(|r| r.message == "Token deployed: Two (TWO)" && r.extra["network"] == "base"));
}

#[tokio::test]
async fn test_evm_token_info() {
    let harness = common::harness();
    let router = ToolRouter::new(harness.services.clone());

    let text = router
        .dispatch(ToolCall::GetTokenInfo(GetTokenInfoArgs {
            address: DEPLOYED_TOKEN.to_checksum(None),
            network: "ethereum".to_string(),
            chain: "evm".to_string(),
        }))
        .await;

    assert!(text.starts_with("**My Token (MTK)**"), "{}", text);
    assert!(text.contains("💰 Supply: 1000000 (1000000000000000000000000 base units)"));
    assert!(text.contains("https://etherscan.io/address/"));

    // read-only connection
    assert_eq!(
        harness.evm.connections.lock().unwrap().as_slice(),
        &[("ethereum".to_string(), false)]
    );
}

#[tokio::test]
async fn test_list_networks_tool() {
    let harness = common::harness();
    let router = ToolRouter::new(harness.services.clone());

    let text = router
        .dispatch(ToolCall::ListNetworks(ListNetworksArgs {
            chain: "evm".to_string(),
        }))
        .await;
    assert!(text.starts_with("**EVM networks**"));
    assert!(text.contains("  - bsc (BNB Smart Chain, 56, mainnet) BNB"));

    let text = router
        .dispatch(ToolCall::ListNetworks(ListNetworksArgs {
            chain: "cosmos".to_string(),
        }))
        .await;
    assert!(text.starts_with("❌ Error: Unsupported blockchain 'cosmos'"));
}
