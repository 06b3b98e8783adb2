//! ABI of the launchpad token and the Uniswap V2 style router it is paired through.
//!
//! The token bytecode is an external, reviewed artifact. It is loaded at start-up
//! and only ever parameterised here, never built.
use alloy::primitives::{hex, Address, Bytes};
use alloy::sol;
use alloy::sol_types::SolConstructor;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::entity::TokenSpec;

sol! {
    #[sol(rpc)]
    contract LaunchpadToken {
        constructor(string name_, string symbol_, uint8 decimals_, uint256 totalSupply_, address feeCollector_);

        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 value) external returns (bool);
        function owner() external view returns (address);
        function feeCollector() external view returns (address);
        function isExcludedFromFee(address account) external view returns (bool);
        function setFeeExclusion(address account, bool excluded) external;
    }

    #[sol(rpc)]
    interface IUniswapV2Router02 {
        function factory() external pure returns (address);
        function WETH() external pure returns (address);
        function addLiquidityETH(
            address token,
            uint256 amountTokenDesired,
            uint256 amountTokenMin,
            uint256 amountETHMin,
            address to,
            uint256 deadline
        ) external payable returns (uint256 amountToken, uint256 amountETH, uint256 liquidity);
    }

    #[sol(rpc)]
    interface IUniswapV2Factory {
        function getPair(address tokenA, address tokenB) external view returns (address pair);
    }
}

/// Read a token artifact: raw hex, a Hardhat artifact (`"bytecode": "0x.."`)
/// or a Foundry artifact (`"bytecode": {"object": "0x.."}`).
pub fn load_token_bytecode(path: &Path) -> Result<Bytes> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read token artifact {}", path.display()))?;
    parse_bytecode_artifact(&raw)
}

pub fn parse_bytecode_artifact(raw: &str) -> Result<Bytes> {
    let raw = raw.trim();

    let hex_code = if raw.starts_with('{') {
        let artifact: Value =
            serde_json::from_str(raw).context("Token artifact is not valid JSON")?;
        match &artifact["bytecode"] {
            Value::String(code) => code.clone(),
            Value::Object(obj) => obj
                .get("object")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| anyhow!("Token artifact has no bytecode.object field"))?,
            _ => return Err(anyhow!("Token artifact has no bytecode field")),
        }
    } else {
        raw.to_string()
    };

    let code = hex::decode(hex_code.trim()).context("Token bytecode is not valid hex")?;
    if code.is_empty() {
        return Err(anyhow!("Token bytecode is empty"));
    }
    Ok(Bytes::from(code))
}

/// Creation code followed by the ABI-encoded constructor arguments.
pub fn deployment_code(bytecode: &Bytes, spec: &TokenSpec, fee_collector: Address) -> Bytes {
    let args = LaunchpadToken::constructorCall {
        name_: spec.name.clone(),
        symbol_: spec.symbol.clone(),
        decimals_: spec.decimals,
        totalSupply_: spec.total_supply,
        feeCollector_: fee_collector,
    }
    .abi_encode();

    let mut code = bytecode.to_vec();
    code.extend_from_slice(&args);
    Bytes::from(code)
}
