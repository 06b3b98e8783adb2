use anyhow::{Context, Result};
use ::config::{Config as ConfigSource, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::entity::{FeeConfig, MAX_BASIS_POINTS};

pub const DEFAULT_SERVICE_NAME: &str = "opencoins-launchpad";
pub const DEFAULT_EVM_FEE_COLLECTOR: &str = "0xd2C91503a0365F525699aFD55BaF10D7960Ac5b4";
pub const DEFAULT_SOLANA_FEE_COLLECTOR: &str = "CrjcCXMHg1MkrzdTBkSQjmGfiKjK7EGXHpcofgMBrB6W";
pub const DEFAULT_SLIPPAGE_BPS: u16 = 100;

/// Process configuration, read once at start-up.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Service name attached to every log record
    pub service_name: String,

    pub fee: FeeSettings,

    pub evm: EvmSettings,

    /// RPC endpoint overrides keyed by network name
    pub rpc: HashMap<String, String>,
}

/// Collector addresses only. The fee rate is fixed, so `fee.percentage` is rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeeSettings {
    pub evm_collector: String,
    pub solana_collector: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EvmSettings {
    /// Compiled token artifact: raw hex or a JSON file with a `bytecode` field
    pub token_bytecode_path: Option<PathBuf>,

    /// Slippage tolerance for liquidity provision, in basis points
    pub slippage_bps: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            fee: FeeSettings::default(),
            evm: EvmSettings::default(),
            rpc: HashMap::new(),
        }
    }
}

impl Default for FeeSettings {
    fn default() -> Self {
        Self {
            evm_collector: DEFAULT_EVM_FEE_COLLECTOR.to_string(),
            solana_collector: DEFAULT_SOLANA_FEE_COLLECTOR.to_string(),
        }
    }
}

impl Default for EvmSettings {
    fn default() -> Self {
        Self {
            token_bytecode_path: None,
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
        }
    }
}

impl AppConfig {
    /// Load `.env`, then `launchpad.{toml,yaml,json}` if present, then `LAUNCHPAD__*` variables.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_sources(None)
    }

    pub fn from_sources(file: Option<&Path>) -> Result<Self> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name("launchpad").required(false),
        };

        let source = ConfigSource::builder()
            .add_source(file_source)
            .add_source(
                Environment::with_prefix("LAUNCHPAD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read launchpad configuration")?;

        let config: Self = source
            .try_deserialize()
            .context("Invalid launchpad configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.evm.slippage_bps > MAX_BASIS_POINTS {
            anyhow::bail!(
                "evm.slippage_bps must be at most {}, got {}",
                MAX_BASIS_POINTS,
                self.evm.slippage_bps
            );
        }
        Ok(())
    }

    pub fn fee_config(&self) -> FeeConfig {
        FeeConfig::new(
            self.fee.evm_collector.clone(),
            self.fee.solana_collector.clone(),
        )
    }
}
