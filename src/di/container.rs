use alloy::primitives::Bytes;
use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::chain::{BackendSet, ChainBackend, NetworkRegistry};
use crate::config::AppConfig;
use crate::entity::FeeConfig;
use crate::evm::contracts::load_token_bytecode;
use crate::evm::{evm_registry, AlloyConnector, EvmBackend, EvmConnector};
use crate::logger::{LaunchpadLogger, LogFacadeSink, LogSink};
use crate::solana::{solana_registry, RpcClientConnector, SolanaBackend, SolanaConnector};

/// ServiceContainer holds everything built once at start-up and shared by every invocation
pub struct ServiceContainer {
    // Configuration
    fee_config: Arc<FeeConfig>,
    slippage_bps: u16,
    token_bytecode: Option<Bytes>,

    // Networks
    evm_networks: Arc<NetworkRegistry>,
    solana_networks: Arc<NetworkRegistry>,

    // Chain access
    evm_connector: Arc<dyn EvmConnector>,
    solana_connector: Arc<dyn SolanaConnector>,

    logger: LaunchpadLogger,
}

impl ServiceContainer {
    /// Wire the real alloy and Solana RPC connectors, logging through the `log` facade.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let token_bytecode = match &config.evm.token_bytecode_path {
            Some(path) => {
                let code = load_token_bytecode(path)
                    .with_context(|| format!("Failed to load EVM token bytecode from {}", path.display()))?;
                info!("Loaded EVM token bytecode ({} bytes)", code.len());
                Some(code)
            }
            None => None,
        };

        Ok(Self::with_connectors(
            config,
            Arc::new(AlloyConnector),
            Arc::new(RpcClientConnector),
            token_bytecode,
            Arc::new(LogFacadeSink),
        ))
    }

    /// Build with explicit chain connectors and log sink.
    pub fn with_connectors(
        config: &AppConfig,
        evm_connector: Arc<dyn EvmConnector>,
        solana_connector: Arc<dyn SolanaConnector>,
        token_bytecode: Option<Bytes>,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            fee_config: Arc::new(config.fee_config()),
            slippage_bps: config.evm.slippage_bps,
            token_bytecode,
            evm_networks: Arc::new(evm_registry(&config.rpc)),
            solana_networks: Arc::new(solana_registry(&config.rpc)),
            evm_connector,
            solana_connector,
            logger: LaunchpadLogger::new(sink, config.service_name.clone()),
        }
    }

    // Accessor methods

    pub fn fee_config(&self) -> Arc<FeeConfig> {
        self.fee_config.clone()
    }

    /// A logger with a fresh invocation id.
    pub fn invocation_logger(&self) -> LaunchpadLogger {
        self.logger.for_invocation()
    }

    /// Both backends, logging under the given invocation.
    pub fn backends(&self, logger: &LaunchpadLogger) -> BackendSet {
        let evm: Arc<dyn ChainBackend> = Arc::new(EvmBackend::new(
            self.evm_networks.clone(),
            self.evm_connector.clone(),
            self.token_bytecode.clone(),
            self.slippage_bps,
            logger.clone(),
        ));
        let solana: Arc<dyn ChainBackend> = Arc::new(SolanaBackend::new(
            self.solana_networks.clone(),
            self.solana_connector.clone(),
            logger.clone(),
        ));

        BackendSet::new(evm, solana)
    }
}
