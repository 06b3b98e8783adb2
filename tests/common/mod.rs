//! In-memory chain doubles and fixtures shared by the integration tests.
#![allow(dead_code)]

use alloy::primitives::{address, Address, Bytes, TxHash, B256, U256};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
};
use std::sync::{Arc, Mutex};

use token_launchpad::config::AppConfig;
use token_launchpad::evm::{AddLiquidityEth, EvmConnector, EvmRpc, TokenMetadata};
use token_launchpad::logger::{LaunchpadLogger, LogRecord, LogSink};
use token_launchpad::solana::tokens::MintState;
use token_launchpad::solana::{SolanaConnector, SolanaRpc};
use token_launchpad::{DeploymentRequest, NetworkDescriptor, ServiceContainer};

pub const EVM_KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
pub const WALLET: Address = address!("1111111111111111111111111111111111111111");
pub const DEPLOYED_TOKEN: Address = address!("2222222222222222222222222222222222222222");
pub const FACTORY: Address = address!("3333333333333333333333333333333333333333");
pub const WETH: Address = address!("4444444444444444444444444444444444444444");
pub const PAIR: Address = address!("5555555555555555555555555555555555555555");

pub fn eth(amount: u64) -> U256 {
    U256::from(amount) * U256::from(10u64).pow(U256::from(18u64))
}

pub fn tx_hash(byte: u8) -> TxHash {
    B256::repeat_byte(byte)
}

/// Log sink that keeps every record for inspection.
#[derive(Default)]
pub struct MemorySink {
    pub records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Every message and extra payload, flattened into one string.
    pub fn dump(&self) -> String {
        self.records()
            .iter()
            .map(|r| format!("{} {}", r.message, r.extra))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: LogRecord) {
        self.records.lock().unwrap().push(record);
    }
}

pub fn test_logger(sink: Arc<MemorySink>) -> LaunchpadLogger {
    LaunchpadLogger::new(sink, "launchpad-test")
}

/// Scripted EVM node state.
pub struct EvmState {
    pub token_balance: U256,
    pub native_balance: U256,
    pub allowance: U256,
    pub pair_after_liquidity: Address,
    pub owner: Address,
    pub excluded: bool,
    pub fail_add_liquidity: bool,
    pub fail_pair_readback: bool,
    pub deployed_code: Vec<Bytes>,
    pub approvals: Vec<(Address, U256)>,
    pub liquidity_calls: Vec<AddLiquidityEth>,
    pub exclusions: Vec<Address>,
    pub liquidity_added: bool,
}

impl Default for EvmState {
    fn default() -> Self {
        Self {
            token_balance: eth(1_000_000),
            native_balance: eth(10),
            allowance: U256::ZERO,
            pair_after_liquidity: PAIR,
            owner: WALLET,
            excluded: false,
            fail_add_liquidity: false,
            fail_pair_readback: false,
            deployed_code: Vec::new(),
            approvals: Vec::new(),
            liquidity_calls: Vec::new(),
            exclusions: Vec::new(),
            liquidity_added: false,
        }
    }
}

#[derive(Default)]
pub struct FakeEvm {
    pub state: Mutex<EvmState>,
    pub connections: Mutex<Vec<(String, bool)>>,
}

impl FakeEvm {
    pub fn new(state: EvmState) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(state),
            connections: Mutex::new(Vec::new()),
        })
    }
}

struct FakeEvmRpc {
    node: Arc<FakeEvm>,
    signer: Option<Address>,
}

#[async_trait]
impl EvmRpc for FakeEvmRpc {
    fn signer_address(&self) -> Option<Address> {
        self.signer
    }

    async fn deploy_contract(&self, code: Bytes) -> Result<(Address, TxHash)> {
        self.node.state.lock().unwrap().deployed_code.push(code);
        Ok((DEPLOYED_TOKEN, tx_hash(0xd1)))
    }

    async fn token_metadata(&self, _token: Address) -> Result<TokenMetadata> {
        Ok(TokenMetadata {
            name: "My Token".to_string(),
            symbol: "MTK".to_string(),
            decimals: 18,
            total_supply: eth(1_000_000),
            fee_collector: address!("d2C91503a0365F525699aFD55BaF10D7960Ac5b4"),
        })
    }

    async fn native_balance(&self, _owner: Address) -> Result<U256> {
        Ok(self.node.state.lock().unwrap().native_balance)
    }

    async fn token_balance(&self, _token: Address, _owner: Address) -> Result<U256> {
        Ok(self.node.state.lock().unwrap().token_balance)
    }

    async fn allowance(&self, _token: Address, _owner: Address, _spender: Address) -> Result<U256> {
        Ok(self.node.state.lock().unwrap().allowance)
    }

    async fn approve(&self, _token: Address, spender: Address, amount: U256) -> Result<TxHash> {
        let mut state = self.node.state.lock().unwrap();
        state.approvals.push((spender, amount));
        state.allowance = amount;
        Ok(tx_hash(0xa1))
    }

    async fn router_factory(&self, _router: Address) -> Result<Address> {
        Ok(FACTORY)
    }

    async fn router_weth(&self, _router: Address) -> Result<Address> {
        Ok(WETH)
    }

    async fn get_pair(&self, _factory: Address, _a: Address, _b: Address) -> Result<Address> {
        let state = self.node.state.lock().unwrap();
        if state.liquidity_added && state.fail_pair_readback {
            return Err(anyhow!("error sending request for url (http://127.0.0.1:8545/)"));
        }
        if state.liquidity_added {
            Ok(state.pair_after_liquidity)
        } else {
            Ok(Address::ZERO)
        }
    }

    async fn add_liquidity_eth(&self, _router: Address, params: AddLiquidityEth) -> Result<TxHash> {
        let mut state = self.node.state.lock().unwrap();
        if state.fail_add_liquidity {
            return Err(anyhow!("execution reverted: UniswapV2Router: INSUFFICIENT_A_AMOUNT"));
        }
        state.liquidity_calls.push(params);
        state.liquidity_added = true;
        Ok(tx_hash(0xb1))
    }

    async fn token_owner(&self, _token: Address) -> Result<Address> {
        Ok(self.node.state.lock().unwrap().owner)
    }

    async fn is_excluded_from_fee(&self, _token: Address, _account: Address) -> Result<bool> {
        Ok(self.node.state.lock().unwrap().excluded)
    }

    async fn set_fee_exclusion(&self, _token: Address, account: Address, _excluded: bool) -> Result<TxHash> {
        self.node.state.lock().unwrap().exclusions.push(account);
        Ok(tx_hash(0xe1))
    }
}

pub struct FakeEvmConnector(pub Arc<FakeEvm>);

#[async_trait]
impl EvmConnector for FakeEvmConnector {
    async fn connect(
        &self,
        network: &NetworkDescriptor,
        credentials: Option<&token_launchpad::Credentials>,
    ) -> Result<Arc<dyn EvmRpc>> {
        self.0
            .connections
            .lock()
            .unwrap()
            .push((network.key.clone(), credentials.is_some()));
        Ok(Arc::new(FakeEvmRpc {
            node: self.0.clone(),
            signer: credentials.map(|_| WALLET),
        }))
    }
}

/// Scripted Solana cluster state.
pub struct SolanaState {
    pub lamports: u64,
    pub token_account: Option<u64>,
    pub mint: Option<MintState>,
    pub fail_send: bool,
    pub sent: Vec<(usize, Vec<Pubkey>)>,
}

impl Default for SolanaState {
    fn default() -> Self {
        Self {
            lamports: 5_000_000_000,
            token_account: Some(1_000_000_000_000_000),
            mint: None,
            fail_send: false,
            sent: Vec::new(),
        }
    }
}

#[derive(Default)]
pub struct FakeSolana {
    pub state: Mutex<SolanaState>,
}

impl FakeSolana {
    pub fn new(state: SolanaState) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(state),
        })
    }
}

struct FakeSolanaRpc(Arc<FakeSolana>);

#[async_trait]
impl SolanaRpc for FakeSolanaRpc {
    async fn get_balance(&self, _owner: &Pubkey) -> Result<u64> {
        Ok(self.0.state.lock().unwrap().lamports)
    }

    async fn token_account_balance(&self, _account: &Pubkey) -> Result<Option<u64>> {
        Ok(self.0.state.lock().unwrap().token_account)
    }

    async fn minimum_balance_for_rent_exemption(&self, _len: usize) -> Result<u64> {
        Ok(2_039_280)
    }

    async fn get_mint(&self, _mint: &Pubkey) -> Result<Option<MintState>> {
        Ok(self.0.state.lock().unwrap().mint.clone())
    }

    async fn send_and_confirm(
        &self,
        instructions: &[Instruction],
        _payer: &Keypair,
        _signers: &[&Keypair],
    ) -> Result<Signature> {
        let mut state = self.0.state.lock().unwrap();
        if state.fail_send {
            return Err(anyhow!("Transaction simulation failed: insufficient lamports"));
        }
        let programs = instructions.iter().map(|ix| ix.program_id).collect();
        state.sent.push((instructions.len(), programs));
        Ok(Signature::default())
    }
}

pub struct FakeSolanaConnector(pub Arc<FakeSolana>);

#[async_trait]
impl SolanaConnector for FakeSolanaConnector {
    async fn connect(&self, _network: &NetworkDescriptor) -> Result<Arc<dyn SolanaRpc>> {
        Ok(Arc::new(FakeSolanaRpc(self.0.clone())))
    }
}

/// JSON byte array of a fresh keypair, as `solana-keygen` writes it.
pub fn keypair_json() -> String {
    let keypair = Keypair::new();
    serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap()
}

pub struct Harness {
    pub services: Arc<ServiceContainer>,
    pub evm: Arc<FakeEvm>,
    pub solana: Arc<FakeSolana>,
    pub sink: Arc<MemorySink>,
}

pub fn harness_with(evm: EvmState, solana: SolanaState, bytecode: Option<Bytes>) -> Harness {
    let evm = FakeEvm::new(evm);
    let solana = FakeSolana::new(solana);
    let sink = Arc::new(MemorySink::default());
    let services = ServiceContainer::with_connectors(
        &AppConfig::default(),
        Arc::new(FakeEvmConnector(evm.clone())),
        Arc::new(FakeSolanaConnector(solana.clone())),
        bytecode,
        sink.clone(),
    );

    Harness {
        services: Arc::new(services),
        evm,
        solana,
        sink,
    }
}

pub fn harness() -> Harness {
    harness_with(
        EvmState::default(),
        SolanaState::default(),
        Some(Bytes::from(vec![0x60, 0x80, 0x60, 0x40])),
    )
}

pub fn evm_request() -> DeploymentRequest {
    DeploymentRequest {
        blockchain: Some("evm".to_string()),
        network: Some("sepolia".to_string()),
        name: Some("My Token".to_string()),
        symbol: Some("MTK".to_string()),
        decimals: Some(18),
        supply: Some("1000000".to_string()),
        credentials: Some(token_launchpad::Credentials::new(EVM_KEY)),
        create_pool: Some("no".to_string()),
        ..Default::default()
    }
}

pub fn solana_request(keypair: &str) -> DeploymentRequest {
    DeploymentRequest {
        blockchain: Some("solana".to_string()),
        network: Some("devnet".to_string()),
        name: Some("Sol Token".to_string()),
        symbol: Some("SLT".to_string()),
        decimals: Some(9),
        supply: Some("1000000".to_string()),
        credentials: Some(token_launchpad::Credentials::new(keypair)),
        create_pool: Some("no".to_string()),
        ..Default::default()
    }
}
