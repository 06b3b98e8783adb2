pub mod backend;
pub mod client;
pub mod network;
pub mod pool;
pub mod rpc;
pub mod tokens;
pub mod wallet;

pub use backend::SolanaBackend;
pub use client::create_solana_client;
pub use network::solana_registry;
pub use pool::SolanaPoolOrchestrator;
pub use rpc::{ClusterRpc, RpcClientConnector, SolanaConnector, SolanaRpc};
pub use wallet::{keypair_from_json, parse_pubkey};
