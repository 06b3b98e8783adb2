pub mod backend;
pub mod contracts;
pub mod network;
pub mod pool;
pub mod rpc;
pub mod wallet;

pub use backend::EvmBackend;
pub use network::evm_registry;
pub use pool::UniswapPoolOrchestrator;
pub use rpc::{AddLiquidityEth, AlloyConnector, EvmConnector, EvmRpc, TokenMetadata};
