pub mod chain;
pub mod commands;
pub mod config;
pub mod di;
pub mod entity;
pub mod evm;
pub mod interactor;
pub mod logger;
pub mod presenter;
pub mod router;
pub mod solana;
pub mod utils;
pub mod validation;
pub mod view;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used items
pub use commands::*;
pub use config::AppConfig;
pub use di::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use router::*;
pub use view::*;
