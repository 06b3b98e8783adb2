mod deployment;
mod fee;
mod launchpad_error;
mod network;
mod pool;
mod request;
pub mod state;
mod token;

pub use deployment::{Credentials, DeploymentResult};
pub use fee::{FeeConfig, FEE_PERCENTAGE, MAX_BASIS_POINTS};
pub use launchpad_error::{LaunchpadError, ValidationError};
pub use network::{BackendFamily, NetworkDescriptor, NetworkId};
pub use pool::{FeeExemption, ManualPoolSetup, PoolAmounts, PoolOutcome, PoolRequest, PoolResult};
pub use request::{DeploymentRequest, SolanaDex};
pub use state::{next_state, next_step, WizardState, WizardStep};
pub use token::{EvmTokenInfo, SolanaTokenInfo, TokenInfo, TokenSpec};
