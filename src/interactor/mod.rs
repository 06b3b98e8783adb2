pub mod deploy_interactor;
pub mod token_info_interactor;

pub use deploy_interactor::{
    DeployInteractor, DeployInteractorImpl, LaunchOutcome, PoolPlan, PreparedLaunch,
};
pub use token_info_interactor::{TokenInfoInteractor, TokenInfoInteractorImpl};
