pub mod deploy_presenter;
pub mod token_info_presenter;
pub mod wizard_presenter;

pub use deploy_presenter::{DeployPresenter, DeployPresenterImpl};
pub use token_info_presenter::{TokenInfoPresenter, TokenInfoPresenterImpl};
pub use wizard_presenter::{WizardPresenter, WizardPresenterImpl};
