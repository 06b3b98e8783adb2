pub mod report_view;
pub mod token_info_view;
pub mod wizard_view;

pub use report_view::{MarkdownReportView, ReportView};
pub use token_info_view::{MarkdownTokenInfoView, TokenInfoView};
pub use wizard_view::{MarkdownWizardView, PromptContext, WizardView};
