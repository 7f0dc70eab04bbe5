pub mod category_service;
pub mod dream_service;
pub mod settings_service;
pub mod summary_service;
pub mod transaction_service;

pub use category_service::{AddCategoryOutcome, CategoryService};
pub use dream_service::DreamService;
pub use settings_service::SettingsService;
pub use summary_service::{
    AnalysisView, CategorySpend, DashboardView, HistoryView, SummaryService, TypeTotals,
};
pub use transaction_service::{TransactionDraft, TransactionService};
