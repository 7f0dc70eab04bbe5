use thiserror::Error;

/// Error type that captures every failure the core can report.
///
/// None of these are fatal to the caller: validation errors leave state
/// untouched, and persistence errors leave the in-memory state ahead of
/// the document on disk rather than rolling it back.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("category `{0}` already exists")]
    DuplicateCategory(String),
    #[error("at least one category must remain")]
    LastCategory,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt state document: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("storage error: {0}")]
    Storage(String),
}
