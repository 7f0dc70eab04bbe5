pub mod json_backend;
pub mod memory;

use serde_json::Value;

use crate::{domain::AppState, errors::BudgetError};

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Abstraction over the persistence gateway holding the single state
/// document.
pub trait StateStore: Send + Sync {
    /// Returns the raw persisted document, or `None` when nothing has
    /// been saved yet. Unparseable contents are a `Corrupt` error, not
    /// a missing document.
    fn load(&self) -> Result<Option<Value>>;

    /// Replaces the persisted document wholesale.
    fn save(&self, state: &AppState) -> Result<()>;
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
