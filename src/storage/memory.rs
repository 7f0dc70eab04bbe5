use std::sync::Mutex;

use serde_json::Value;

use crate::domain::AppState;
use crate::errors::BudgetError;

use super::{Result, StateStore};

/// Keeps the document in process memory. Used when no persistent
/// backend is available, and by tests that need a session without a
/// filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Option<Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an existing raw document.
    pub fn with_document(document: Value) -> Self {
        Self {
            document: Mutex::new(Some(document)),
        }
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<Value>> {
        let guard = self
            .document
            .lock()
            .map_err(|_| BudgetError::Storage("memory store poisoned".into()))?;
        Ok(guard.clone())
    }

    fn save(&self, state: &AppState) -> Result<()> {
        let document =
            serde_json::to_value(state).map_err(|err| BudgetError::Storage(err.to_string()))?;
        let mut guard = self
            .document
            .lock()
            .map_err(|_| BudgetError::Storage("memory store poisoned".into()))?;
        *guard = Some(document);
        Ok(())
    }
}
