use chrono::NaiveDate;
use tracing::{info, warn};

use crate::core::clock::Clock;
use crate::core::migration::{state_from_document, state_warnings};
use crate::core::services::{
    AddCategoryOutcome, AnalysisView, CategoryService, DashboardView, DreamService, HistoryView,
    SettingsService, SummaryService, TransactionDraft, TransactionService,
};
use crate::domain::{AppState, Dream, Settings, TimeFilter, Transaction, WindowBounds};
use crate::errors::BudgetError;
use crate::storage::StateStore;

/// How the session obtained its initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A persisted document was found and loaded.
    Loaded,
    /// No document existed yet; defaults were written.
    FirstRun,
    /// The document failed to parse; state was reset to defaults and
    /// re-saved. Corrupt documents are discarded whole, never patched.
    ResetAfterCorruption,
}

/// Facade that owns the in-memory state and coordinates validation,
/// mutation, and persistence. Each operation runs to completion:
/// validate, mutate, save. Mutations are applied before the save, so a
/// failed save leaves the session consistent in memory and only the
/// document on disk stale.
pub struct Session {
    state: AppState,
    store: Box<dyn StateStore>,
    clock: Box<dyn Clock>,
    load_outcome: LoadOutcome,
}

impl Session {
    /// Loads the persisted document through `store`, falling back to
    /// defaults on a missing or corrupt document. Both fallback paths
    /// persist the fresh defaults right away; if that save fails the
    /// session still opens and runs in memory only.
    pub fn open(store: Box<dyn StateStore>, clock: Box<dyn Clock>) -> Result<Self, BudgetError> {
        let today = clock.today();
        let (state, load_outcome) = match store.load() {
            Ok(Some(document)) => match state_from_document(document, today) {
                Ok(state) => {
                    for warning in state_warnings(&state) {
                        warn!("{warning}");
                    }
                    (state, LoadOutcome::Loaded)
                }
                Err(err) => {
                    warn!("discarding corrupt state document: {err}");
                    (AppState::bootstrap(today), LoadOutcome::ResetAfterCorruption)
                }
            },
            Ok(None) => (AppState::bootstrap(today), LoadOutcome::FirstRun),
            Err(BudgetError::Corrupt(err)) => {
                warn!("discarding corrupt state document: {err}");
                (AppState::bootstrap(today), LoadOutcome::ResetAfterCorruption)
            }
            Err(err) => return Err(err),
        };
        let session = Self {
            state,
            store,
            clock,
            load_outcome,
        };
        if session.load_outcome != LoadOutcome::Loaded {
            if let Err(err) = session.store.save(&session.state) {
                warn!("initial save failed, continuing in memory: {err}");
            }
        }
        Ok(session)
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    // --- mutations -----------------------------------------------------

    /// Records a new transaction and returns it. This is the only way
    /// transactions enter the ledger; there is no update or delete.
    pub fn record_transaction(
        &mut self,
        draft: TransactionDraft,
    ) -> Result<Transaction, BudgetError> {
        let transaction = TransactionService::record(&mut self.state, draft)?;
        self.persist()?;
        Ok(transaction)
    }

    pub fn set_dream(
        &mut self,
        title: &str,
        target_amount: f64,
        target_date: NaiveDate,
    ) -> Result<(), BudgetError> {
        DreamService::set(&mut self.state.dream, title, target_amount, target_date)?;
        self.persist()
    }

    pub fn set_monthly_limit(&mut self, limit: f64) -> Result<(), BudgetError> {
        SettingsService::set_monthly_limit(&mut self.state.settings, limit)?;
        self.persist()
    }

    pub fn set_motivation(&mut self, warning: &str, danger: &str) -> Result<(), BudgetError> {
        SettingsService::set_motivation(&mut self.state.settings, warning, danger);
        self.persist()
    }

    pub fn set_notification(&mut self, enabled: bool, time: &str) -> Result<(), BudgetError> {
        SettingsService::set_notification(&mut self.state.settings, enabled, time);
        self.persist()
    }

    pub fn add_category(&mut self, name: &str) -> Result<AddCategoryOutcome, BudgetError> {
        let outcome = CategoryService::add(&mut self.state.settings, name)?;
        if outcome == AddCategoryOutcome::Added {
            self.persist()?;
        }
        Ok(outcome)
    }

    pub fn delete_category(&mut self, index: usize) -> Result<String, BudgetError> {
        let removed = CategoryService::delete(&mut self.state.settings, index)?;
        self.persist()?;
        Ok(removed)
    }

    /// Discards everything and persists fresh defaults.
    pub fn reset(&mut self) -> Result<(), BudgetError> {
        info!("resetting state to defaults");
        self.state = AppState::bootstrap(self.clock.today());
        self.persist()
    }

    // --- read surface --------------------------------------------------

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn balance(&self) -> f64 {
        self.state.balance
    }

    pub fn dream(&self) -> &Dream {
        &self.state.dream
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn window_bounds(&self) -> WindowBounds {
        WindowBounds::at(self.clock.today())
    }

    pub fn dashboard(&self) -> DashboardView {
        SummaryService::dashboard(&self.state, &self.window_bounds())
    }

    pub fn history(&self, filter: TimeFilter) -> HistoryView {
        SummaryService::history(&self.state, &self.window_bounds(), filter)
    }

    pub fn analysis(&self, filter: TimeFilter) -> AnalysisView {
        SummaryService::analysis(&self.state, &self.window_bounds(), filter)
    }

    /// A save failure is reported but never rolled back: the in-memory
    /// mutation stands and the error only says the document on disk is
    /// stale.
    fn persist(&self) -> Result<(), BudgetError> {
        self.store.save(&self.state).map_err(|err| {
            warn!("failed to persist state: {err}");
            err
        })
    }
}
