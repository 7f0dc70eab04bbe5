use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{AppState, Transaction, TransactionKind};
use crate::errors::BudgetError;

/// Raw input for a new ledger entry, before validation. `date` stays
/// optional here because the form it mirrors can be submitted without
/// one.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub note: String,
    pub date: Option<NaiveDate>,
}

pub struct TransactionService;

impl TransactionService {
    /// Validates the draft, appends it to the record, and folds the
    /// amount into the running balance. The amount check runs before
    /// the date check, so a draft failing both reports the amount. On
    /// any validation failure nothing is mutated.
    pub fn record(
        state: &mut AppState,
        draft: TransactionDraft,
    ) -> Result<Transaction, BudgetError> {
        if !(draft.amount.is_finite() && draft.amount > 0.0) {
            return Err(BudgetError::Validation(
                "amount must be a number greater than zero".into(),
            ));
        }
        let date = draft
            .date
            .ok_or_else(|| BudgetError::Validation("date is required".into()))?;
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            kind: draft.kind,
            amount: draft.amount,
            category: draft.category,
            note: draft.note.trim().to_string(),
            date,
        };
        state.apply(transaction.clone());
        Ok(transaction)
    }
}
