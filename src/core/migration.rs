//! Defaulting merge applied to every loaded document.
//!
//! The persisted format has no version gate for older documents; schema
//! evolution is handled by filling absent fields from defaults on load.
//! The merge is total over the known structure and leaves keys it does
//! not know about in place.

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::{AppState, Transaction};
use crate::errors::BudgetError;

const BALANCE_TOLERANCE: f64 = 1e-6;

/// Shallow-merges `defaults` into `document`, recursing wherever both
/// sides are objects: absent keys are filled in, present values win,
/// and `null` counts as absent. Keys the defaults do not know about are
/// preserved untouched.
pub fn merge_defaults(document: Value, defaults: Value) -> Value {
    match (document, defaults) {
        (Value::Object(mut merged), Value::Object(default_fields)) => {
            for (key, default_value) in default_fields {
                match merged.remove(&key) {
                    Some(existing) => {
                        merged.insert(key, merge_defaults(existing, default_value));
                    }
                    None => {
                        merged.insert(key, default_value);
                    }
                }
            }
            Value::Object(merged)
        }
        (Value::Null, default_value) => default_value,
        (existing, _) => existing,
    }
}

/// Turns a raw persisted document into a fully-populated state: merge
/// with the defaults for `today`, then deserialize. A document whose
/// present fields do not fit the schema is a `Corrupt` error; the
/// caller decides whether that means a full reset.
pub fn state_from_document(document: Value, today: NaiveDate) -> Result<AppState, BudgetError> {
    let defaults = serde_json::to_value(AppState::bootstrap(today))?;
    let merged = merge_defaults(document, defaults);
    Ok(serde_json::from_value(merged)?)
}

/// Consistency report for a loaded document. Findings are surfaced as
/// log warnings, never as load failures: the stored balance is trusted
/// even when it drifts from the transaction total.
pub fn state_warnings(state: &AppState) -> Vec<String> {
    let mut warnings = Vec::new();
    let derived: f64 = state.transactions.iter().map(Transaction::signed_amount).sum();
    if (derived - state.balance).abs() > BALANCE_TOLERANCE {
        warnings.push(format!(
            "stored balance {} diverges from transaction total {}",
            state.balance, derived
        ));
    }
    for txn in state.transactions.iter().filter(|txn| txn.is_expense()) {
        if !state.settings.categories.iter().any(|c| c == &txn.category) {
            warnings.push(format!(
                "transaction {} references unknown category `{}`",
                txn.id, txn.category
            ));
        }
    }
    warnings
}
