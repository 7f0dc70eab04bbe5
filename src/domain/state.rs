use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{dream::Dream, settings::Settings, transaction::Transaction};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The whole persisted document: running balance, savings goal,
/// configuration, and the append-only transaction record. Loaded
/// wholesale, saved wholesale after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    pub balance: f64,
    pub dream: Dream,
    pub settings: Settings,
    pub transactions: Vec<Transaction>,
    /// Documents from before this field existed load without it and are
    /// stamped with the current version by the defaulting merge.
    #[serde(default)]
    pub schema_version: u8,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppState {
    /// Fresh state for a first run. The dream target date defaults to
    /// today, which is why defaults are built from a date rather than
    /// `Default`.
    pub fn bootstrap(today: NaiveDate) -> Self {
        Self {
            balance: 0.0,
            dream: Dream::placeholder(today),
            settings: Settings::default(),
            transactions: Vec::new(),
            schema_version: CURRENT_SCHEMA_VERSION,
            extra: Map::new(),
        }
    }

    /// Appends `transaction` and folds its amount into the running
    /// balance in the same step, keeping the two consistent.
    pub fn apply(&mut self, transaction: Transaction) {
        self.balance += transaction.signed_amount();
        self.transactions.push(transaction);
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}
