use chrono::NaiveDate;
use nestegg::core::services::TransactionDraft;
use nestegg::core::{FixedClock, Session};
use nestegg::domain::TransactionKind;
use nestegg::storage::MemoryStore;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A session over an empty in-memory store, pinned to `today`.
pub fn session_at(today: NaiveDate) -> Session {
    Session::open(Box::new(MemoryStore::new()), Box::new(FixedClock(today)))
        .expect("open session over memory store")
}

pub fn expense(amount: f64, category: &str, on: NaiveDate) -> TransactionDraft {
    TransactionDraft {
        kind: TransactionKind::Expense,
        amount,
        category: category.to_string(),
        note: String::new(),
        date: Some(on),
    }
}

pub fn income(amount: f64, on: NaiveDate) -> TransactionDraft {
    TransactionDraft {
        kind: TransactionKind::Income,
        amount,
        category: "Income".to_string(),
        note: String::new(),
        date: Some(on),
    }
}
