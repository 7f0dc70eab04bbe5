#![doc(test(attr(deny(warnings))))]

//! Nestegg offers the ledger, budget-health, and savings-goal primitives
//! behind a personal finance tracker: an append-only transaction record
//! with a running balance, calendar-window aggregation, tiered budget
//! warnings, and goal progress, persisted as a single JSON document.

pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Nestegg tracing initialized.");
    });
}
