#![doc(test(attr(deny(warnings))))]

//! Expense Core provides the ledger, reporting, and budgeting primitives
//! behind an expense-tracking app: exact money arithmetic, an append-only
//! transaction store, named-period filtering, category breakdowns, and a
//! monthly budget tracker.

pub mod core;
pub mod errors;
pub mod ledger;
pub mod money;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
