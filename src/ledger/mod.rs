//! Ledger domain models: transactions, categories, periods, budget, bills.

pub mod bill;
pub mod budget;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod period;
pub mod transaction;

pub use bill::Bill;
pub use budget::{AdjustDirection, Budget, BudgetStatus};
pub use category::{Category, CategoryKind};
pub use ledger::Ledger;
pub use period::{Period, TimeRange};
pub use transaction::{Transaction, TransactionId};
