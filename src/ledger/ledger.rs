use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bill::Bill;
use super::budget::{AdjustDirection, Budget, BudgetStatus};
use super::category::Category;
use super::period::TimeRange;
use super::transaction::{Transaction, TransactionId};
use crate::errors::ValidationError;
use crate::money::Money;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Authoritative ledger state: the append-only transaction log, the budget
/// ceiling, and the upcoming-bill list.
///
/// The core is single-threaded and I/O-free. When embedded in a concurrent
/// host, mutating commands must be serialized by the host (one dispatch
/// queue or a mutex); read queries are pure and may run freely between
/// mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub name: String,
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    bills: Vec<Bill>,
    #[serde(default)]
    budget: Budget,
    next_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            transactions: Vec::new(),
            bills: Vec::new(),
            budget: Budget::default(),
            next_id: 1,
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Records a new transaction and returns the stored immutable record.
    ///
    /// Rejects blank titles and zero amounts; a rejected command leaves the
    /// ledger untouched, including the identifier counter.
    pub fn add_transaction(
        &mut self,
        title: impl Into<String>,
        category: Category,
        amount: Money,
        timestamp: DateTime<Utc>,
    ) -> Result<Transaction, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if amount.is_zero() {
            return Err(ValidationError::ZeroAmount);
        }
        let id = TransactionId(self.next_id);
        self.next_id += 1;
        let transaction = Transaction::new(id, title, category, amount, timestamp);
        self.transactions.push(transaction.clone());
        self.touch();
        debug!(id = id.0, %amount, category = %category, "transaction recorded");
        Ok(transaction)
    }

    /// Transactions whose timestamp falls within `window`, newest first
    /// (equal timestamps break toward the later identifier). `None` means
    /// the whole ledger.
    pub fn transactions_in(&self, window: Option<&TimeRange>) -> Vec<&Transaction> {
        let mut selected: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|txn| window.map_or(true, |range| range.contains(txn.timestamp)))
            .collect();
        selected.sort_unstable_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.id.cmp(&a.id))
        });
        selected
    }

    /// The `count` most recent transactions.
    pub fn recent(&self, count: usize) -> Vec<&Transaction> {
        let mut newest = self.transactions_in(None);
        newest.truncate(count);
        newest
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Replaces the budget ceiling. Rejects negative amounts.
    pub fn set_initial_budget(&mut self, amount: Money) -> Result<(), ValidationError> {
        self.budget.set_initial(amount)?;
        self.touch();
        debug!(ceiling = %amount, "budget ceiling set");
        Ok(())
    }

    /// Adjusts the budget ceiling, clamping at zero.
    pub fn adjust_budget(&mut self, delta: Money, direction: AdjustDirection) {
        self.budget.adjust(delta, direction);
        self.touch();
        debug!(ceiling = %self.budget.ceiling(), "budget ceiling adjusted");
    }

    /// Budget status for a given in-period expense total.
    pub fn budget_status(&self, spent: Money) -> BudgetStatus {
        self.budget.status(spent)
    }

    /// Registers an upcoming bill and returns the stored record.
    pub fn add_bill(
        &mut self,
        title: impl Into<String>,
        amount: Money,
        due_date: NaiveDate,
    ) -> Result<Bill, ValidationError> {
        let bill = Bill::new(title, amount, due_date)?;
        self.bills.push(bill.clone());
        self.touch();
        Ok(bill)
    }

    /// Bills due within `horizon_days` of `reference` (inclusive), soonest
    /// first. Past-due bills are excluded.
    pub fn upcoming_bills(&self, reference: NaiveDate, horizon_days: i64) -> Vec<&Bill> {
        let mut due: Vec<&Bill> = self
            .bills
            .iter()
            .filter(|bill| {
                let days = bill.days_until(reference);
                (0..=horizon_days).contains(&days)
            })
            .collect();
        due.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.title.cmp(&b.title)));
        due
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
