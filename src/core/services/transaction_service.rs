//! Command/query surface for ledger transactions.

use chrono::{DateTime, Utc};

use crate::core::services::ServiceResult;
use crate::ledger::{Category, Ledger, Period, Transaction};
use crate::money::Money;

/// Validated commands and queries over the transaction log.
pub struct TransactionService;

impl TransactionService {
    /// Records a new transaction and returns the stored immutable record.
    pub fn add(
        ledger: &mut Ledger,
        title: impl Into<String>,
        category: Category,
        amount: Money,
        timestamp: DateTime<Utc>,
    ) -> ServiceResult<Transaction> {
        Ok(ledger.add_transaction(title, category, amount, timestamp)?)
    }

    /// Variant of [`Self::add`] taking the raw category label from the
    /// add-transaction form; unknown labels are rejected.
    pub fn add_labeled(
        ledger: &mut Ledger,
        title: impl Into<String>,
        category_label: &str,
        amount: Money,
        timestamp: DateTime<Utc>,
    ) -> ServiceResult<Transaction> {
        let category: Category = category_label.parse()?;
        Self::add(ledger, title, category, amount, timestamp)
    }

    /// Transactions within the named period, newest first.
    pub fn list<'a>(
        ledger: &'a Ledger,
        period: Period,
        reference: DateTime<Utc>,
    ) -> Vec<&'a Transaction> {
        let window = period.resolve(reference);
        ledger.transactions_in(Some(&window))
    }

    /// The `count` most recent transactions regardless of period.
    pub fn recent(ledger: &Ledger, count: usize) -> Vec<&Transaction> {
        ledger.recent(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::ServiceError;
    use chrono::TimeZone;

    fn instant(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, d, h, 0, 0).unwrap()
    }

    #[test]
    fn add_labeled_accepts_picker_labels() {
        let mut ledger = Ledger::new("Labels");
        let txn = TransactionService::add_labeled(
            &mut ledger,
            "Grocery Shopping",
            "Food & Drinks",
            Money::from_cents(-8500),
            instant(14, 9),
        )
        .expect("label is valid");
        assert_eq!(txn.category, Category::FoodAndDrinks);
    }

    #[test]
    fn add_labeled_rejects_unknown_labels() {
        let mut ledger = Ledger::new("Labels");
        let err = TransactionService::add_labeled(
            &mut ledger,
            "Mystery",
            "Gambling",
            Money::from_major(-5),
            instant(14, 9),
        )
        .expect_err("unknown label must fail");
        assert!(
            matches!(err, ServiceError::Validation(ref inner) if inner.to_string().contains("Gambling")),
            "unexpected error: {err:?}"
        );
        assert_eq!(ledger.transaction_count(), 0);
    }

    #[test]
    fn list_scopes_to_the_resolved_period() {
        let mut ledger = Ledger::new("Periods");
        TransactionService::add(
            &mut ledger,
            "Old Purchase",
            Category::Shopping,
            Money::from_major(-20),
            instant(1, 10),
        )
        .expect("valid");
        TransactionService::add(
            &mut ledger,
            "Coffee",
            Category::FoodAndDrinks,
            Money::from_cents(-450),
            instant(15, 8),
        )
        .expect("valid");

        let today = TransactionService::list(&ledger, Period::Today, instant(15, 20));
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].title, "Coffee");

        let all = TransactionService::list(&ledger, Period::All, instant(15, 20));
        assert_eq!(all.len(), 2);
    }
}
