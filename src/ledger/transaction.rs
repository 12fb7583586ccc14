use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::money::Money;

/// Store-assigned identifier, strictly increasing within a ledger.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

/// A single recorded ledger entry, immutable once stored.
///
/// The amount sign carries the meaning: negative is an expense, positive is
/// income. A zero amount is rejected before a transaction ever exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub title: String,
    pub category: Category,
    pub amount: Money,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(
        id: TransactionId,
        title: String,
        category: Category,
        amount: Money,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            category,
            amount,
            timestamp,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    pub fn is_income(&self) -> bool {
        !self.amount.is_negative()
    }
}
