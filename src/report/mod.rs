//! On-demand aggregation feeding the dashboard breakdown.
//!
//! Summaries are recomputed from the transaction set on every call and never
//! cached across mutations; a stale aggregate would render totals that
//! disagree with the list below them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ledger::{Category, Transaction};
use crate::money::{self, Money};

/// Per-category share of total expense within the queried window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBreakdownEntry {
    pub category: Category,
    /// Absolute sum of this category's expense transactions.
    pub amount: Money,
    /// Share of total expense, one decimal place, rounded half-to-even.
    /// Independent rounding means displayed percentages may sum to
    /// 99.9–100.1; callers must not assert an exact 100.
    pub percentage: f64,
}

/// Totals and breakdown derived from one pass over a transaction set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// Absolute sum of all negative-amount transactions.
    pub total_expense: Money,
    /// Sum of all positive-amount transactions.
    pub total_income: Money,
    /// Sorted by amount descending, ties by category enumeration order.
    pub by_category: Vec<CategoryBreakdownEntry>,
}

impl Summary {
    pub fn empty() -> Self {
        Self {
            total_expense: Money::ZERO,
            total_income: Money::ZERO,
            by_category: Vec::new(),
        }
    }
}

/// Aggregates a transaction set into expense/income totals and the
/// per-category expense breakdown.
///
/// Only expense transactions (negative amounts) contribute to the breakdown;
/// income feeds `total_income` alone.
pub fn aggregate<'a, I>(transactions: I) -> Summary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut total_expense = Money::ZERO;
    let mut total_income = Money::ZERO;
    let mut sums: BTreeMap<Category, Money> = BTreeMap::new();
    for txn in transactions {
        if txn.amount.is_negative() {
            let value = txn.amount.abs();
            total_expense += value;
            *sums.entry(txn.category).or_default() += value;
        } else {
            total_income += txn.amount;
        }
    }

    // The map iterates in enumeration order; the stable sort preserves that
    // order for equal sums.
    let mut by_category: Vec<CategoryBreakdownEntry> = sums
        .into_iter()
        .map(|(category, amount)| CategoryBreakdownEntry {
            category,
            amount,
            percentage: money::percent_of(amount, total_expense),
        })
        .collect();
    by_category.sort_by(|a, b| b.amount.cmp(&a.amount));

    Summary {
        total_expense,
        total_income,
        by_category,
    }
}
