//! Derived dashboard queries: breakdowns and budget status.

use chrono::{DateTime, Utc};

use crate::ledger::{BudgetStatus, Ledger, Period};
use crate::report::{self, Summary};

/// Read-only aggregation queries over a ledger.
///
/// Every call recomputes from the transaction log; nothing is cached, so a
/// summary always reflects the latest mutations.
pub struct SummaryService;

impl SummaryService {
    /// Expense/income totals and category breakdown for the period.
    pub fn aggregate(ledger: &Ledger, period: Period, reference: DateTime<Utc>) -> Summary {
        let window = period.resolve(reference);
        report::aggregate(ledger.transactions_in(Some(&window)))
    }

    /// Budget status where "spent" is the period's total expense.
    pub fn budget_status(
        ledger: &Ledger,
        period: Period,
        reference: DateTime<Utc>,
    ) -> BudgetStatus {
        let spent = Self::aggregate(ledger, period, reference).total_expense;
        ledger.budget_status(spent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Category;
    use crate::money::Money;
    use chrono::TimeZone;

    fn instant(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, d, h, 0, 0).unwrap()
    }

    #[test]
    fn budget_status_uses_the_window_expense_total() {
        let mut ledger = Ledger::new("Status");
        ledger.set_initial_budget(Money::from_major(3500)).expect("valid");
        ledger
            .add_transaction("Rent", Category::Bills, Money::from_major(-2840), instant(5, 9))
            .expect("valid");
        // Outside the month window; must not count toward September.
        ledger
            .add_transaction(
                "August Rent",
                Category::Bills,
                Money::from_major(-2840),
                Utc.with_ymd_and_hms(2024, 8, 5, 9, 0, 0).unwrap(),
            )
            .expect("valid");

        let status = SummaryService::budget_status(&ledger, Period::Month, instant(15, 12));
        assert_eq!(status.ceiling, Money::from_major(3500));
        assert_eq!(status.remaining, Money::from_major(660));
        assert_eq!(status.percentage_consumed, 81.1);
    }

    #[test]
    fn aggregate_reflects_mutations_immediately() {
        let mut ledger = Ledger::new("Fresh");
        let before = SummaryService::aggregate(&ledger, Period::All, instant(15, 12));
        assert_eq!(before.total_expense, Money::ZERO);

        ledger
            .add_transaction("Coffee", Category::FoodAndDrinks, Money::from_cents(-450), instant(15, 8))
            .expect("valid");
        let after = SummaryService::aggregate(&ledger, Period::All, instant(15, 12));
        assert_eq!(after.total_expense, Money::from_cents(450));
    }
}
