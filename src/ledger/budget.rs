use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::money::{self, Money};

/// Direction of a budget-ceiling adjustment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AdjustDirection {
    Add,
    Subtract,
}

/// The user's intended spend ceiling for the tracked month.
///
/// The ceiling is never negative: adjustments that would cross zero clamp
/// there instead of erroring, because a negative budget has no meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Budget {
    ceiling: Money,
}

impl Budget {
    pub fn ceiling(&self) -> Money {
        self.ceiling
    }

    /// Replaces the ceiling. Rejects negative amounts.
    pub fn set_initial(&mut self, amount: Money) -> Result<(), ValidationError> {
        if amount.is_negative() {
            return Err(ValidationError::NegativeBudget);
        }
        self.ceiling = amount;
        Ok(())
    }

    /// Applies a delta to the ceiling. Adjustments are commands, not
    /// upserts: repeating the same delta compounds.
    pub fn adjust(&mut self, delta: Money, direction: AdjustDirection) {
        let next = match direction {
            AdjustDirection::Add => self.ceiling + delta,
            AdjustDirection::Subtract => self.ceiling - delta,
        };
        self.ceiling = next.max(Money::ZERO);
    }

    /// Derives spend status against the given in-period expense total.
    ///
    /// `percentage_consumed` is capped at 100 even when overspent; callers
    /// detect overspend by comparing `spent` with the ceiling.
    pub fn status(&self, spent: Money) -> BudgetStatus {
        let percentage_consumed = if self.ceiling.is_zero() {
            0.0
        } else {
            money::percent_of(spent.abs(), self.ceiling).min(100.0)
        };
        BudgetStatus {
            ceiling: self.ceiling,
            remaining: (self.ceiling - spent).max(Money::ZERO),
            percentage_consumed,
        }
    }
}

/// Snapshot of budget consumption for the active window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetStatus {
    pub ceiling: Money,
    pub remaining: Money,
    pub percentage_consumed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_initial_rejects_negative_amounts() {
        let mut budget = Budget::default();
        let err = budget
            .set_initial(Money::from_cents(-1))
            .expect_err("negative budget must be rejected");
        assert_eq!(err, ValidationError::NegativeBudget);
        assert_eq!(budget.ceiling(), Money::ZERO);
    }

    #[test]
    fn repeated_adjustments_compound() {
        let mut budget = Budget::default();
        budget.set_initial(Money::from_major(100)).expect("valid");
        budget.adjust(Money::from_major(10), AdjustDirection::Add);
        budget.adjust(Money::from_major(10), AdjustDirection::Add);
        assert_eq!(budget.ceiling(), Money::from_major(120));
    }

    #[test]
    fn subtract_clamps_at_zero() {
        let mut budget = Budget::default();
        budget.set_initial(Money::from_major(300)).expect("valid");
        budget.adjust(Money::from_major(500), AdjustDirection::Subtract);
        assert_eq!(budget.ceiling(), Money::ZERO);
    }

    #[test]
    fn status_with_zero_ceiling_reports_zero_percent() {
        let budget = Budget::default();
        let status = budget.status(Money::from_major(250));
        assert_eq!(status.percentage_consumed, 0.0);
        assert_eq!(status.remaining, Money::ZERO);
    }

    #[test]
    fn status_caps_percentage_at_one_hundred() {
        let mut budget = Budget::default();
        budget.set_initial(Money::from_major(100)).expect("valid");
        let status = budget.status(Money::from_major(180));
        assert_eq!(status.percentage_consumed, 100.0);
        assert_eq!(status.remaining, Money::ZERO);
    }

    #[test]
    fn status_reports_remaining_and_consumption() {
        let mut budget = Budget::default();
        budget.set_initial(Money::from_major(3500)).expect("valid");
        let status = budget.status(Money::from_major(2840));
        assert_eq!(status.remaining, Money::from_major(660));
        assert_eq!(status.percentage_consumed, 81.1);
    }
}
