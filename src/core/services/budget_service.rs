//! Commands for managing the budget ceiling.

use crate::core::services::ServiceResult;
use crate::ledger::{AdjustDirection, Ledger};
use crate::money::Money;

/// Validated commands over the ledger's budget ceiling.
pub struct BudgetService;

impl BudgetService {
    /// Sets the ceiling. Rejects negative amounts.
    pub fn set_initial(ledger: &mut Ledger, amount: Money) -> ServiceResult<()> {
        Ok(ledger.set_initial_budget(amount)?)
    }

    /// Adjusts the ceiling by `delta` in the given direction, clamping at
    /// zero. Repeated identical calls compound.
    pub fn adjust(ledger: &mut Ledger, delta: Money, direction: AdjustDirection) {
        ledger.adjust_budget(delta, direction);
    }
}
