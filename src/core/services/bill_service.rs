//! Commands and queries for the upcoming-bill rail.

use chrono::NaiveDate;

use crate::core::services::ServiceResult;
use crate::ledger::{Bill, Ledger};
use crate::money::Money;

pub struct BillService;

impl BillService {
    /// Registers an upcoming bill and returns the stored record.
    pub fn add(
        ledger: &mut Ledger,
        title: impl Into<String>,
        amount: Money,
        due_date: NaiveDate,
    ) -> ServiceResult<Bill> {
        Ok(ledger.add_bill(title, amount, due_date)?)
    }

    /// Bills due within the horizon, soonest first.
    pub fn upcoming<'a>(
        ledger: &'a Ledger,
        reference: NaiveDate,
        horizon_days: i64,
    ) -> Vec<&'a Bill> {
        ledger.upcoming_bills(reference, horizon_days)
    }
}
