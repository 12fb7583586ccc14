use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::money::Money;

/// A known upcoming obligation shown on the dashboard bill rail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bill {
    pub title: String,
    pub amount: Money,
    pub due_date: NaiveDate,
}

impl Bill {
    pub(crate) fn new(
        title: impl Into<String>,
        amount: Money,
        due_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if amount <= Money::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        Ok(Self {
            title,
            amount,
            due_date,
        })
    }

    /// Days from `reference` until the due date; negative when past due.
    pub fn days_until(&self, reference: NaiveDate) -> i64 {
        (self.due_date - reference).num_days()
    }
}
