use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Fixed set of spending categories offered by the app.
///
/// Declaration order is the canonical enumeration order and serves as the
/// tie-break when breakdown entries have equal sums.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Category {
    FoodAndDrinks,
    Shopping,
    Transportation,
    Bills,
    Entertainment,
    Health,
    Education,
    Salary,
    Other,
}

impl Category {
    /// Every category in canonical order.
    pub const ALL: [Category; 9] = [
        Category::FoodAndDrinks,
        Category::Shopping,
        Category::Transportation,
        Category::Bills,
        Category::Entertainment,
        Category::Health,
        Category::Education,
        Category::Salary,
        Category::Other,
    ];

    /// Human-readable label as shown in the category picker.
    pub fn label(self) -> &'static str {
        match self {
            Category::FoodAndDrinks => "Food & Drinks",
            Category::Shopping => "Shopping",
            Category::Transportation => "Transportation",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Salary => "Salary",
            Category::Other => "Other",
        }
    }

    /// Whether the category denotes earnings or spending.
    ///
    /// Presentation metadata only: a transaction's expense/income split is
    /// decided by its amount sign, not its category.
    pub fn kind(self) -> CategoryKind {
        match self {
            Category::Salary => CategoryKind::Income,
            _ => CategoryKind::Expense,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parses a picker label, case-insensitively. `"Income"` is accepted as
    /// an alias for [`Category::Salary`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("income") {
            return Ok(Category::Salary);
        }
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// Supported category types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryKind {
    Expense,
    Income,
}
