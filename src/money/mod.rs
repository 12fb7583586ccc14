//! Exact fixed-point money arithmetic and display formatting.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// A signed amount in minor units (cents) of the ledger currency.
///
/// Backed by an `i64`, which spans roughly ±92 quadrillion dollars; overflow
/// is unreachable at personal-ledger volumes, so arithmetic is plain integer
/// addition and subtraction with no rounding anywhere. Negative amounts are
/// expenses, positive amounts income.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Builds an amount from whole currency units.
    pub const fn from_major(units: i64) -> Self {
        Money(units * 100)
    }

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn abs(self) -> Money {
        Money(self.0.abs())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Renders as `$1,234.56`, with a `-` prefix only for negative amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.0.abs();
        let grouped = group_digits(cents / 100);
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, grouped, cents % 100)
    }
}

fn group_digits(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Percentage of `total` represented by `part`, rounded half-to-even to one
/// decimal place. Zero when `total` is zero.
///
/// The rounding happens in integer tenths-of-a-percent, so equal inputs
/// always produce identical output regardless of float environment.
pub fn percent_of(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    percent_tenths(part.cents() as i128, total.cents() as i128) as f64 / 10.0
}

fn percent_tenths(part: i128, total: i128) -> i128 {
    debug_assert!(part >= 0 && total > 0);
    let numer = part * 1000;
    let quot = numer / total;
    let rem = numer % total;
    match (rem * 2).cmp(&total) {
        Ordering::Greater => quot + 1,
        Ordering::Equal if quot % 2 != 0 => quot + 1,
        _ => quot,
    }
}
