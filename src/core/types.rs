use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

pub type OrderId = u64;
pub type OrderItemId = u64;
pub type ModificationId = u64;
pub type MenuId = u32;
pub type EmployeeId = u32;

/// Currency amount with two decimal places, backed by `rust_decimal`.
///
/// Line-item prices are computed in floating point and truncated into
/// `Money`, after which all sums are exact decimal arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Truncate a floating point amount to cents, toward zero.
    ///
    /// The amount is scaled to cents in `f64` first so values such as
    /// `8.7` (stored as `8.6999..`) truncate to `8.69`.
    pub fn truncate_from(amount: f64) -> Self {
        Self::from_cents((amount * 100.0) as i64)
    }

    pub fn as_f64(self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// The amount without trailing zeros: `1`, `0.25`, `6.5`
    pub fn normalized(self) -> Decimal {
        self.0.normalize()
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

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.map(|money| money.0).sum())
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Shortest decimal form with at least one fractional digit: `6.05`, `6.0`, `12.5`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.normalized();
        if normalized.scale() == 0 {
            write!(f, "{}.0", normalized)
        } else {
            write!(f, "{}", normalized)
        }
    }
}
