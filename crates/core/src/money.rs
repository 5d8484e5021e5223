//! Fixed-point money amounts.

use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Amount in the smallest currency unit (e.g., cents).
///
/// Signed: costs above the selling price produce negative profit, and negative
/// prices are accepted as given.
///
/// All arithmetic saturates at `i64::MIN` / `i64::MAX` instead of overflowing,
/// so totals over extreme inputs clamp to the nearest bound.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(i64::MAX);
    pub const MIN: Money = Money(i64::MIN);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Scale a per-unit amount by a sold quantity (saturating).
    pub const fn times(self, quantity: i64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }
}

impl ValueObject for Money {}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(self.0.saturating_neg())
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Self::Output {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arithmetic_stays_in_minor_units() {
        let cost = Money::from_cents(20);
        let price = Money::from_cents(100);

        assert_eq!(price - cost, Money::from_cents(80));
        assert_eq!((price - cost) * 2, Money::from_cents(160));
        assert_eq!(cost - price, Money::from_cents(-80));
        assert_eq!(-cost, Money::from_cents(-20));
    }

    #[test]
    fn arithmetic_saturates_at_the_bounds() {
        let huge = Money::from_cents(i64::MAX / 10);

        assert_eq!(huge.times(100), Money::MAX);
        assert_eq!(huge.times(-100), Money::MIN);
        assert_eq!(Money::MAX + Money::from_cents(1), Money::MAX);
        assert_eq!(Money::MIN - Money::from_cents(1), Money::MIN);
        assert_eq!(-Money::MIN, Money::MAX);
        let amounts = [Money::MAX, Money::MAX, Money::from_cents(-5)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::MAX - Money::from_cents(5));
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        let none: Vec<Money> = Vec::new();
        assert_eq!(none.iter().sum::<Money>(), Money::ZERO);
    }

    #[test]
    fn serializes_as_bare_cents() {
        let json = serde_json::to_string(&Money::from_cents(-45)).unwrap();
        assert_eq!(json, "-45");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: scaling distributes over a sum of quantities.
        #[test]
        fn times_distributes_over_quantities(
            unit in -10_000i64..10_000i64,
            a in 0i64..10_000i64,
            b in 0i64..10_000i64
        ) {
            let unit = Money::from_cents(unit);
            prop_assert_eq!(unit.times(a) + unit.times(b), unit.times(a + b));
        }
    }
}
