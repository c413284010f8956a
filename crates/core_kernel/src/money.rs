//! Money type with precise decimal arithmetic
//!
//! This module provides a type-safe representation of rupee amounts using
//! rust_decimal for precise calculations without floating-point errors.
//! Bills are single-currency: everything is denominated in Indian rupees
//! with paise as the minor unit.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Amount is negative: {0}")]
    Negative(Decimal),

    #[error("Amount too large to split into rupees and paise: {0}")]
    Overflow(Decimal),
}

/// A rupee amount
///
/// Money wraps a [`Decimal`] and keeps whatever precision the caller supplied;
/// rounding to the two decimal places of the paise unit happens only at
/// display and spelling boundaries via [`Money::round_paise`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates Money from an integer amount of paise
    pub fn from_paise(paise: i64) -> Self {
        Self(Decimal::new(paise, 2))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Rounds to two decimal places using banker's rounding
    /// (round half to even), matching standard two-decimal formatting.
    pub fn round_paise(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven),
        )
    }

    /// Splits the amount into whole rupees and a two-digit paise part.
    ///
    /// The amount is first rounded with [`Money::round_paise`]. Negative
    /// amounts and amounts whose rupee part does not fit in a `u64` are
    /// rejected.
    pub fn split(&self) -> Result<(u64, u8), MoneyError> {
        let rounded = self.round_paise().0;
        if rounded.is_sign_negative() && !rounded.is_zero() {
            return Err(MoneyError::Negative(rounded));
        }

        let whole = rounded.trunc();
        let rupees = whole.to_u64().ok_or(MoneyError::Overflow(rounded))?;
        let paise = ((rounded - whole) * Decimal::ONE_HUNDRED)
            .to_u8()
            .ok_or(MoneyError::Overflow(rounded))?;

        Ok((rupees, paise))
    }

    /// Multiplies by a scalar (e.g., a quantity)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self(self.0 * factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_addition_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_paise(a);
            let mb = Money::from_paise(b);
            let mc = Money::from_paise(c);

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }

        #[test]
        fn split_round_trips_paise_amounts(paise in 0i64..1_000_000_000_000i64) {
            let (rupees, minor) = Money::from_paise(paise).split().unwrap();
            prop_assert_eq!(rupees, (paise / 100) as u64);
            prop_assert_eq!(minor as i64, paise % 100);
        }
    }
}
