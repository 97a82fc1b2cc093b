use crate::constants::EPSILON;
use approx::{AbsDiffEq, RelativeEq};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};
use std::str::FromStr;

/// A `Decimal` wrapper that can never hold a negative value.
///
/// Strike prices, spot prices, volatilities, time-to-expiry, and multipliers
/// are all represented with this type so that the non-negativity invariants
/// are enforced at construction rather than re-checked at every call site.
#[derive(PartialEq, Clone, Copy)]
pub struct Positive(Decimal);

/// Builds a [`Positive`] from any expression convertible to `Decimal`, panicking on failure.
#[macro_export]
macro_rules! pos {
    ($val:expr) => {
        $crate::model::positive::Positive::new($val).unwrap()
    };
}

/// Like [`pos!`] but wraps the result in `Some`.
#[macro_export]
macro_rules! spos {
    ($val:expr) => {
        Some($crate::model::positive::Positive::new($val).unwrap())
    };
}

/// Builds a [`Positive`] from an `f64`, clamping conversion failure to zero.
#[macro_export]
macro_rules! f2p {
    ($val:expr) => {
        $crate::model::positive::Positive::new(
            rust_decimal::Decimal::from_f64_retain($val).unwrap_or(rust_decimal::Decimal::ZERO),
        )
        .unwrap_or($crate::model::positive::Positive::ZERO)
    };
}

impl Positive {
    pub const ZERO: Positive = Positive(Decimal::ZERO);
    pub const ONE: Positive = Positive(Decimal::ONE);
    pub const TWO: Positive = Positive(Decimal::TWO);
    pub const INFINITY: Positive = Positive(Decimal::MAX);
    pub const TEN: Positive = Positive(Decimal::TEN);
    pub const HUNDRED: Positive = Positive(Decimal::ONE_HUNDRED);

    pub fn new(value: Decimal) -> Result<Self, String> {
        if value >= Decimal::ZERO {
            Ok(Positive(value))
        } else {
            Err(format!("Positive value must be non-negative, got {value}"))
        }
    }

    /// Constructs directly from an `f64`, rejecting NaN/negative/infinite inputs.
    pub fn from_f64(value: f64) -> Result<Self, String> {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("Positive value must be a finite non-negative number, got {value}"));
        }
        Decimal::from_f64_retain(value)
            .ok_or_else(|| format!("could not represent {value} as Decimal"))
            .and_then(Self::new)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn to_dec(&self) -> Decimal {
        self.0
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn max(self, other: Positive) -> Positive {
        if self.0 > other.0 { self } else { other }
    }

    pub fn min(self, other: Positive) -> Positive {
        if self.0 < other.0 { self } else { other }
    }
}

impl From<Positive> for Decimal {
    fn from(p: Positive) -> Self {
        p.0
    }
}

impl PartialEq<Decimal> for Positive {
    fn eq(&self, other: &Decimal) -> bool {
        self.0 == *other
    }
}

impl PartialEq<f64> for Positive {
    fn eq(&self, other: &f64) -> bool {
        self.to_f64() == *other
    }
}

impl fmt::Display for Positive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.1$}", self.0, precision)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Debug for Positive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Positive({})", self.0)
    }
}

impl Serialize for Positive {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Positive {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Decimal::deserialize(deserializer)?;
        Positive::new(value).map_err(serde::de::Error::custom)
    }
}

impl Add for Positive {
    type Output = Positive;
    fn add(self, other: Positive) -> Positive {
        Positive(self.0 + other.0)
    }
}

impl Sub for Positive {
    type Output = Positive;
    fn sub(self, rhs: Self) -> Self::Output {
        Positive(self.0 - rhs.0)
    }
}

impl Div for Positive {
    type Output = Positive;
    fn div(self, other: Positive) -> Positive {
        Positive(self.0 / other.0)
    }
}

impl Mul for Positive {
    type Output = Positive;
    fn mul(self, other: Positive) -> Positive {
        Positive(self.0 * other.0)
    }
}

impl Add<Decimal> for Positive {
    type Output = Positive;
    fn add(self, rhs: Decimal) -> Positive {
        Positive(self.0 + rhs)
    }
}

impl Sub<Decimal> for Positive {
    type Output = Positive;
    fn sub(self, rhs: Decimal) -> Positive {
        Positive(self.0 - rhs)
    }
}

impl Mul<Decimal> for Positive {
    type Output = Positive;
    fn mul(self, rhs: Decimal) -> Positive {
        Positive(self.0 * rhs)
    }
}

impl Div<Decimal> for Positive {
    type Output = Positive;
    fn div(self, rhs: Decimal) -> Positive {
        Positive(self.0 / rhs)
    }
}

impl AddAssign for Positive {
    fn add_assign(&mut self, other: Positive) {
        self.0 += other.0;
    }
}

impl AddAssign<Decimal> for Positive {
    fn add_assign(&mut self, rhs: Decimal) {
        self.0 += rhs;
    }
}

impl MulAssign<Decimal> for Positive {
    fn mul_assign(&mut self, rhs: Decimal) {
        self.0 *= rhs;
    }
}

impl PartialOrd for Positive {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Positive {}

impl Ord for Positive {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Neg for Positive {
    type Output = Self;
    fn neg(self) -> Self::Output {
        panic!("Cannot negate a Positive value")
    }
}

impl Default for Positive {
    fn default() -> Self {
        Positive::ZERO
    }
}

impl FromStr for Positive {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Decimal>() {
            Ok(value) if value >= Decimal::ZERO => Ok(Positive(value)),
            Ok(value) => Err(format!("Value must be non-negative, got {value}")),
            Err(e) => Err(format!("Failed to parse as Decimal: {e}")),
        }
    }
}

impl AbsDiffEq for Positive {
    type Epsilon = Decimal;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        (self.0 - other.0).abs() <= epsilon
    }
}

impl RelativeEq for Positive {
    fn default_max_relative() -> Self::Epsilon {
        EPSILON * Decimal::from(100)
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        let abs_diff = (self.0 - other.0).abs();
        let largest = self.0.abs().max(other.0.abs());
        abs_diff <= epsilon || abs_diff <= max_relative * largest
    }
}

impl Sum for Positive {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let sum = iter.fold(Decimal::ZERO, |acc, x| acc + x.value());
        Positive::new(sum).unwrap_or(Positive::ZERO)
    }
}

impl<'a> Sum<&'a Positive> for Positive {
    fn sum<I: Iterator<Item = &'a Positive>>(iter: I) -> Self {
        let sum = iter.fold(Decimal::ZERO, |acc, x| acc + x.value());
        Positive::new(sum).unwrap_or(Positive::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_negative() {
        assert!(Positive::new(Decimal::NEGATIVE_ONE).is_err());
        assert!(Positive::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn macros_build_expected_values() {
        assert_eq!(pos!(dec!(5.0)).value(), dec!(5.0));
        assert_eq!(f2p!(5.0).value(), dec!(5.0));
        assert_eq!(f2p!(-1.0), Positive::ZERO);
    }

    #[test]
    fn ordering_and_arithmetic() {
        let a = f2p!(1.0);
        let b = f2p!(2.0);
        assert!(a < b);
        assert_eq!((a + b).value(), dec!(3.0));
        assert_eq!((b - a).value(), dec!(1.0));
    }

    #[test]
    fn display_respects_precision() {
        let p = pos!(dec!(4.5));
        assert_eq!(format!("{p}"), "4.5");
        assert_eq!(format!("{p:.2}"), "4.50");
    }

    #[test]
    #[should_panic(expected = "Cannot negate")]
    fn negation_panics() {
        let _ = -f2p!(1.0);
    }

    #[test]
    fn from_f64_rejects_nan_and_negative() {
        assert!(Positive::from_f64(f64::NAN).is_err());
        assert!(Positive::from_f64(-1.0).is_err());
        assert!(Positive::from_f64(2.5).is_ok());
    }
}
