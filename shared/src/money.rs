//! Money calculation utilities using rust_decimal for precision
//!
//! The backend sends monetary fields as decimal strings ("12.50"), sometimes
//! as bare JSON numbers. [`Money`] accepts both and always writes a string
//! back, so records can be PUT unchanged.

use rust_decimal::prelude::*;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// Decimal places shown for any amount
const DECIMAL_PLACES: u32 = 2;

/// A monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

/// Returned when a string is not a decimal amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount: {0:?}")]
pub struct InvalidAmount(pub String);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Parse a decimal string. Blank input is zero, like an unset field.
    pub fn parse(input: &str) -> Result<Self, InvalidAmount> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }
        Decimal::from_str(trimmed)
            .map(Self)
            .map_err(|_| InvalidAmount(input.to_string()))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Round half away from zero to two decimal places
    pub fn rounded(&self) -> Self {
        let mut value = self
            .0
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(DECIMAL_PLACES);
        Self(value)
    }

    /// Line total for `quantity` units at this unit price
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Money {
    /// Always two decimal places ("7.5" displays as "7.50")
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded().0)
    }
}

impl FromStr for Money {
    type Err = InvalidAmount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
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

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Decimal::from_f64(v)
            .map(Money)
            .ok_or_else(|| E::custom(format!("amount {v} is not representable")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Money, E> {
        Ok(Money::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rounds_to_two_places() {
        assert_eq!(Money::parse("7.5").unwrap().to_string(), "7.50");
        assert_eq!(Money::parse("2.005").unwrap().to_string(), "2.01");
        assert_eq!(Money::parse("10").unwrap().to_string(), "10.00");
    }

    #[test]
    fn test_blank_is_zero() {
        assert_eq!(Money::parse("  ").unwrap(), Money::ZERO);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(Money::parse("12,50").is_err());
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_sum_is_exact() {
        // 0.1 + 0.2 must not drift like binary floats do
        let total: Money = ["0.1", "0.2"].iter().map(|s| Money::parse(s).unwrap()).sum();
        assert_eq!(total, Money::parse("0.3").unwrap());
    }

    #[test]
    fn test_accepts_string_or_number() {
        let from_str: Money = serde_json::from_str("\"12.50\"").unwrap();
        let from_num: Money = serde_json::from_str("12.5").unwrap();
        assert_eq!(from_str.rounded(), from_num.rounded());
        assert_eq!(serde_json::to_string(&from_str).unwrap(), "\"12.50\"");
    }

    #[test]
    fn test_times_quantity() {
        let unit = Money::parse("3.25").unwrap();
        assert_eq!(unit.times(4).to_string(), "13.00");
    }
}
