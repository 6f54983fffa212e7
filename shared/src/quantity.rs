//! Unit counts (cart quantity, product stock)
//!
//! The backend stores counts as numeric strings. [`Quantity`] reads either a
//! string or a number and writes a string.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid quantity: {0:?}")]
pub struct InvalidQuantity(pub String);

impl Quantity {
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = InvalidQuantity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self(0));
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| InvalidQuantity(s.to_string()))
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QuantityVisitor)
    }
}

struct QuantityVisitor;

impl Visitor<'_> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or numeric string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Quantity, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Quantity, E> {
        u32::try_from(v)
            .map(Quantity)
            .map_err(|_| E::custom(format!("quantity {v} out of range")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Quantity, E> {
        u32::try_from(v)
            .map(Quantity)
            .map_err(|_| E::custom(format!("quantity {v} out of range")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Quantity, E> {
        Ok(Quantity(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_string_and_number() {
        let a: Quantity = serde_json::from_str("\"12\"").unwrap();
        let b: Quantity = serde_json::from_str("12").unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"12\"");
    }

    #[test]
    fn test_negative_is_rejected() {
        assert!(serde_json::from_str::<Quantity>("-3").is_err());
        assert!("-3".parse::<Quantity>().is_err());
    }
}
