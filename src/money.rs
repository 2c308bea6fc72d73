//! Exact decimal money for catalog prices and cart totals.

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// Number of decimal places shown for cart totals.
pub const DISPLAY_SCALE: i64 = 2;

/// A non-negative amount of money in the storefront's single currency.
///
/// Arithmetic is exact. Rounding happens only in [`Price::display_rounded`],
/// which is what the cart total shows, so repeated additions never compound
/// rounding error.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(BigDecimal);

impl Price {
    /// Price from an integer count of cents (`Price::from_cents(1499)` is 14.99).
    pub fn from_cents(cents: i64) -> Self {
        Price(BigDecimal::new(cents.into(), DISPLAY_SCALE))
    }

    pub fn zero() -> Self {
        Price(BigDecimal::from(0))
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::from(0)
    }

    /// Price of `quantity` units.
    pub fn times(&self, quantity: u32) -> Price {
        Price(&self.0 * BigDecimal::from(quantity))
    }

    /// The amount rounded half away from zero to two decimal places, always
    /// showing both digits (`29.98`, `0.00`, `0.125` as `0.13`).
    pub fn display_rounded(&self) -> String {
        self.0
            .with_scale_round(DISPLAY_SCALE, RoundingMode::HalfUp)
            .to_string()
    }
}

/// Unrounded amount, as item prices are listed on the menu (`14.99`, `999.99`).
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let amount = BigDecimal::from_str(s.trim())
            .map_err(|e| crate::Error::InvalidCatalog(format!("bad price '{}': {}", s, e)))?;
        Ok(Price(amount))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::zero(), |acc, p| acc + p)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Accept both "14.99" and 14.99. JSON numbers are parsed as f64 and then read
// back from their shortest decimal form, so they are exact only up to about 15
// significant digits. Longer amounts must be given as strings.
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s,
            Raw::Number(n) => n.to_string(),
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_and_display() {
        let p = Price::from_cents(1499);
        assert_eq!(p.to_string(), "14.99");
        assert_eq!(p.display_rounded(), "14.99");
        assert_eq!(Price::zero().display_rounded(), "0.00");
    }

    #[test]
    fn multiplication_is_exact() {
        let p = Price::from_cents(1499);
        assert_eq!(p.times(2), Price::from_cents(2998));
        assert_eq!(p.times(3).display_rounded(), "44.97");
    }

    #[test]
    fn sum_of_many_small_prices_does_not_drift() {
        let total: Price = (0..1000).map(|_| Price::from_cents(1)).sum();
        assert_eq!(total.display_rounded(), "10.00");
    }

    #[test]
    fn parses_text_and_json_numbers() {
        let p: Price = "999.99".parse().unwrap();
        assert_eq!(p, Price::from_cents(99999));

        let from_number: Price = serde_json::from_str("16.99").unwrap();
        assert_eq!(from_number, Price::from_cents(1699));
        let from_text: Price = serde_json::from_str("\"16.99\"").unwrap();
        assert_eq!(from_text, from_number);
    }

    #[test]
    fn display_rounds_half_away_from_zero() {
        let p = |s: &str| s.parse::<Price>().unwrap().display_rounded();
        assert_eq!(p("0.125"), "0.13");
        assert_eq!(p("1.005"), "1.01");
        assert_eq!(p("2.675"), "2.68");
        assert_eq!(p("0.124"), "0.12");
        assert_eq!(p("18.5"), "18.50");
        assert_eq!(p("0"), "0.00");
    }

    #[test]
    fn long_amounts_are_exact_as_strings() {
        let exact: Price = serde_json::from_str("\"12345678901234567.89\"").unwrap();
        assert_eq!(exact.to_string(), "12345678901234567.89");
        assert_eq!(exact.display_rounded(), "12345678901234567.89");
    }

    #[test]
    fn rejects_garbage() {
        assert!("twelve".parse::<Price>().is_err());
        assert!(Price::from_cents(-1).is_negative());
    }
}
