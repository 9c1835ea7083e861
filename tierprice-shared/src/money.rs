use serde::{Deserialize, Serialize};
use std::fmt;

/// Minor units (cents) in one currency unit
pub const CENTS_PER_UNIT: i64 = 100;

/// Fixed-point price stored as whole cents
///
/// `Price::from_units(90)` and `Price::from_cents(9000)` are the same value,
/// rendered as `90.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn from_units(units: i64) -> Self {
        Self(units * CENTS_PER_UNIT)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = CENTS_PER_UNIT as u64;
        write!(f, "{}{}.{:02}", sign, abs / scale, abs % scale)
    }
}

/// Discount in whole percentage points
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Discount(u32);

impl Discount {
    pub const NONE: Discount = Discount(0);

    pub const fn percent(points: u32) -> Self {
        Self(points)
    }

    pub fn points(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display_two_decimals() {
        assert_eq!(Price::from_units(100).to_string(), "100.00");
        assert_eq!(Price::from_cents(9050).to_string(), "90.50");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
        assert_eq!(Price::ZERO.to_string(), "0.00");
        assert_eq!(Price::from_cents(-250).to_string(), "-2.50");
    }

    #[test]
    fn test_price_units_and_cents_agree() {
        assert_eq!(Price::from_units(90), Price::from_cents(9000));
        assert_eq!(Price::from_units(90).cents(), 9000);
        assert!(Price::from_units(0).is_zero());
    }

    #[test]
    fn test_discount_display() {
        assert_eq!(Discount::NONE.to_string(), "0");
        assert_eq!(Discount::percent(50).to_string(), "50");
        assert_eq!(Discount::percent(100).points(), 100);
    }

    #[test]
    fn test_serializes_as_bare_numbers() {
        let json = serde_json::to_string(&(Price::from_units(90), Discount::percent(50))).unwrap();
        assert_eq!(json, "[9000,50]");
    }
}
