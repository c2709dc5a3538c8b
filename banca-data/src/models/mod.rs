pub mod accounts;
pub mod feed;
pub mod goals;
pub mod payments;
pub mod people;
pub mod places;
pub mod pricing;
pub mod transactions;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Default, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(AccountId);
string_id!(ContactId);
string_id!(GoalId);
string_id!(BillerId);
string_id!(MerchantId);

/// Currencies the bank operates in.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Pen,
    Usd,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Pen => "S/",
            Currency::Usd => "$",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Pen => "PEN",
            Currency::Usd => "USD",
        }
    }

    /// The counterpart currency of a PEN/USD pair
    pub fn other(&self) -> Self {
        match self {
            Currency::Pen => Currency::Usd,
            Currency::Usd => Currency::Pen,
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount of money in cents (100 = 1.00)
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Round a decimal amount to the nearest cent
    pub fn from_f64(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub fn units(&self) -> i64 {
        self.0 / 100
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiply by a factor, rounding to the nearest cent
    pub fn scale(&self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).round() as i64)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl From<i64> for Money {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl std::ops::Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), |acc, x| acc + x)
    }
}

/// Formats as `12,450.00` (comma groups, two decimals)
impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abs = self.0.unsigned_abs();
        let integer = (abs / 100).to_string();
        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (i, c) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "{}.{:02}", grouped, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_groups_thousands() {
        assert_eq!(Money::from_cents(1_245_000).to_string(), "12,450.00");
        assert_eq!(Money::from_cents(5_000_000_000).to_string(), "50,000,000.00");
        assert_eq!(Money::from_cents(8_550).to_string(), "85.50");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn test_money_display_negative() {
        assert_eq!(Money::from_cents(-123_456).to_string(), "-1,234.56");
    }

    #[test]
    fn test_money_scale_rounds_to_cent() {
        // 26.67 * 3.72 = 99.2124
        assert_eq!(Money::from_cents(2_667).scale(3.72), Money::from_cents(9_921));
        assert_eq!(Money::from_f64(26.666_666), Money::from_cents(2_667));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [14_250, 13_500].into_iter().map(Money::from_cents).sum();
        assert_eq!(total, Money::from_cents(27_750));
    }

    #[test]
    fn test_currency_other_and_symbol() {
        assert_eq!(Currency::Pen.other(), Currency::Usd);
        assert_eq!(Currency::Usd.other(), Currency::Pen);
        assert_eq!(Currency::Pen.symbol(), "S/");
        assert_eq!(Currency::Usd.symbol(), "$");
    }

    #[test]
    fn test_currency_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        let pen: Currency = serde_json::from_str("\"PEN\"").unwrap();
        assert_eq!(pen, Currency::Pen);
    }
}
