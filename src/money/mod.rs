//! Exact currency arithmetic in integer minor units.
//!
//! Amounts cross the wire as plain JSON numbers, so conversion to and from
//! floating point happens here at the boundary and nowhere else; every
//! accumulation runs on `i64` cents.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::LedgerError;

const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// A currency amount stored as minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor_units(cents: i64) -> Self {
        Self(cents)
    }

    /// Converts a major-units float (as received in backend JSON) to cents,
    /// rounding half away from zero. Non-finite input is rejected.
    pub fn try_from_major(amount: f64) -> Result<Self, LedgerError> {
        if !amount.is_finite() {
            return Err(LedgerError::InvalidAmount(format!(
                "non-finite amount {amount}"
            )));
        }
        let cents = (amount * MINOR_UNITS_PER_MAJOR as f64).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return Err(LedgerError::InvalidAmount(format!(
                "amount {amount} overflows minor units"
            )));
        }
        Ok(Self(cents as i64))
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// Major-units float for the JSON boundary. Display only, never fed
    /// back into arithmetic.
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / MINOR_UNITS_PER_MAJOR as f64
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn abs(&self) -> Money {
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

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Money::try_from_major(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(
            f,
            "{}{}.{:02}",
            sign,
            abs / MINOR_UNITS_PER_MAJOR,
            abs % MINOR_UNITS_PER_MAJOR
        )
    }
}

/// How negative amounts are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegativeStyle {
    Sign,
    Parentheses,
}

/// Formats an amount for the UI: grouped digits, currency symbol, and a
/// distinct negative rendering.
pub fn format_money(amount: Money, currency: &str, negative_style: NegativeStyle) -> String {
    let abs = amount.abs();
    let int_part = group_digits(&(abs.minor_units() / MINOR_UNITS_PER_MAJOR).to_string());
    let body = format!(
        "{}{}.{:02}",
        symbol_for(currency),
        int_part,
        abs.minor_units() % MINOR_UNITS_PER_MAJOR
    );
    if amount.is_negative() {
        match negative_style {
            NegativeStyle::Sign => format!("-{}", body),
            NegativeStyle::Parentheses => format!("({})", body),
        }
    } else {
        body
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "PHP" => "₱".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => format!("{} ", code),
    }
}

fn group_digits(digits: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_major_floats_to_cents() {
        assert_eq!(Money::try_from_major(1234.56).unwrap().minor_units(), 123456);
        assert_eq!(Money::try_from_major(-0.005).unwrap().minor_units(), -1);
        assert_eq!(Money::try_from_major(0.0).unwrap(), Money::ZERO);
    }

    #[test]
    fn rejects_non_finite_amounts() {
        assert!(Money::try_from_major(f64::NAN).is_err());
        assert!(Money::try_from_major(f64::INFINITY).is_err());
    }

    #[test]
    fn sums_without_drift() {
        // 0.1 + 0.2 style additions stay exact in cents.
        let total: Money = (0..1000)
            .map(|_| Money::from_minor_units(10))
            .sum();
        assert_eq!(total.minor_units(), 10_000);
    }

    #[test]
    fn formats_with_grouping_and_symbol() {
        let amount = Money::from_minor_units(1_234_567);
        assert_eq!(
            format_money(amount, "PHP", NegativeStyle::Sign),
            "₱12,345.67"
        );
        assert_eq!(
            format_money(-amount, "PHP", NegativeStyle::Parentheses),
            "(₱12,345.67)"
        );
    }

    #[test]
    fn serde_round_trips_as_major_units() {
        let amount = Money::from_minor_units(150050);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "1500.5");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }
}
