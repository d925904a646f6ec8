use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Money type, kept at 8 decimal places so sums are exact in any order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(8))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s.trim())?.round_dp(8)))
    }

    /// create from integer amount (soles, dollars)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor amount (centimos, cents)
    pub fn from_minor(amount: i64) -> Self {
        Money(Decimal::new(amount, 2))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to specified decimal places
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp(dp))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }

    /// render for display, e.g. "S/ 1,234.50" or "-$ 12.00"
    pub fn format_with(&self, currency: Currency) -> String {
        let rounded = self.0.abs().round_dp(2);
        let plain = format!("{:.2}", rounded);
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let digits: Vec<char> = int_part.chars().collect();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(*c);
        }

        let sign = if self.is_negative() && !rounded.is_zero() { "-" } else { "" };
        format!("{}{} {}.{}", sign, currency.symbol(), grouped, frac_part)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i32> for Money {
    fn from(i: i32) -> Self {
        Money::from_major(i as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(8))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = (self.0 + other.0).round_dp(8);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money((self.0 - other.0).round_dp(8))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = (self.0 - other.0).round_dp(8);
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
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + *m)
    }
}

/// ratio type for utilization and progress (0.25 is 25%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);
    pub const ONE: Rate = Rate(Decimal::ONE);

    /// create from decimal (e.g., 0.05 for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 5 for 5%)
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::from(100))
    }

    /// part / whole, or None when whole is zero; saturates on overflow
    pub fn ratio(part: Money, whole: Money) -> Option<Self> {
        if whole.is_zero() {
            return None;
        }
        let (p, w) = (part.as_decimal(), whole.as_decimal());
        let r = p
            .checked_div(w)
            .unwrap_or_else(|| saturated(p.is_sign_negative() != w.is_sign_negative()));
        Some(Rate(r))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage, saturating at the decimal range
    pub fn as_percentage(&self) -> Decimal {
        self.0
            .checked_mul(Decimal::ONE_HUNDRED)
            .unwrap_or_else(|| saturated(self.0.is_sign_negative()))
    }
}

fn saturated(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

/// account currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.12345679");
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(Money::from_minor(12_345), Money::from_decimal(dec!(123.45)));
    }

    #[test]
    fn test_sum_is_order_independent() {
        let values = [
            Money::from_decimal(dec!(0.1)),
            Money::from_decimal(dec!(0.2)),
            Money::from_decimal(dec!(1234.56)),
            Money::from_decimal(dec!(-7.77)),
        ];
        let forward: Money = values.iter().sum();
        let backward: Money = values.iter().rev().sum();
        assert_eq!(forward, backward);
        assert_eq!(forward, Money::from_decimal(dec!(1227.09)));
    }

    #[test]
    fn test_ratio_guards_zero() {
        assert_eq!(Rate::ratio(Money::from_major(5), Money::ZERO), None);
        let r = Rate::ratio(Money::from_major(250), Money::from_major(1000)).unwrap();
        assert_eq!(r.as_percentage(), dec!(25));
    }

    #[test]
    fn test_rate_saturates_instead_of_overflowing() {
        let huge = Money::from_decimal(Decimal::from_i128_with_scale(10_i128.pow(27), 0));
        let r = Rate::ratio(huge, Money::ONE).unwrap();
        assert_eq!(r.as_percentage(), Decimal::MAX);

        let r = Rate::ratio(-huge, Money::ONE).unwrap();
        assert_eq!(r.as_percentage(), Decimal::MIN);
    }

    #[test]
    fn test_currency_display() {
        let m = Money::from_decimal(dec!(1234567.5));
        assert_eq!(m.format_with(Currency::Pen), "S/ 1,234,567.50");
        assert_eq!(m.format_with(Currency::Usd), "$ 1,234,567.50");

        let small = Money::from_decimal(dec!(-12));
        assert_eq!(small.format_with(Currency::Usd), "-$ 12.00");

        assert_eq!(Money::ZERO.format_with(Currency::Pen), "S/ 0.00");
        assert_eq!(Money::from_major(999).format_with(Currency::Pen), "S/ 999.00");
    }

    #[test]
    fn test_currency_serde_codes() {
        let c: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(c, Currency::Usd);
        assert_eq!(serde_json::to_string(&Currency::Pen).unwrap(), "\"PEN\"");
    }
}
