//! Money type and Brazilian real formatting.
//!
//! Amounts are held in centavos so that cart totals and price comparisons
//! never accumulate floating-point error. Catalog JSON carries prices as
//! decimal numbers in reais; conversion happens once at the serde boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::error::{Result, StorefrontError};

/// Currency symbol prepended to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Centavos per real.
const MINOR_UNITS: i64 = 100;

/// Largest amount, in centavos, accepted from decimal input.
pub const MAX_AMOUNT_CENTS: i64 = 1_000_000_000_000_000;

/// A monetary value in Brazilian reais.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money {
    /// Amount in centavos.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from centavos.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from whole reais, saturating at the `i64` bounds.
    pub const fn from_reais(reais: i64) -> Self {
        Self::new(reais.saturating_mul(MINOR_UNITS))
    }

    /// Create a Money value from a decimal amount in reais.
    ///
    /// Rounds half away from zero to two fraction digits. Fails with
    /// `InvalidArgument` for NaN or infinite input and for amounts beyond
    /// [`MAX_AMOUNT_CENTS`].
    ///
    /// ```
    /// use vitrine_commerce::money::Money;
    /// let price = Money::from_decimal(49.99).unwrap();
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self> {
        if !amount.is_finite() {
            return Err(StorefrontError::InvalidArgument(format!(
                "expected a finite number, but received {amount}"
            )));
        }
        let cents = (amount * MINOR_UNITS as f64).round();
        if cents.abs() > MAX_AMOUNT_CENTS as f64 {
            return Err(StorefrontError::InvalidArgument(format!(
                "amount {amount} is outside the supported range"
            )));
        }
        Ok(Self::new(cents as i64))
    }

    /// Create a zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value in reais.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / MINOR_UNITS as f64
    }

    /// Format as a display string (e.g., "R$1.234,50").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format without symbol (e.g., "1.234,50").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let units = abs / MINOR_UNITS as u64;
        let cents = abs % MINOR_UNITS as u64;
        format!("{}{},{:02}", sign, group_thousands(units), cents)
    }

    /// Multiply by a scalar, saturating at the `i64` bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }
}

/// Format a decimal amount of reais the way the storefront displays prices.
///
/// Two fixed fraction digits, `.` as the thousands separator and `,` as the
/// decimal separator. Non-finite input is rejected with `InvalidArgument`.
///
/// ```
/// use vitrine_commerce::money::format_currency;
/// assert_eq!(format_currency(1234.5).unwrap(), "R$1.234,50");
/// ```
pub fn format_currency(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(StorefrontError::InvalidArgument(format!(
            "format_currency expects a number, but received {value}"
        )));
    }
    Ok(Money::from_decimal(value)?.display())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

impl TryFrom<f64> for Money {
    type Error = StorefrontError;

    fn try_from(value: f64) -> Result<Self> {
        Money::from_decimal(value)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> f64 {
        money.to_decimal()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
