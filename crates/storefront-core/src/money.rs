//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    19.99 * 3 = 59.969999999999999  ❌ WRONG!                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    1999 * 3 = 5997 cents, exactly                                       │
//! │    Rounding happens once, explicitly, when tax is computed              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price: Money = "19.99".parse().unwrap();
//! assert_eq!(price.cents(), 1999);
//!
//! let line_total = price.multiply_quantity(3).unwrap();
//! assert_eq!(line_total.to_string(), "59.97");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// Minor units per major unit. The storefront prices in two-decimal currencies.
pub const MINOR_UNITS: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Currency agnostic: the checkout layer decides which symbol to print.
/// Serializes as a bare integer of minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2500);
    /// assert_eq!(unit_price.multiply_quantity(2), Some(Money::from_cents(5000)));
    /// assert_eq!(Money::from_cents(i64::MAX).multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two values, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Applies a rate expressed in basis points and rounds half-up to the cent.
    ///
    /// `amount × bps / divisor_bps`, where `divisor_bps` is 10 000 for a plain
    /// percentage and `10 000 + bps` when backing tax out of a gross price.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// // 50.00 × 8.75% = 4.375 → 4.38
    /// let tax = Money::from_cents(5000).apply_bps(875, 10_000);
    /// assert_eq!(tax.cents(), 438);
    /// ```
    pub fn apply_bps(&self, bps: u32, divisor_bps: u32) -> Money {
        // i64 × u32 always fits in i128, and the quotient is no larger than
        // the amount whenever bps <= divisor_bps.
        let cents = div_round_half_up(self.0 as i128 * bps as i128, divisor_bps as i128);
        Money(cents as i64)
    }
}

/// Integer division rounding half away from zero ("standard" half-up).
///
/// `denominator` must be positive.
///
/// ```rust
/// use storefront_core::money::div_round_half_up;
///
/// assert_eq!(div_round_half_up(4375, 1000), 4);  // 4.375 → 4
/// assert_eq!(div_round_half_up(4500, 1000), 5);  // 4.5   → 5
/// assert_eq!(div_round_half_up(-4500, 1000), -5);
/// ```
pub fn div_round_half_up(numerator: i128, denominator: i128) -> i128 {
    debug_assert!(denominator > 0);
    if numerator >= 0 {
        (2 * numerator + denominator) / (2 * denominator)
    } else {
        -((-2 * numerator + denominator) / (2 * denominator))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a plain decimal string into an integer scaled by `10^places`.
///
/// `"0.0875"` with four places gives `875`; `"19.9"` with two gives `1990`.
/// Accepts an optional leading `-`. Rejects exponents, grouping separators,
/// a leading `+`, and more fractional digits than `places`.
pub(crate) fn parse_fixed(input: &str, places: u32, field: &str) -> Result<i64, ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let s = input.trim();
    if s.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((_, "")) => return Err(invalid("missing digits after decimal point")),
        Some(parts) => parts,
        None => (unsigned, ""),
    };

    if whole.is_empty()
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid("expected a plain decimal number"));
    }

    if fraction.len() > places as usize {
        return Err(invalid(&format!("at most {places} decimal places are allowed")));
    }

    let too_large = || invalid("value is too large");
    let whole: i64 = whole.parse().map_err(|_| too_large())?;
    let fraction_scaled = if fraction.is_empty() {
        0
    } else {
        let digits: i64 = fraction.parse().map_err(|_| too_large())?;
        digits * 10_i64.pow(places - fraction.len() as u32)
    };

    let scaled = whole
        .checked_mul(10_i64.pow(places))
        .and_then(|w| w.checked_add(fraction_scaled))
        .ok_or_else(too_large)?;

    Ok(if negative { -scaled } else { scaled })
}

/// Parses decimal strings such as `"19.99"`, `"10"`, `"0.5"` or `"-3.25"`.
///
/// Amounts with more than two fractional digits are rejected rather than
/// rounded; a price is either exact to the cent or it is wrong.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_fixed(input, 2, "amount").map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the amount with exactly two decimals and no currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(
            f,
            "{}{}.{:02}",
            sign,
            abs / MINOR_UNITS as u64,
            abs % MINOR_UNITS as u64
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amounts() {
        assert_eq!("19.99".parse::<Money>().unwrap().cents(), 1999);
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("0.5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("0.05".parse::<Money>().unwrap().cents(), 5);
        assert_eq!("-3.25".parse::<Money>().unwrap().cents(), -325);
        assert_eq!(" 100.00 ".parse::<Money>().unwrap().cents(), 10000);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "".parse::<Money>(),
            Err(ValidationError::Required { .. })
        ));
        assert!("1.234".parse::<Money>().is_err());
        assert!("1.".parse::<Money>().is_err());
        assert!(".5".parse::<Money>().is_err());
        assert!("ten".parse::<Money>().is_err());
        assert!("1,00".parse::<Money>().is_err());
        assert!("+1.00".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_checked_operations() {
        assert_eq!(
            Money::from_cents(1999).multiply_quantity(3),
            Some(Money::from_cents(5997))
        );
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_apply_bps_rounds_half_up() {
        // 65.00 × 8.75% = 5.6875 → 5.69
        assert_eq!(Money::from_cents(6500).apply_bps(875, 10_000).cents(), 569);
        // 10.00 × 8.25% = 0.825 → 0.83
        assert_eq!(Money::from_cents(1000).apply_bps(825, 10_000).cents(), 83);
        // 0.00 stays 0.00
        assert_eq!(Money::zero().apply_bps(875, 10_000), Money::zero());
    }

    #[test]
    fn test_apply_bps_inclusive_divisor() {
        // 108.75 gross at 8.75% contains exactly 8.75 of tax
        assert_eq!(Money::from_cents(10875).apply_bps(875, 10_875).cents(), 875);
    }

    #[test]
    fn test_serializes_as_integer_cents() {
        let json = serde_json::to_string(&Money::from_cents(6438)).unwrap();
        assert_eq!(json, "6438");
    }
}
