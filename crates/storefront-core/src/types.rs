//! # Domain Types
//!
//! The inputs and the output of the checkout totals calculation.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │    LineItem     │   │ PricingConfiguration │   │     Totals      │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  unit_price     │   │  tax_rate            │   │  subtotal       │  │
//! │  │  quantity       │──►│  prices_include_tax  │──►│  total_quantity │  │
//! │  └─────────────────┘   │  flat_shipping_cost  │   │  shipping_cost  │  │
//! │                        │  free_shipping_...   │   │  tax_rate       │  │
//! │  ┌─────────────────┐   └──────────────────────┘   │  tax_amount     │  │
//! │  │    TaxRate      │                              │  total          │  │
//! │  │  bps (u32)      │                              └─────────────────┘  │
//! │  │  875 = 8.75%    │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these types know about the ORM or the settings store. The caller
//! extracts plain values from its cart entities and settings before invoking
//! [`crate::calculate_totals`].

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::{parse_fixed, Money};
use crate::BPS_PER_UNIT;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 875 bps = 8.75%, so the configured fraction `0.0875` is held exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Parses a decimal fraction such as `"0.0875"` (8.75%).
    ///
    /// At most four decimal places are accepted, which is the resolution of
    /// a basis point. Negative rates are rejected.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::TaxRate;
    ///
    /// assert_eq!(TaxRate::parse_fraction("0.0875").unwrap().bps(), 875);
    /// assert_eq!(TaxRate::parse_fraction("0.2").unwrap().bps(), 2000);
    /// assert!(TaxRate::parse_fraction("0.08875").is_err());
    /// assert!(TaxRate::parse_fraction("-0.05").is_err());
    /// ```
    pub fn parse_fraction(input: &str) -> Result<Self, ValidationError> {
        let bps = parse_fixed(input, 4, "tax_rate")?;
        if bps < 0 {
            return Err(ValidationError::MustNotBeNegative {
                field: "tax_rate".to_string(),
            });
        }
        u32::try_from(bps)
            .map(TaxRate)
            .map_err(|_| ValidationError::OutOfRange {
                field: "tax_rate".to_string(),
                min: 0,
                max: BPS_PER_UNIT as i64,
            })
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Renders the rate as a decimal fraction, e.g. `"0.0875"`.
    pub fn as_fraction_string(&self) -> String {
        format!("{}.{:04}", self.0 / BPS_PER_UNIT, self.0 % BPS_PER_UNIT)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Percentage display, trailing zeros trimmed: `8.75%`, `20%`, `0.5%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        match frac {
            0 => write!(f, "{whole}%"),
            f2 if f2 % 10 == 0 => write!(f, "{whole}.{}%", f2 / 10),
            f2 => write!(f, "{whole}.{f2:02}%"),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A cart entry: a quantity of one priced product variant.
///
/// Transient. Built by the caller from its cart/session store and discarded
/// after the totals are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Price of a single unit. Must not be negative.
    pub unit_price: Money,

    /// Number of units. Must be at least one.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item.
    #[inline]
    pub const fn new(unit_price: Money, quantity: i64) -> Self {
        LineItem {
            unit_price,
            quantity,
        }
    }

    /// Unit price × quantity, or `None` if it does not fit in an `i64`.
    #[inline]
    pub const fn line_total(&self) -> Option<Money> {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Pricing Configuration
// =============================================================================

/// The rule set applied to a cart, passed explicitly on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingConfiguration {
    /// Flat tax rate applied to the whole cart.
    pub tax_rate: TaxRate,

    /// Whether unit prices already contain tax (EU/UK style shelf prices).
    pub prices_include_tax: bool,

    /// Charged when the subtotal is below `free_shipping_threshold`.
    pub flat_shipping_cost: Money,

    /// Subtotal at or above which shipping is free.
    pub free_shipping_threshold: Money,
}

impl Default for PricingConfiguration {
    /// 8.75% exclusive tax, 10.00 shipping, free from 100.00.
    fn default() -> Self {
        PricingConfiguration {
            tax_rate: TaxRate::from_bps(875),
            prices_include_tax: false,
            flat_shipping_cost: Money::from_cents(1000),
            free_shipping_threshold: Money::from_cents(10000),
        }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Result of [`crate::calculate_totals`].
///
/// ## Invariant
/// `total == subtotal + tax_amount + shipping_cost`, with every amount exact
/// to the cent. When prices include tax, `subtotal` is the net amount after
/// the contained tax has been backed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Totals {
    pub subtotal: Money,
    pub total_quantity: i64,
    pub shipping_cost: Money,
    pub tax_rate: TaxRate,
    pub tax_amount: Money,
    pub total: Money,
}

impl Totals {
    /// True when the free-shipping threshold was reached.
    #[inline]
    pub fn ships_free(&self) -> bool {
        self.shipping_cost.is_zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_parse_fraction() {
        assert_eq!(TaxRate::parse_fraction("0.0875").unwrap().bps(), 875);
        assert_eq!(TaxRate::parse_fraction("0").unwrap(), TaxRate::zero());
        assert_eq!(TaxRate::parse_fraction("1").unwrap().bps(), 10_000);
        assert!(matches!(
            TaxRate::parse_fraction("-0.1"),
            Err(ValidationError::MustNotBeNegative { .. })
        ));
        assert!(matches!(
            TaxRate::parse_fraction("8.75%"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            TaxRate::parse_fraction("999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(875).to_string(), "8.75%");
        assert_eq!(TaxRate::from_bps(2000).to_string(), "20%");
        assert_eq!(TaxRate::from_bps(50).to_string(), "0.5%");
        assert_eq!(TaxRate::from_bps(1).to_string(), "0.01%");
        assert_eq!(TaxRate::from_bps(875).as_fraction_string(), "0.0875");
    }

    #[test]
    fn test_line_total() {
        let item = LineItem::new(Money::from_cents(2500), 2);
        assert_eq!(item.line_total(), Some(Money::from_cents(5000)));

        let huge = LineItem::new(Money::from_cents(i64::MAX / 2), 3);
        assert_eq!(huge.line_total(), None);
    }

    #[test]
    fn test_default_configuration() {
        let config = PricingConfiguration::default();
        assert_eq!(config.tax_rate.bps(), 875);
        assert!(!config.prices_include_tax);
        assert_eq!(config.flat_shipping_cost.cents(), 1000);
        assert_eq!(config.free_shipping_threshold.cents(), 10000);
    }

    #[test]
    fn test_totals_serialize_for_spa_bridge() {
        let totals = Totals {
            subtotal: Money::from_cents(5000),
            total_quantity: 2,
            shipping_cost: Money::from_cents(1000),
            tax_rate: TaxRate::from_bps(875),
            tax_amount: Money::from_cents(438),
            total: Money::from_cents(6438),
        };
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["subtotal"], 5000);
        assert_eq!(json["tax_rate"], 875);
        assert_eq!(json["total"], 6438);
        assert!(!totals.ships_free());
    }
}
