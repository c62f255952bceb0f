//! # Pricing Module
//!
//! The checkout totals calculator.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line items ──► Σ unit_price × qty ──► subtotal (exact, in cents)       │
//! │                 Σ qty              ──► total_quantity                   │
//! │                                                                         │
//! │  subtotal >= free_shipping_threshold ? 0 : flat_shipping_cost           │
//! │                                                                         │
//! │  exclusive:  tax = round_half_up(subtotal × rate)                       │
//! │  inclusive:  tax = round_half_up(subtotal × rate / (1 + rate))          │
//! │              subtotal reported net of the contained tax                 │
//! │                                                                         │
//! │  total = subtotal + tax + shipping                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are integer cents throughout, so the only rounding step is the
//! tax computation, and it happens exactly once.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineItem, PricingConfiguration, Totals};
use crate::validation::{validate_configuration, validate_line_items};
use crate::BPS_PER_UNIT;

/// Computes checkout totals for a cart.
///
/// Pure and deterministic: no I/O, no global settings, inputs untouched.
/// An empty cart yields a zero subtotal and is still charged flat shipping.
///
/// ## Errors
/// - [`CoreError::InvalidConfiguration`] for negative shipping amounts or a
///   tax rate above 100%
/// - [`CoreError::InvalidLineItem`] for a negative unit price or a quantity
///   below one
/// - [`CoreError::AmountOverflow`] when sums exceed `i64` cents
///
/// ## Example
/// ```rust
/// use storefront_core::{calculate_totals, LineItem, Money, PricingConfiguration};
///
/// let config = PricingConfiguration::default(); // 8.75%, 10.00 shipping under 100.00
/// let items = [
///     LineItem::new(Money::from_cents(2500), 2),
///     LineItem::new(Money::from_cents(1500), 1),
/// ];
///
/// let totals = calculate_totals(&items, &config).unwrap();
/// assert_eq!(totals.subtotal.to_string(), "65.00");
/// assert_eq!(totals.tax_amount.to_string(), "5.69");
/// assert_eq!(totals.total.to_string(), "80.69");
/// ```
pub fn calculate_totals(items: &[LineItem], config: &PricingConfiguration) -> CoreResult<Totals> {
    validate_configuration(config)?;
    validate_line_items(items)?;

    let mut gross = Money::zero();
    let mut total_quantity: i64 = 0;

    for item in items {
        let line_total = item
            .line_total()
            .ok_or(CoreError::AmountOverflow { context: "line total" })?;
        gross = gross
            .checked_add(line_total)
            .ok_or(CoreError::AmountOverflow { context: "subtotal" })?;
        total_quantity = total_quantity
            .checked_add(item.quantity)
            .ok_or(CoreError::AmountOverflow {
                context: "total quantity",
            })?;
    }

    // The threshold is compared against what the shopper sees on the shelf.
    let shipping_cost = if gross >= config.free_shipping_threshold {
        Money::zero()
    } else {
        config.flat_shipping_cost
    };

    let bps = config.tax_rate.bps();
    let (subtotal, tax_amount) = if config.prices_include_tax {
        let tax = gross.apply_bps(bps, BPS_PER_UNIT + bps);
        (gross - tax, tax)
    } else {
        (gross, gross.apply_bps(bps, BPS_PER_UNIT))
    };

    let total = subtotal
        .checked_add(tax_amount)
        .and_then(|t| t.checked_add(shipping_cost))
        .ok_or(CoreError::AmountOverflow { context: "total" })?;

    Ok(Totals {
        subtotal,
        total_quantity,
        shipping_cost,
        tax_rate: config.tax_rate,
        tax_amount,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
