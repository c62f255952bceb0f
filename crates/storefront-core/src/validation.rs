//! # Validation Module
//!
//! Fail-fast checks run by [`crate::calculate_totals`] before any arithmetic.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront forms / SPA                                       │
//! │  └── Quantity pickers, price inputs in the admin screens               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: storefront-checkout                                          │
//! │  └── Settings parsing (tax rate fraction, decimal amounts)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── unit_price >= 0, quantity >= 1                                    │
//! │  └── shipping cost >= 0, threshold >= 0, tax rate <= 100%              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_price, validate_quantity};
//! use storefront_core::Money;
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(0).is_err());
//! assert!(validate_price(Money::from_cents(-1)).is_err());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{LineItem, PricingConfiguration, TaxRate};
use crate::BPS_PER_UNIT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    non_negative(price, "unit_price")
}

/// Validates a tax rate.
///
/// ## Rules
/// - Must be between 0 and 10000 bps (0% to 100%)
pub fn validate_tax_rate(rate: TaxRate) -> ValidationResult<()> {
    if rate.bps() > BPS_PER_UNIT {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: BPS_PER_UNIT as i64,
        });
    }

    Ok(())
}

fn non_negative(amount: Money, field: &str) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Validates a single line item.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_price(item.unit_price)?;
    validate_quantity(item.quantity)
}

/// Validates every line item, reporting the position of the first bad one.
pub fn validate_line_items(items: &[LineItem]) -> CoreResult<()> {
    for (index, item) in items.iter().enumerate() {
        validate_line_item(item).map_err(|source| CoreError::InvalidLineItem { index, source })?;
    }

    Ok(())
}

/// Validates a pricing configuration.
///
/// ## Rules
/// - `tax_rate` at most 100%
/// - `flat_shipping_cost` non-negative
/// - `free_shipping_threshold` non-negative
pub fn validate_configuration(config: &PricingConfiguration) -> CoreResult<()> {
    validate_tax_rate(config.tax_rate)
        .and_then(|_| non_negative(config.flat_shipping_cost, "flat_shipping_cost"))
        .and_then(|_| non_negative(config.free_shipping_threshold, "free_shipping_threshold"))
        .map_err(CoreError::InvalidConfiguration)
}

// =============================================================================
// Unit Tests
// =============================================================================
