//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Pricing rule violations                        │
//! │  └── ValidationError  - Field-level validation failures                │
//! │                                                                         │
//! │  storefront-checkout errors (separate crate)                           │
//! │  ├── ConfigError      - Settings could not be loaded or parsed         │
//! │  └── CheckoutError    - What the checkout workflow sees                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CheckoutError → caller            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing errors.
///
/// All of these are raised before any arithmetic happens, except
/// [`CoreError::AmountOverflow`]. The caller decides whether to abort the
/// checkout or re-prompt the shopper.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A line item has a negative unit price or a quantity below one.
    ///
    /// `index` is the position of the item in the slice passed to
    /// [`crate::calculate_totals`].
    #[error("Invalid line item at position {index}: {source}")]
    InvalidLineItem {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// The pricing configuration cannot produce meaningful totals.
    #[error("Invalid pricing configuration: {0}")]
    InvalidConfiguration(#[source] ValidationError),

    /// Sums exceed what an `i64` of minor units can hold.
    #[error("Amount overflow while computing {context}")]
    AmountOverflow { context: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., an amount with three decimal places).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_line_item_message() {
        let err = CoreError::InvalidLineItem {
            index: 2,
            source: ValidationError::MustBePositive {
                field: "quantity".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Invalid line item at position 2: quantity must be positive"
        );
    }

    #[test]
    fn test_invalid_configuration_message() {
        let err = CoreError::InvalidConfiguration(ValidationError::MustNotBeNegative {
            field: "free_shipping_threshold".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Invalid pricing configuration: free_shipping_threshold must not be negative"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "tax_rate".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
