//! # storefront-core: Pure Pricing Logic for the Storefront
//!
//! This crate computes checkout totals: subtotal, shipping, tax and grand
//! total. Every function is pure; nothing here touches a database, a
//! settings store or the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Host application (routing, ORM, views)             │   │
//! │  │    cart/session store ──► checkout workflow ──► order record    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ LineItem + PricingConfiguration        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               storefront-checkout (config, logging)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │ calculate │  │   rules   │  │   │
//! │  │   │  Totals   │  │ rounding  │  │  _totals  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL SETTINGS • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, PricingConfiguration, Totals)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - The totals calculator
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{calculate_totals, LineItem, Money, PricingConfiguration, TaxRate};
//!
//! let config = PricingConfiguration {
//!     tax_rate: TaxRate::from_bps(875), // 8.75%
//!     prices_include_tax: false,
//!     flat_shipping_cost: Money::from_cents(1000),
//!     free_shipping_threshold: Money::from_cents(10000),
//! };
//! let items = [LineItem::new(Money::from_cents(2500), 2)];
//!
//! let totals = calculate_totals(&items, &config).unwrap();
//! assert_eq!(totals.tax_amount.cents(), 438); // 4.375 rounds half-up
//! assert_eq!(totals.total.to_string(), "64.38");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::calculate_totals;
pub use types::*;

/// Number of basis points in 100%.
pub const BPS_PER_UNIT: u32 = 10_000;
