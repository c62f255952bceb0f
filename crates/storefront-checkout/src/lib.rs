//! # storefront-checkout
//!
//! Wraps the pure [`storefront_core`] calculator with the pieces a running
//! storefront needs: layered configuration, structured logging, summary
//! formatting and order snapshots.
//!
//! ## Usage
//! ```rust,no_run
//! use storefront_checkout::{init_tracing, Checkout, StorefrontConfig};
//! use storefront_core::{LineItem, Money};
//!
//! let config = StorefrontConfig::load()?;
//! init_tracing(&config.log.filter);
//!
//! let checkout = Checkout::from_config(&config)?;
//! let cart = [LineItem::new(Money::from_cents(2500), 2)];
//!
//! let totals = checkout.quote(&cart)?;
//! let snapshot = checkout.place(&cart)?;
//! println!("{} -> {}", totals.total, snapshot.to_json()?);
//! # Ok::<(), storefront_checkout::CheckoutError>(())
//! ```

pub mod checkout;
pub mod config;
pub mod error;
pub mod format;
pub mod snapshot;
pub mod telemetry;

pub use self::checkout::Checkout;
pub use self::config::StorefrontConfig;
pub use self::error::{CheckoutError, CheckoutResult, ConfigError};
pub use self::snapshot::OrderSnapshot;
pub use self::telemetry::init_tracing;
