//! # Checkout
//!
//! The entry point the storefront's checkout workflow talks to.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StorefrontConfig::load()                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Checkout::from_config() ── parse tax rate / amounts once at startup    │
//! │       │                                                                 │
//! │       ├──► quote(items)    ── cart page, mini-cart, summary sidebar     │
//! │       │                                                                 │
//! │       └──► place(items)    ── OrderSnapshot for the order record        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Checkout` is immutable after construction and can be shared across
//! request handlers behind an `Arc` without locking.

use storefront_core::{calculate_totals, LineItem, PricingConfiguration, Totals};
use tracing::{debug, warn};

use crate::config::{StoreSettings, StorefrontConfig};
use crate::error::CheckoutResult;
use crate::format::{summary_lines, SummaryLine};
use crate::snapshot::OrderSnapshot;

/// Pricing rules and store presentation, resolved once.
#[derive(Debug, Clone)]
pub struct Checkout {
    pricing: PricingConfiguration,
    store: StoreSettings,
}

impl Checkout {
    /// Builds a checkout from explicit parts.
    pub fn new(pricing: PricingConfiguration, store: StoreSettings) -> Self {
        Checkout { pricing, store }
    }

    /// Parses the pricing settings out of a loaded configuration.
    pub fn from_config(config: &StorefrontConfig) -> CheckoutResult<Self> {
        let pricing = config.pricing_configuration()?;
        debug!(
            tax_rate = %pricing.tax_rate,
            prices_include_tax = pricing.prices_include_tax,
            flat_shipping_cost = %pricing.flat_shipping_cost,
            free_shipping_threshold = %pricing.free_shipping_threshold,
            "Pricing rules resolved"
        );
        Ok(Checkout::new(pricing, config.store.clone()))
    }

    /// The rule set in effect.
    pub fn pricing(&self) -> &PricingConfiguration {
        &self.pricing
    }

    /// The store presentation settings.
    pub fn store(&self) -> &StoreSettings {
        &self.store
    }

    /// Computes totals for display. Nothing is recorded.
    pub fn quote(&self, items: &[LineItem]) -> CheckoutResult<Totals> {
        match calculate_totals(items, &self.pricing) {
            Ok(totals) => {
                debug!(
                    items = items.len(),
                    subtotal = %totals.subtotal,
                    shipping = %totals.shipping_cost,
                    tax = %totals.tax_amount,
                    total = %totals.total,
                    "Quote computed"
                );
                Ok(totals)
            }
            Err(err) => {
                warn!(error = %err, items = items.len(), "Quote rejected");
                Err(err.into())
            }
        }
    }

    /// Quotes and renders the summary rows in one step.
    pub fn summary(&self, items: &[LineItem]) -> CheckoutResult<Vec<SummaryLine>> {
        let totals = self.quote(items)?;
        Ok(summary_lines(&totals, &self.store, self.pricing.prices_include_tax))
    }

    /// Computes and freezes the totals for an order being placed.
    pub fn place(&self, items: &[LineItem]) -> CheckoutResult<OrderSnapshot> {
        OrderSnapshot::capture(items, &self.pricing, &self.store.currency_code).map_err(|err| {
            warn!(error = %err, items = items.len(), "Order snapshot rejected");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckoutError;
    use storefront_core::{CoreError, Money};

    fn checkout() -> Checkout {
        Checkout::from_config(&StorefrontConfig::default()).unwrap()
    }

    #[test]
    fn test_quote_uses_configured_rules() {
        let totals = checkout()
            .quote(&[LineItem::new(Money::from_cents(2500), 2)])
            .unwrap();

        assert_eq!(totals.subtotal, Money::from_cents(5000));
        assert_eq!(totals.tax_amount, Money::from_cents(438));
        assert_eq!(totals.total, Money::from_cents(6438));
    }

    #[test]
    fn test_quote_empty_cart() {
        let totals = checkout().quote(&[]).unwrap();
        assert_eq!(totals.total, Money::from_cents(1000));
    }

    #[test]
    fn test_quote_rejects_negative_price() {
        let err = checkout()
            .quote(&[LineItem::new(Money::from_cents(-1), 1)])
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Pricing(CoreError::InvalidLineItem { .. })
        ));
    }

    #[test]
    fn test_from_config_rejects_bad_settings() {
        let mut config = StorefrontConfig::default();
        config.pricing.tax_rate = "eight percent".to_string();
        assert!(matches!(
            Checkout::from_config(&config),
            Err(CheckoutError::Config(_))
        ));
    }

    #[test]
    fn test_summary_rows() {
        let rows = checkout()
            .summary(&[LineItem::new(Money::from_cents(15000), 1)])
            .unwrap();
        assert_eq!(rows[1].value, "Free");
        assert_eq!(rows[3].value, "$163.13");
    }

    #[test]
    fn test_place_records_currency() {
        let mut config = StorefrontConfig::default();
        config.store.currency_code = "CAD".to_string();
        let checkout = Checkout::from_config(&config).unwrap();

        let snapshot = checkout
            .place(&[LineItem::new(Money::from_cents(2500), 2)])
            .unwrap();
        assert_eq!(snapshot.currency_code, "CAD");
        assert_eq!(snapshot.pricing, *checkout.pricing());
    }
}
