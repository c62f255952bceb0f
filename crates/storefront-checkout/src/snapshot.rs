//! # Order Snapshots
//!
//! Freezes the line items, the rule set and the computed totals at the moment
//! an order is placed. The host application stores the JSON form alongside its
//! order record so later changes to tax settings or shipping rules never alter
//! what the customer was charged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::{calculate_totals, LineItem, PricingConfiguration, Totals};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::CheckoutResult;

/// Totals frozen together with everything needed to explain them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// When the totals were computed.
    pub captured_at: DateTime<Utc>,

    /// Currency code (ISO 4217) the amounts are expressed in.
    pub currency_code: String,

    /// Line items at time of capture (frozen).
    pub items: Vec<LineItem>,

    /// Rule set at time of capture (frozen).
    pub pricing: PricingConfiguration,

    pub totals: Totals,
}

impl OrderSnapshot {
    /// Computes totals and freezes them.
    #[instrument(skip_all, fields(items = items.len(), currency = currency_code))]
    pub fn capture(
        items: &[LineItem],
        pricing: &PricingConfiguration,
        currency_code: &str,
    ) -> CheckoutResult<Self> {
        let totals = calculate_totals(items, pricing)?;
        let snapshot = OrderSnapshot {
            id: Uuid::new_v4(),
            captured_at: Utc::now(),
            currency_code: currency_code.to_string(),
            items: items.to_vec(),
            pricing: *pricing,
            totals,
        };

        debug!(snapshot_id = %snapshot.id, total = %snapshot.totals.total, "Order snapshot captured");
        Ok(snapshot)
    }

    /// Serializes the snapshot for persistence.
    pub fn to_json(&self) -> CheckoutResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restores a persisted snapshot.
    pub fn from_json(json: &str) -> CheckoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Recomputes the totals from the frozen items and rule set and checks
    /// they still match what was stored.
    pub fn is_consistent(&self) -> bool {
        calculate_totals(&self.items, &self.pricing)
            .map(|totals| totals == self.totals)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckoutError;
    use storefront_core::{CoreError, Money};

    fn items() -> Vec<LineItem> {
        vec![
            LineItem::new(Money::from_cents(2500), 2),
            LineItem::new(Money::from_cents(1500), 1),
        ]
    }

    #[test]
    fn test_capture_freezes_totals() {
        let snapshot = OrderSnapshot::capture(&items(), &PricingConfiguration::default(), "USD").unwrap();

        assert_eq!(snapshot.currency_code, "USD");
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.totals.total, Money::from_cents(8069));
        assert!(snapshot.is_consistent());
    }

    #[test]
    fn test_each_capture_gets_its_own_id() {
        let config = PricingConfiguration::default();
        let a = OrderSnapshot::capture(&items(), &config, "USD").unwrap();
        let b = OrderSnapshot::capture(&items(), &config, "USD").unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.totals, b.totals);
    }

    #[test]
    fn test_json_persistence() {
        let snapshot = OrderSnapshot::capture(&items(), &PricingConfiguration::default(), "USD").unwrap();
        let json = snapshot.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totals"]["total"], 8069);
        assert_eq!(value["pricing"]["tax_rate"], 875);

        assert_eq!(OrderSnapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_tampered_snapshot_is_inconsistent() {
        let mut snapshot =
            OrderSnapshot::capture(&items(), &PricingConfiguration::default(), "USD").unwrap();
        snapshot.totals.total = Money::from_cents(1);
        assert!(!snapshot.is_consistent());
    }

    #[test]
    fn test_capture_propagates_pricing_errors() {
        let bad = vec![LineItem::new(Money::from_cents(100), 0)];
        let err = OrderSnapshot::capture(&bad, &PricingConfiguration::default(), "USD").unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Pricing(CoreError::InvalidLineItem { index: 0, .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            OrderSnapshot::from_json("{not json"),
            Err(CheckoutError::Serialize(_))
        ));
    }
}
