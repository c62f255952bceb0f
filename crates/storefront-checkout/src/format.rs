//! # Display Formatting
//!
//! Turns [`Totals`] into labelled strings for the order summary page and
//! confirmation mail. Localised labels belong to the host's string store;
//! the labels here are the English fallbacks.

use serde::Serialize;
use storefront_core::{Money, Totals};

use crate::config::StoreSettings;

/// Formats an amount with the store's currency symbol.
///
/// ## Example
/// ```rust
/// use storefront_checkout::config::StoreSettings;
/// use storefront_checkout::format::format_amount;
/// use storefront_core::Money;
///
/// let store = StoreSettings::default();
/// assert_eq!(format_amount(Money::from_cents(1234), &store), "$12.34");
/// assert_eq!(format_amount(Money::from_cents(-550), &store), "-$5.50");
/// ```
pub fn format_amount(amount: Money, store: &StoreSettings) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = Money::from_cents(amount.cents().saturating_abs());
    format!("{}{}{}", sign, store.currency_symbol, abs)
}

/// One row of the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

/// Builds the summary rows: subtotal, shipping, tax, total.
///
/// Shipping shows "Free" once the threshold is reached. With tax-inclusive
/// prices the tax row reads "Includes tax".
pub fn summary_lines(totals: &Totals, store: &StoreSettings, prices_include_tax: bool) -> Vec<SummaryLine> {
    let line = |label: String, value: String| SummaryLine { label, value };

    let shipping = if totals.ships_free() {
        "Free".to_string()
    } else {
        format_amount(totals.shipping_cost, store)
    };

    let tax_label = if prices_include_tax {
        format!("Includes tax ({})", totals.tax_rate)
    } else {
        format!("Tax ({})", totals.tax_rate)
    };

    vec![
        line(
            format!("Subtotal ({} items)", totals.total_quantity),
            format_amount(totals.subtotal, store),
        ),
        line("Shipping".to_string(), shipping),
        line(tax_label, format_amount(totals.tax_amount, store)),
        line("Total".to_string(), format_amount(totals.total, store)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::TaxRate;

    fn sample_totals(shipping_cents: i64) -> Totals {
        Totals {
            subtotal: Money::from_cents(5000),
            total_quantity: 2,
            shipping_cost: Money::from_cents(shipping_cents),
            tax_rate: TaxRate::from_bps(875),
            tax_amount: Money::from_cents(438),
            total: Money::from_cents(5438 + shipping_cents),
        }
    }

    #[test]
    fn test_format_amount() {
        let store = StoreSettings::default();
        assert_eq!(format_amount(Money::from_cents(100), &store), "$1.00");
        assert_eq!(format_amount(Money::from_cents(1), &store), "$0.01");
        assert_eq!(format_amount(Money::zero(), &store), "$0.00");
        assert_eq!(format_amount(Money::from_cents(123456789), &store), "$1234567.89");

        let euro = StoreSettings {
            currency_code: "EUR".to_string(),
            currency_symbol: "€".to_string(),
        };
        assert_eq!(format_amount(Money::from_cents(1999), &euro), "€19.99");
    }

    #[test]
    fn test_summary_lines() {
        let store = StoreSettings::default();
        let lines = summary_lines(&sample_totals(1000), &store, false);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].label, "Subtotal (2 items)");
        assert_eq!(lines[0].value, "$50.00");
        assert_eq!(lines[1].value, "$10.00");
        assert_eq!(lines[2].label, "Tax (8.75%)");
        assert_eq!(lines[2].value, "$4.38");
        assert_eq!(lines[3].value, "$64.38");
    }

    #[test]
    fn test_summary_lines_free_shipping_and_inclusive_tax() {
        let store = StoreSettings::default();
        let lines = summary_lines(&sample_totals(0), &store, true);

        assert_eq!(lines[1].value, "Free");
        assert_eq!(lines[2].label, "Includes tax (8.75%)");
    }
}
