//! # Shipping Info
//!
//! Turns a shipping quote into the line shown at checkout.

use std::sync::Arc;
use storefront_core::ShippingQuote;
use tracing::debug;

use crate::collaborators::ShippingQuotes;

/// Text shown when no quote is available for a destination.
pub const SHIPPING_UNAVAILABLE: &str = "Shipping Unavailable";

/// Formats a quote, e.g. `Shipping Cost: $10.00 (2 Days)`.
pub fn format_quote(quote: &ShippingQuote) -> String {
    let unit = if quote.estimated_days == 1 { "Day" } else { "Days" };
    format!(
        "Shipping Cost: {} ({} {})",
        quote.cost, quote.estimated_days, unit
    )
}

#[derive(Clone)]
pub struct ShippingInfo {
    quotes: Arc<dyn ShippingQuotes>,
}

impl ShippingInfo {
    pub fn new(quotes: Arc<dyn ShippingQuotes>) -> Self {
        ShippingInfo { quotes }
    }

    /// Checkout line for `destination`.
    pub fn shipping_info(&self, destination: &str) -> String {
        match self.quotes.shipping_quote(destination) {
            Some(quote) => format_quote(&quote),
            None => {
                debug!(%destination, "No shipping quote available");
                SHIPPING_UNAVAILABLE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::MockShippingQuotes;
    use storefront_core::Money;

    fn info_with(quote: Option<ShippingQuote>) -> ShippingInfo {
        let mut quotes = MockShippingQuotes::new();
        quotes
            .expect_shipping_quote()
            .withf(|destination| destination == "London")
            .times(1)
            .return_const(quote);
        ShippingInfo::new(Arc::new(quotes))
    }

    #[test]
    fn test_shipping_unavailable_without_quote() {
        let result = info_with(None).shipping_info("London");
        assert!(result.to_lowercase().contains("unavailable"));
    }

    #[test]
    fn test_shipping_info_with_quote() {
        let result = info_with(Some(ShippingQuote {
            cost: Money::from_cents(1000),
            estimated_days: 2,
        }))
        .shipping_info("London");

        assert!(result.contains("$10"));
        assert!(result.to_lowercase().contains("2 days"));
    }

    #[test]
    fn test_format_quote_single_day() {
        let quote = ShippingQuote {
            cost: Money::from_cents(599),
            estimated_days: 1,
        };
        assert_eq!(format_quote(&quote), "Shipping Cost: $5.99 (1 Day)");
    }
}
