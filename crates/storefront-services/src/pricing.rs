//! # Pricing
//!
//! Converts catalog prices from the base currency into a customer's currency.

use std::sync::Arc;
use storefront_core::Money;
use tracing::{debug, warn};

use crate::collaborators::ExchangeRates;
use crate::error::{ServiceError, ServiceResult};

/// Price conversion backed by an [`ExchangeRates`] collaborator.
#[derive(Clone)]
pub struct PriceConverter {
    rates: Arc<dyn ExchangeRates>,
    base_currency: String,
}

impl PriceConverter {
    pub fn new(rates: Arc<dyn ExchangeRates>, base_currency: impl Into<String>) -> Self {
        PriceConverter {
            rates,
            base_currency: base_currency.into(),
        }
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// `price × rate(base → target)`, rounded to the cent.
    ///
    /// A rate that is not finite, or that pushes the price out of range, is
    /// reported as [`ServiceError::UnusableRate`].
    pub fn price_in_currency(&self, price: Money, target_currency: &str) -> ServiceResult<Money> {
        let rate = self
            .rates
            .exchange_rate(&self.base_currency, target_currency);
        let Some(converted) = price.convert(rate) else {
            warn!(from = %self.base_currency, to = %target_currency, rate, "Unusable exchange rate");
            return Err(ServiceError::UnusableRate {
                from: self.base_currency.clone(),
                to: target_currency.to_string(),
                rate,
            });
        };

        debug!(
            from = %self.base_currency,
            to = %target_currency,
            rate,
            %price,
            %converted,
            "Converted price"
        );

        Ok(converted)
    }
}
