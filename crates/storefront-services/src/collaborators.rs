//! # Collaborator Contracts
//!
//! Narrow traits for every external system the storefront calls. Services
//! hold them as `Arc<dyn Trait>`, so a production client, the
//! [`sandbox`](crate::sandbox) stand-ins and test mocks are interchangeable.
//!
//! ```text
//! ┌──────────────────┬──────────────────────────────────────┬──────────┐
//! │ Trait            │ Call                                 │ Mode     │
//! ├──────────────────┼──────────────────────────────────────┼──────────┤
//! │ ExchangeRates    │ exchange_rate(from, to) -> f64       │ sync     │
//! │ ShippingQuotes   │ shipping_quote(dest) -> Option<...>  │ sync     │
//! │ PageAnalytics    │ track_page_view(path)                │ sync     │
//! │ PaymentGateway   │ charge(card, amount) -> ChargeResult │ async    │
//! │ EmailSender      │ send_email(recipient, message)       │ detached │
//! │ CodeGenerator    │ generate_code() -> u32               │ sync     │
//! └──────────────────┴──────────────────────────────────────┴──────────┘
//! ```

use async_trait::async_trait;
use storefront_core::{ChargeResult, CreditCard, Money, ShippingQuote};

use crate::error::ServiceResult;

/// Currency exchange-rate lookup.
#[cfg_attr(test, mockall::automock)]
pub trait ExchangeRates: Send + Sync {
    /// Units of `to` bought by one unit of `from`.
    fn exchange_rate(&self, from: &str, to: &str) -> f64;
}

/// Shipping-quote lookup.
#[cfg_attr(test, mockall::automock)]
pub trait ShippingQuotes: Send + Sync {
    /// `None` when the destination cannot be served.
    fn shipping_quote(&self, destination: &str) -> Option<ShippingQuote>;
}

/// Page-view analytics.
#[cfg_attr(test, mockall::automock)]
pub trait PageAnalytics: Send + Sync {
    fn track_page_view(&self, path: &str);
}

/// Card payment provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charges `amount` to `card`.
    ///
    /// A declined card is an `Ok` with a non-success status; `Err` means the
    /// gateway could not be asked at all.
    async fn charge(&self, card: &CreditCard, amount: Money) -> ServiceResult<ChargeResult>;
}

/// Outgoing email.
#[cfg_attr(test, mockall::automock)]
pub trait EmailSender: Send + Sync {
    /// Queues a message; delivery is not awaited.
    fn send_email(&self, recipient: &str, message: &str);
}

/// Security one-time code generator.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    fn generate_code(&self) -> u32;
}
