//! # Checkout
//!
//! Charges the customer for an order and maps the gateway's answer to an
//! [`OrderOutcome`].
//!
//! ## Order Flow
//! ```text
//! submit_order(order, card)
//!      │
//!      ▼
//! gateway.charge(card, order.total_amount)   ← always exactly once
//!      │
//!      ├── Ok(status = success) ──────► { success: true }
//!      ├── Ok(any other status) ──────► { success: false, error: "payment_error" }
//!      └── Err(gateway rejected) ─────► { success: false, error: "payment_error" }
//! ```
//!
//! A failed payment is an ordinary outcome, never an `Err`.

use std::sync::Arc;
use storefront_core::{CreditCard, Order, OrderOutcome};
use tracing::{info, warn};

use crate::collaborators::PaymentGateway;

#[derive(Clone)]
pub struct Checkout {
    payments: Arc<dyn PaymentGateway>,
}

impl Checkout {
    pub fn new(payments: Arc<dyn PaymentGateway>) -> Self {
        Checkout { payments }
    }

    pub async fn submit_order(&self, order: &Order, card: &CreditCard) -> OrderOutcome {
        let amount = order.total_amount;

        match self.payments.charge(card, amount).await {
            Ok(result) if result.is_success() => {
                info!(%amount, card = %card.last_four(), "Order paid");
                OrderOutcome::succeeded()
            }
            Ok(result) => {
                warn!(%amount, card = %card.last_four(), status = %result.status, "Payment not successful");
                OrderOutcome::payment_failed()
            }
            Err(e) => {
                warn!(%amount, card = %card.last_four(), error = %e, "Payment gateway rejected charge");
                OrderOutcome::payment_failed()
            }
        }
    }
}
