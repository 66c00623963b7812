//! # Sandbox Collaborators
//!
//! Stand-in implementations of every collaborator contract. They only log
//! what a real provider would have done, which is enough to run the
//! storefront end to end without network access. Swapping in a real provider
//! means implementing the same trait.

use async_trait::async_trait;
use rand::Rng;
use std::collections::HashMap;
use storefront_core::{ChargeResult, ChargeStatus, CreditCard, Money, ShippingQuote};
use tracing::{info, warn};
use uuid::Uuid;

use crate::collaborators::{
    CodeGenerator, EmailSender, ExchangeRates, PageAnalytics, PaymentGateway, ShippingQuotes,
};
use crate::error::ServiceResult;

// ---------------------------------------------------------------------------
// Exchange rates
// ---------------------------------------------------------------------------

/// Fixed exchange-rate table.
#[derive(Debug, Clone, Default)]
pub struct FixedRates {
    rates: HashMap<(String, String), f64>,
}

impl FixedRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, from: &str, to: &str, rate: f64) -> Self {
        self.rates
            .insert((from.to_uppercase(), to.to_uppercase()), rate);
        self
    }
}

impl ExchangeRates for FixedRates {
    fn exchange_rate(&self, from: &str, to: &str) -> f64 {
        let (from, to) = (from.to_uppercase(), to.to_uppercase());
        if from == to {
            return 1.0;
        }
        match self.rates.get(&(from.clone(), to.clone())) {
            Some(rate) => *rate,
            None => {
                warn!(%from, %to, "No sandbox rate for pair, using 1.0");
                1.0
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Shipping
// ---------------------------------------------------------------------------

/// Per-destination shipping table. Unknown destinations get no quote.
#[derive(Debug, Clone, Default)]
pub struct ShippingTable {
    quotes: HashMap<String, ShippingQuote>,
}

impl ShippingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, destination: &str, quote: ShippingQuote) -> Self {
        self.quotes.insert(destination.to_lowercase(), quote);
        self
    }
}

impl ShippingQuotes for ShippingTable {
    fn shipping_quote(&self, destination: &str) -> Option<ShippingQuote> {
        self.quotes.get(&destination.to_lowercase()).copied()
    }
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

/// Logs page views.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAnalytics;

impl PageAnalytics for LoggingAnalytics {
    fn track_page_view(&self, path: &str) {
        info!(channel = "ANALYTICS", %path, "Sandbox page view");
    }
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

/// Approves positive amounts on cards that pass the Luhn check.
#[derive(Debug, Clone, Copy, Default)]
pub struct SandboxPaymentGateway;

/// Luhn checksum over the digits of `number`; any non-digit fails.
pub fn luhn_valid(number: &str) -> bool {
    let digits: Option<Vec<u32>> = number.chars().map(|c| c.to_digit(10)).collect();
    let digits = match digits {
        Some(d) if !d.is_empty() => d,
        _ => return false,
    };

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

#[async_trait]
impl PaymentGateway for SandboxPaymentGateway {
    async fn charge(&self, card: &CreditCard, amount: Money) -> ServiceResult<ChargeResult> {
        let status = if !amount.is_positive() {
            ChargeStatus::Failed
        } else if !luhn_valid(&card.credit_card_number) {
            ChargeStatus::Declined
        } else {
            ChargeStatus::Success
        };

        let transaction_id = Uuid::new_v4().to_string();
        info!(
            channel = "PAYMENT",
            %transaction_id,
            card = %card.last_four(),
            %amount,
            %status,
            "Sandbox charge"
        );

        Ok(ChargeResult::new(status))
    }
}

// ---------------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------------

/// Logs outgoing email instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEmailSender;

impl EmailSender for LoggingEmailSender {
    fn send_email(&self, recipient: &str, message: &str) {
        info!(channel = "EMAIL", %recipient, %message, "Sandbox email");
    }
}

// ---------------------------------------------------------------------------
// Security codes
// ---------------------------------------------------------------------------

/// Random six-digit one-time codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate_code(&self) -> u32 {
        rand::rng().random_range(100_000..1_000_000)
    }
}
