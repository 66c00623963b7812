//! # Domain Types
//!
//! Records passed between the storefront and its collaborators.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Coupon       │   │     Order       │   │   CreditCard    │       │
//! │  │  code           │   │  total_amount   │   │  number         │       │
//! │  │  discount (bps) │   └────────┬────────┘   └────────┬────────┘       │
//! │  └─────────────────┘            └──────── charge ─────┘                │
//! │                                              │                          │
//! │  ┌─────────────────┐   ┌─────────────────┐   ▼                          │
//! │  │  ShippingQuote  │   │  OrderOutcome   │◄─ ChargeResult { status }    │
//! │  │  cost, days     │   │  success, error │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every record except the coupon catalog lives for a single call.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount in basis points (1 bps = 0.01%).
///
/// 1000 bps = 10%, 2000 bps = 20%, 10000 bps = 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The rate as a fraction of one (2000 bps → 0.2).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10000.0
    }

    /// True for a rate strictly between 0% and 100%.
    #[inline]
    pub const fn is_partial(&self) -> bool {
        self.0 > 0 && self.0 < 10000
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A named discount from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coupon {
    /// Code a customer types at checkout, e.g. `SAVE10`.
    pub code: String,

    /// Share taken off the price. Always strictly between 0% and 100%.
    pub discount: DiscountRate,
}

impl Coupon {
    pub fn new(code: impl Into<String>, discount: DiscountRate) -> Self {
        Coupon {
            code: code.into(),
            discount,
        }
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// A quote returned by the shipping collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShippingQuote {
    pub cost: Money,
    pub estimated_days: u32,
}

// =============================================================================
// Checkout Records
// =============================================================================

/// An order ready to be paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub total_amount: Money,
}

/// Card details supplied for a single charge. Never stored.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreditCard {
    pub credit_card_number: String,
}

impl CreditCard {
    pub fn new(number: impl Into<String>) -> Self {
        CreditCard {
            credit_card_number: number.into(),
        }
    }

    /// Last four digits, for logs and receipts.
    pub fn last_four(&self) -> &str {
        let number = self.credit_card_number.as_str();
        let start = number
            .char_indices()
            .rev()
            .nth(3)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &number[start..]
    }
}

// The full number must never reach a log line.
impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("credit_card_number", &format_args!("****{}", self.last_four()))
            .finish()
    }
}

/// Status reported by the payment collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChargeStatus {
    Success,
    Failed,
    Declined,
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeStatus::Success => write!(f, "success"),
            ChargeStatus::Failed => write!(f, "failed"),
            ChargeStatus::Declined => write!(f, "declined"),
        }
    }
}

/// What the payment collaborator answered for one charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChargeResult {
    pub status: ChargeStatus,
}

impl ChargeResult {
    pub const fn new(status: ChargeStatus) -> Self {
        ChargeResult { status }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == ChargeStatus::Success
    }
}

/// Machine-readable reason attached to a failed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrderErrorCode {
    PaymentError,
}

impl fmt::Display for OrderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderErrorCode::PaymentError => write!(f, "payment_error"),
        }
    }
}

/// Result of submitting an order: `{ success: true }` or
/// `{ success: false, error: "payment_error" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderOutcome {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OrderErrorCode>,
}

impl OrderOutcome {
    pub const fn succeeded() -> Self {
        OrderOutcome {
            success: true,
            error: None,
        }
    }

    pub const fn payment_failed() -> Self {
        OrderOutcome {
            success: false,
            error: Some(OrderErrorCode::PaymentError),
        }
    }
}
