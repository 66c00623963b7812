//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate holds every rule that can be decided without talking to the
//! outside world: prices, coupons, input validation, opening hours, the
//! holiday promotion and a small LIFO container.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-services                             │   │
//! │  │   Checkout ─► PaymentGateway    Accounts ─► EmailSender         │   │
//! │  │   Pricing  ─► ExchangeRates     Pages    ─► PageAnalytics       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌────────┐ ┌───────┐   │   │
//! │  │   │  types  │ │  money  │ │ validation│ │ policy │ │ stack │   │   │
//! │  │   │ Order   │ │  Money  │ │ usernames │ │ Clock  │ │  <T>  │   │   │
//! │  │   │ Coupon  │ │         │ │ coupons   │ │ hours  │ │       │   │   │
//! │  │   └─────────┘ └─────────┘ └───────────┘ └────────┘ └───────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Coupon, Order, CreditCard, ShippingQuote, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`coupons`] - Static coupon catalog and discount calculation
//! - [`validation`] - Username, age, country and email rules
//! - [`input`] - Untyped (JSON) input boundary
//! - [`policy`] - Clock-driven opening hours and holiday promotion
//! - [`stack`] - Generic LIFO container
//! - [`intro`] - Small numeric helpers
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::coupons::calculate_discount;
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(1000); // $10.00
//! let discounted = calculate_discount(price, "SAVE20").unwrap();
//! assert_eq!(discounted.cents(), 800);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coupons;
pub mod error;
pub mod input;
pub mod intro;
pub mod money;
pub mod policy;
pub mod stack;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, InputRejected, ValidationError};
pub use money::Money;
pub use policy::{Clock, FixedClock, HolidayPromotion, OpeningHours, SystemClock};
pub use stack::Stack;
pub use types::*;
