//! # Money Module
//!
//! Provides the `Money` type for monetary values.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    10.00 × (1 - 0.1) = 9.000000000000002 with f64 ❌                    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1000 cents - (1000 × 1000 bps / 10000) = 900 cents ✅               │
//! │                                                                         │
//! │  Floats appear only where a collaborator hands us one (exchange rates) │
//! │  and are rounded back to whole cents immediately.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//! use storefront_core::types::DiscountRate;
//!
//! let price = Money::from_cents(1000);                   // $10.00
//! let sale = price.apply_discount(DiscountRate::from_bps(1000));
//! assert_eq!(sale.cents(), 900);                          // $9.00
//! assert_eq!(price.convert(1.5), Some(Money::from_cents(1500)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Order.total_amount ──► PaymentGateway::charge(card, amount)
/// ShippingQuote.cost ──► "Shipping Cost: $10.00 (2 Days)"
/// calculate_discount ──► price - coupon share
/// price_in_currency  ──► price × exchange rate
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a fractional cent amount to the nearest cent.
    ///
    /// `None` when the amount is NaN, infinite, or outside the `i64` range.
    pub fn from_fractional_cents(cents: f64) -> Option<Self> {
        let rounded = cents.round();
        // i64::MAX as f64 rounds up to 2^63, which itself does not fit
        if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
            Some(Money(rounded as i64))
        } else {
            None
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Takes a discount off this amount.
    ///
    /// The discount share is rounded half-up to the cent before it is
    /// subtracted: `(cents × bps + 5000) / 10000`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::DiscountRate;
    ///
    /// let price = Money::from_cents(999); // $9.99
    /// // 20% of 999 = 199.8 → 200
    /// assert_eq!(price.apply_discount(DiscountRate::from_bps(2000)).cents(), 799);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let share = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money(self.0 - share as i64)
    }

    /// Converts this amount with a floating-point exchange rate, rounding to
    /// the nearest cent.
    ///
    /// `None` when the rate is not finite or the result does not fit.
    pub fn convert(&self, rate: f64) -> Option<Money> {
        if !rate.is_finite() {
            return None;
        }
        Money::from_fractional_cents(self.0 as f64 * rate)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$10.99` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1000).to_string(), "$10.00");
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_apply_discount() {
        let ten = Money::from_cents(1000);
        assert_eq!(ten.apply_discount(DiscountRate::from_bps(1000)).cents(), 900);
        assert_eq!(ten.apply_discount(DiscountRate::from_bps(2000)).cents(), 800);
        assert_eq!(ten.apply_discount(DiscountRate::zero()), ten);
    }

    #[test]
    fn test_apply_discount_rounds_share_half_up() {
        // 10% of 5 cents = 0.5 → 1 cent off
        let price = Money::from_cents(5);
        assert_eq!(price.apply_discount(DiscountRate::from_bps(1000)).cents(), 4);
    }

    #[test]
    fn test_convert() {
        assert_eq!(Money::from_cents(1000).convert(1.5), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_cents(999).convert(0.5), Some(Money::from_cents(500)));
        assert_eq!(Money::from_cents(1000).convert(0.0), Some(Money::zero()));
    }

    #[test]
    fn test_convert_refuses_unusable_rates() {
        let price = Money::from_cents(1000);
        assert_eq!(price.convert(f64::NAN), None);
        assert_eq!(price.convert(f64::INFINITY), None);
        assert_eq!(price.convert(1e300), None);
    }

    #[test]
    fn test_from_fractional_cents() {
        assert_eq!(Money::from_fractional_cents(1099.5), Some(Money::from_cents(1100)));
        assert_eq!(Money::from_fractional_cents(-0.4), Some(Money::zero()));
        assert_eq!(Money::from_fractional_cents(9.3e18), None);
        assert_eq!(Money::from_fractional_cents(f64::NAN), None);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert!(!negative.is_positive());
    }
}
