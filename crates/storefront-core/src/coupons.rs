//! # Coupons
//!
//! The static coupon catalog and discount calculation.
//!
//! The catalog is built once on first use and never mutated afterwards, so
//! any number of callers may read it without synchronisation.

use std::sync::LazyLock;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Coupon, DiscountRate};
use crate::validation::ValidationResult;

static CATALOG: LazyLock<Vec<Coupon>> = LazyLock::new(|| {
    vec![
        Coupon::new("SAVE10", DiscountRate::from_bps(1000)),
        Coupon::new("SAVE20", DiscountRate::from_bps(2000)),
    ]
});

/// Returns every coupon in the catalog.
pub fn coupons() -> &'static [Coupon] {
    &CATALOG
}

/// Looks up a coupon by its exact code.
pub fn find_coupon(code: &str) -> Option<&'static Coupon> {
    CATALOG.iter().find(|coupon| coupon.code == code)
}

/// Applies a coupon code to a price.
///
/// ## Rules
/// - Negative prices are rejected with `InvalidPrice`
/// - A known code takes its discount off the price
/// - An unknown code leaves the price unchanged
///
/// ## Example
/// ```rust
/// use storefront_core::coupons::calculate_discount;
/// use storefront_core::money::Money;
///
/// let ten = Money::from_cents(1000);
/// assert_eq!(calculate_discount(ten, "SAVE10").unwrap().cents(), 900);
/// assert_eq!(calculate_discount(ten, "INVALID").unwrap(), ten);
/// assert!(calculate_discount(Money::from_cents(-1000), "SAVE10").is_err());
/// ```
pub fn calculate_discount(price: Money, code: &str) -> ValidationResult<Money> {
    if price.is_negative() {
        return Err(ValidationError::InvalidPrice);
    }

    Ok(match find_coupon(code) {
        Some(coupon) => price.apply_discount(coupon.discount),
        None => price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_not_empty() {
        assert!(!coupons().is_empty());
    }

    #[test]
    fn test_catalog_codes_are_non_empty() {
        for coupon in coupons() {
            assert!(!coupon.code.trim().is_empty());
        }
    }

    #[test]
    fn test_catalog_discounts_are_between_zero_and_one() {
        for coupon in coupons() {
            let fraction = coupon.discount.fraction();
            assert!(fraction > 0.0 && fraction < 1.0, "{}", coupon.code);
        }
    }

    #[test]
    fn test_calculate_discount_with_valid_code() {
        let ten = Money::from_cents(1000);
        assert_eq!(calculate_discount(ten, "SAVE10"), Ok(Money::from_cents(900)));
        assert_eq!(calculate_discount(ten, "SAVE20"), Ok(Money::from_cents(800)));
    }

    #[test]
    fn test_calculate_discount_with_unknown_code() {
        let ten = Money::from_cents(1000);
        assert_eq!(calculate_discount(ten, "INVALID"), Ok(ten));
        assert_eq!(calculate_discount(ten, ""), Ok(ten));
        // Codes are matched exactly
        assert_eq!(calculate_discount(ten, "save10"), Ok(ten));
    }

    #[test]
    fn test_calculate_discount_with_negative_price() {
        let err = calculate_discount(Money::from_cents(-1000), "SAVE10").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPrice);
        assert!(err.to_string().to_lowercase().contains("invalid"));
    }

    #[test]
    fn test_calculate_discount_with_zero_price() {
        assert_eq!(calculate_discount(Money::zero(), "SAVE20"), Ok(Money::zero()));
    }

    #[test]
    fn test_calculate_discount_matches_rate_formula() {
        for cents in [0, 1, 99, 1000, 12_345, 1_000_000] {
            let price = Money::from_cents(cents);
            for coupon in coupons() {
                let expected =
                    cents - (cents * coupon.discount.bps() as i64 + 5000) / 10000;
                assert_eq!(
                    calculate_discount(price, &coupon.code).unwrap().cents(),
                    expected
                );
            }
        }
    }
}
