//! # Untyped Input Boundary
//!
//! Entry points for payloads that arrive as JSON (form posts, frontend
//! calls) before they have been given Rust types. A payload that is not even
//! the right kind of value (a number where text belongs, `null`, ...) is
//! rejected here with the same `Invalid ...` messages the typed validators
//! use.
//!
//! ```text
//! serde_json::Value ──► type check ──► typed validator ──► Result
//!        "10"                ✗ InvalidPrice
//!         10    ──► $10.00 ──► calculate_discount ──► Ok($9.00)
//! ```

use serde_json::Value;

use crate::coupons::calculate_discount;
use crate::error::{InputRejected, ValidationError};
use crate::money::Money;
use crate::validation::{is_valid_username, UserInputRules, ValidationResult};

/// `false` for anything that is not a string, otherwise
/// [`is_valid_username`].
pub fn is_valid_username_value(name: &Value) -> bool {
    name.as_str().is_some_and(is_valid_username)
}

/// Reads a JSON number of dollars as [`Money`].
///
/// Strings, booleans, `null`, negative and non-finite numbers are rejected,
/// as are amounts too large to hold in cents.
pub fn price_from_value(price: &Value) -> ValidationResult<Money> {
    let dollars = match price {
        Value::Number(number) => number.as_f64().ok_or(ValidationError::InvalidPrice)?,
        _ => return Err(ValidationError::InvalidPrice),
    };

    if !dollars.is_finite() || dollars < 0.0 {
        return Err(ValidationError::InvalidPrice);
    }

    Money::from_fractional_cents(dollars * 100.0).ok_or(ValidationError::InvalidPrice)
}

/// Applies a coupon to an untyped price and code.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use storefront_core::input::calculate_discount_value;
///
/// assert_eq!(calculate_discount_value(&json!(10), &json!("SAVE10")).unwrap().cents(), 900);
/// assert!(calculate_discount_value(&json!("10"), &json!("SAVE10")).is_err());
/// assert!(calculate_discount_value(&json!(10), &json!(10)).is_err());
/// ```
pub fn calculate_discount_value(price: &Value, code: &Value) -> ValidationResult<Money> {
    let price = price_from_value(price)?;
    let code = code.as_str().ok_or(ValidationError::InvalidDiscountCode)?;
    calculate_discount(price, code)
}

/// Runs the sign-up form check on untyped fields.
///
/// A non-string username or an age that is not a whole non-negative number
/// counts as a failure of that field; all failing fields are reported.
pub fn validate_user_input_value(
    username: &Value,
    age: &Value,
) -> Result<&'static str, InputRejected> {
    let age = age.as_u64().and_then(|age| u32::try_from(age).ok());
    UserInputRules::default().check_parts(username.as_str(), age)
}
