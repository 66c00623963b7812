//! # Validation Module
//!
//! Input validation rules for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Untyped payloads (`input` module)                            │
//! │  ├── null / number / string type checks                                │
//! │  └── Converts JSON values into typed arguments                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Length and range bounds                                           │
//! │  ├── Country driving-age table                                         │
//! │  └── Email format                                                      │
//! │                                                                         │
//! │  Every failure is an `Err(ValidationError)` value, never a panic.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Username Rules
//! `is_valid_username` (5-15 characters) and the username check inside
//! `validate_user_input` (3-255 characters) guard different forms and are
//! configured separately through [`UsernameRules`] and [`UserInputRules`].

use serde::{Deserialize, Serialize};
use std::fmt;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use ts_rs::TS;

use crate::error::{InputRejected, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Message returned when `validate_user_input` accepts its input.
pub const USER_INPUT_ACCEPTED: &str = "Validation successful";

// =============================================================================
// Numeric Validators
// =============================================================================

/// True iff `min <= price <= max` (both ends inclusive).
///
/// ## Example
/// ```rust
/// use storefront_core::validation::is_price_in_range;
///
/// assert!(is_price_in_range(0, 0, 100));
/// assert!(is_price_in_range(100, 0, 100));
/// assert!(!is_price_in_range(-10, 0, 100));
/// ```
pub fn is_price_in_range<T: PartialOrd>(price: T, min: T, max: T) -> bool {
    min <= price && price <= max
}

// =============================================================================
// Username Rules
// =============================================================================

/// Length bounds for the stand-alone username check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UsernameRules {
    #[serde(default = "default_username_min")]
    pub min_length: usize,

    #[serde(default = "default_username_max")]
    pub max_length: usize,
}

fn default_username_min() -> usize {
    5
}

fn default_username_max() -> usize {
    15
}

impl Default for UsernameRules {
    fn default() -> Self {
        UsernameRules {
            min_length: default_username_min(),
            max_length: default_username_max(),
        }
    }
}

impl UsernameRules {
    /// True iff the character count lies within `[min_length, max_length]`.
    pub fn accepts(&self, name: &str) -> bool {
        let length = name.chars().count();
        length >= self.min_length && length <= self.max_length
    }
}

/// Checks a username against the default [`UsernameRules`] (5-15 characters).
pub fn is_valid_username(name: &str) -> bool {
    UsernameRules::default().accepts(name)
}

// =============================================================================
// Composite User Input
// =============================================================================

/// Bounds for the sign-up form check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserInputRules {
    #[serde(default = "default_profile_username_min")]
    pub min_username_length: usize,

    #[serde(default = "default_profile_username_max")]
    pub max_username_length: usize,

    #[serde(default = "default_min_age")]
    pub min_age: u32,

    #[serde(default = "default_max_age")]
    pub max_age: u32,
}

fn default_profile_username_min() -> usize {
    3
}

fn default_profile_username_max() -> usize {
    255
}

fn default_min_age() -> u32 {
    18
}

fn default_max_age() -> u32 {
    100
}

impl Default for UserInputRules {
    fn default() -> Self {
        UserInputRules {
            min_username_length: default_profile_username_min(),
            max_username_length: default_profile_username_max(),
            min_age: default_min_age(),
            max_age: default_max_age(),
        }
    }
}

impl UserInputRules {
    pub(crate) fn username_error(&self) -> ValidationError {
        ValidationError::InvalidUsername {
            min: self.min_username_length,
            max: self.max_username_length,
        }
    }

    pub(crate) fn age_error(&self) -> ValidationError {
        ValidationError::InvalidAge {
            min: self.min_age,
            max: self.max_age,
        }
    }

    fn username_ok(&self, username: &str) -> bool {
        let length = username.chars().count();
        length >= self.min_username_length && length <= self.max_username_length
    }

    fn age_ok(&self, age: u32) -> bool {
        age >= self.min_age && age <= self.max_age
    }

    /// Runs every check and reports all failing fields together.
    pub fn check(&self, username: &str, age: u32) -> Result<&'static str, InputRejected> {
        self.check_parts(Some(username), Some(age))
    }

    /// Same as [`check`](Self::check) with fields that may already have
    /// failed their type check (`None`).
    pub(crate) fn check_parts(
        &self,
        username: Option<&str>,
        age: Option<u32>,
    ) -> Result<&'static str, InputRejected> {
        let mut failures = Vec::new();

        if !username.is_some_and(|name| self.username_ok(name)) {
            failures.push(self.username_error());
        }
        if !age.is_some_and(|age| self.age_ok(age)) {
            failures.push(self.age_error());
        }

        if failures.is_empty() {
            Ok(USER_INPUT_ACCEPTED)
        } else {
            Err(InputRejected { failures })
        }
    }
}

/// Validates sign-up form input against the default [`UserInputRules`].
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_user_input;
///
/// assert!(validate_user_input("dbobe", 44).unwrap().contains("successful"));
/// assert!(validate_user_input("pr", 44).is_err());
/// ```
pub fn validate_user_input(username: &str, age: u32) -> Result<&'static str, InputRejected> {
    UserInputRules::default().check(username, age)
}

// =============================================================================
// Driving Age
// =============================================================================

/// Countries with a known minimum driving age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrivingCountry {
    Us,
    Uk,
}

impl DrivingCountry {
    pub const fn minimum_driving_age(&self) -> u32 {
        match self {
            DrivingCountry::Us => 16,
            DrivingCountry::Uk => 17,
        }
    }
}

impl fmt::Display for DrivingCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrivingCountry::Us => write!(f, "US"),
            DrivingCountry::Uk => write!(f, "UK"),
        }
    }
}

impl FromStr for DrivingCountry {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "US" => Ok(DrivingCountry::Us),
            "UK" => Ok(DrivingCountry::Uk),
            _ => Err(ValidationError::InvalidCountryCode(s.to_string())),
        }
    }
}

/// True iff `age` meets the minimum driving age of `country_code`.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::can_drive;
///
/// assert_eq!(can_drive(16, "US"), Ok(true));
/// assert_eq!(can_drive(16, "UK"), Ok(false));
/// assert!(can_drive(20, "PR").is_err());
/// ```
pub fn can_drive(age: u32, country_code: &str) -> ValidationResult<bool> {
    let country: DrivingCountry = country_code.parse()?;
    Ok(age >= country.minimum_driving_age())
}

// =============================================================================
// Email
// =============================================================================

/// Local part without whitespace or `@`, then two or more dot-separated
/// domain labels of letters, digits and inner hyphens.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[^\s@]+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$",
    )
    .expect("Invalid email regex pattern")
});

/// Validates an email address and returns it with surrounding whitespace
/// removed.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_email;
///
/// assert_eq!(validate_email(" example@gmail.com "), Ok("example@gmail.com"));
/// assert!(validate_email("user@domain").is_err());
/// ```
pub fn validate_email(address: &str) -> ValidationResult<&str> {
    let address = address.trim();

    if !address.contains('@') {
        return Err(ValidationError::InvalidEmail {
            reason: "missing @".into(),
        });
    }
    if !EMAIL_PATTERN.is_match(address) {
        return Err(ValidationError::InvalidEmail {
            reason: "malformed address".into(),
        });
    }

    Ok(address)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_is_price_in_range() {
        let cases = [
            (-10, false), // price < min
            (0, true),    // price = min
            (50, true),   // between
            (100, true),  // price = max
            (200, false), // price > max
        ];
        for (price, expected) in cases {
            assert_eq!(is_price_in_range(price, 0, 100), expected, "price {price}");
        }
    }

    #[test]
    fn test_is_price_in_range_with_money() {
        let min = Money::zero();
        let max = Money::from_cents(10_000);
        assert!(is_price_in_range(Money::from_cents(10_000), min, max));
        assert!(!is_price_in_range(Money::from_cents(10_001), min, max));
    }

    #[test]
    fn test_is_valid_username_bounds() {
        let rules = UsernameRules::default();
        assert!(!is_valid_username(&"b".repeat(rules.min_length - 1)));
        assert!(!is_valid_username(&"b".repeat(rules.max_length + 1)));
        assert!(is_valid_username(&"d".repeat(rules.min_length)));
        assert!(is_valid_username(&"d".repeat(rules.max_length)));
        assert!(is_valid_username(&"d".repeat(rules.min_length + 1)));
        assert!(is_valid_username(&"d".repeat(rules.max_length - 1)));
    }

    #[test]
    fn test_username_rules_count_characters() {
        let rules = UsernameRules {
            min_length: 3,
            max_length: 3,
        };
        assert!(rules.accepts("äöü"));
    }

    #[test]
    fn test_validate_user_input_success() {
        let message = validate_user_input("dbobe", 44).unwrap();
        assert!(message.to_lowercase().contains("success"));
    }

    #[test]
    fn test_validate_user_input_username_bounds() {
        assert!(validate_user_input("pr", 44).is_err());
        assert!(validate_user_input(&"A".repeat(256), 44).is_err());
        assert!(validate_user_input("abc", 44).is_ok());
        assert!(validate_user_input(&"A".repeat(255), 44).is_ok());
    }

    #[test]
    fn test_validate_user_input_age_bounds() {
        assert!(validate_user_input("dbobe", 17).is_err());
        assert!(validate_user_input("dbobe", 101).is_err());
        assert!(validate_user_input("dbobe", 18).is_ok());
        assert!(validate_user_input("dbobe", 100).is_ok());
    }

    #[test]
    fn test_validate_user_input_reports_every_failure() {
        let err = validate_user_input("", 0).unwrap_err();
        let message = err.to_string().to_lowercase();
        assert!(message.contains("invalid username"));
        assert!(message.contains("invalid age"));
        assert_eq!(err.failures.len(), 2);
    }

    #[test]
    fn test_validate_user_input_reports_only_failing_field() {
        let message = validate_user_input("dbobe", 17).unwrap_err().to_string();
        assert!(message.contains("Invalid age"));
        assert!(!message.contains("Invalid username"));
    }

    #[test]
    fn test_can_drive() {
        let cases = [
            (15, "US", false),
            (16, "US", true),
            (17, "US", true),
            (16, "UK", false),
            (17, "UK", true),
            (18, "UK", true),
        ];
        for (age, country, expected) in cases {
            assert_eq!(can_drive(age, country), Ok(expected), "({age}, {country})");
        }
    }

    #[test]
    fn test_can_drive_with_unknown_country() {
        let err = can_drive(20, "PR").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCountryCode("PR".into()));
        assert!(err.to_string().to_lowercase().contains("invalid"));
    }

    #[test]
    fn test_country_code_is_case_insensitive() {
        assert_eq!(can_drive(16, " us "), Ok(true));
        assert_eq!("uk".parse::<DrivingCountry>(), Ok(DrivingCountry::Uk));
    }

    #[test]
    fn test_validate_email_accepts() {
        assert!(validate_email("example@gmail.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example-site.co.uk").is_ok());
        assert_eq!(validate_email("  padded@domain.com  "), Ok("padded@domain.com"));
    }

    #[test]
    fn test_validate_email_reasons() {
        let reason = |address: &str| -> String {
            match validate_email(address) {
                Err(ValidationError::InvalidEmail { reason }) => reason,
                other => panic!("expected rejection, got {other:?}"),
            }
        };
        assert_eq!(reason("a"), "missing @");
        assert_eq!(reason("user@domain"), "malformed address");
    }

    #[test]
    fn test_validate_email_rejects() {
        for address in [
            "a",
            "",
            "@domain.com",
            "user@",
            "user@domain",
            "user@@domain.com",
            "us er@domain.com",
            "user@domain..com",
            "user@-domain.com",
            "user@dom_ain.com",
        ] {
            assert!(validate_email(address).is_err(), "{address:?}");
        }
    }
}
