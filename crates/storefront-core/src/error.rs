//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── ValidationError  - A single rejected input field                  │
//! │  ├── InputRejected    - Every failing field of a composite check       │
//! │  └── CoreError        - Misuse of core types (empty stack)             │
//! │                                                                         │
//! │  storefront-services errors (separate crate)                           │
//! │  └── ServiceError     - Collaborator / configuration failures          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Validation messages start with "Invalid" and name the field
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors signalling misuse of a core type.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// `pop` or `peek` was called on a stack holding no items.
    ///
    /// ## When This Occurs
    /// - Popping more times than pushing
    /// - Peeking right after `clear()`
    #[error("Stack is empty: cannot {operation}")]
    EmptyStack { operation: &'static str },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Returned as ordinary `Err` values so callers can branch on them; none of
/// the validators panic.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Price is negative or not a number.
    #[error("Invalid price: must be a non-negative amount")]
    InvalidPrice,

    /// Discount code was not given as text.
    #[error("Invalid discount code: must be text")]
    InvalidDiscountCode,

    /// Username is missing, not text, or outside the allowed length.
    #[error("Invalid username: must be between {min} and {max} characters")]
    InvalidUsername { min: usize, max: usize },

    /// Age is missing, not a whole number, or outside the allowed range.
    #[error("Invalid age: must be between {min} and {max}")]
    InvalidAge { min: u32, max: u32 },

    /// Country code has no entry in the driving-age table.
    #[error("Invalid country code: {0}")]
    InvalidCountryCode(String),

    /// Email address failed the format check.
    #[error("Invalid email: {reason}")]
    InvalidEmail { reason: String },
}

// =============================================================================
// Composite Rejection
// =============================================================================

/// Every failing field of a composite validation.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_user_input;
///
/// let err = validate_user_input("", 0).unwrap_err();
/// let message = err.to_string().to_lowercase();
/// assert!(message.contains("invalid username"));
/// assert!(message.contains("invalid age"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{}", join_messages(.failures))]
pub struct InputRejected {
    pub failures: Vec<ValidationError>,
}

fn join_messages(failures: &[ValidationError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
