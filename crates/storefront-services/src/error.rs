//! # Service Error Types
//!
//! Error types for collaborator calls and configuration.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Service Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │  Collaborators  │  │     Data Feed           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  PaymentRejected│  │  FetchFailed            │ │
//! │  │  ConfigLoad...  │  │  UnusableRate   │  │                         │ │
//! │  │  ConfigSave...  │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  A declined payment is NOT an error: it is a ChargeResult with a       │
//! │  non-success status. PaymentRejected means the gateway could not       │
//! │  answer at all.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration values are inconsistent.
    #[error("Invalid storefront configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Collaborator Errors
    // =========================================================================
    /// The payment gateway rejected the call itself.
    #[error("Payment gateway rejected the charge: {0}")]
    PaymentRejected(String),

    /// The exchange-rate lookup returned a rate no price can be converted with.
    #[error("Unusable exchange rate {rate} for {from} -> {to}")]
    UnusableRate { from: String, to: String, rate: f64 },

    // =========================================================================
    // Data Feed Errors
    // =========================================================================
    /// The data feed could not produce a result.
    #[error("Data fetch failed: {reason}")]
    FetchFailed { reason: String },
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ServiceError {
    fn from(err: toml::de::Error) -> Self {
        ServiceError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ServiceError {
    fn from(err: toml::ser::Error) -> Self {
        ServiceError::ConfigSaveFailed(err.to_string())
    }
}
