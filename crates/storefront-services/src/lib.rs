//! # storefront-services: Orchestration for the Storefront
//!
//! This crate composes the pure rules from `storefront-core` with the external
//! systems a storefront depends on: exchange rates, shipping quotes,
//! analytics, payments, email and one-time codes.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Storefront (facade)                             │
//! │                                                                         │
//! │   config: StorefrontConfig        clock: Arc<dyn Clock>                 │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │PriceConverter│ │ ShippingInfo │ │ PageRenderer │ │   Checkout   │   │
//! │  │ price × rate │ │ quote → text │ │ track + html │ │ charge → out │   │
//! │  └──────┬───────┘ └──────┬───────┘ └──────┬───────┘ └──────┬───────┘   │
//! │         ▼                ▼                ▼                ▼            │
//! │   ExchangeRates    ShippingQuotes   PageAnalytics    PaymentGateway     │
//! │                                                                         │
//! │  ┌──────────────┐                                                       │
//! │  │   Accounts   │ ──► EmailSender, CodeGenerator                        │
//! │  │ signup/login │                                                       │
//! │  └──────────────┘                                                       │
//! │                                                                         │
//! │  Every collaborator is a trait object. Tests plug in mockall mocks,    │
//! │  the binary plugs in the log-only sandbox implementations.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`collaborators`] - Contracts for every external system
//! - [`config`] - TOML configuration with env overrides
//! - [`error`] - Service error types
//! - [`pricing`] - Currency conversion
//! - [`shipping`] - Shipping quote text
//! - [`pages`] - Page rendering with view tracking
//! - [`checkout`] - Order payment
//! - [`accounts`] - Sign-up and login
//! - [`feed`] - Async number feed
//! - [`sandbox`] - Log-only collaborator implementations
//! - [`storefront`] - The facade wiring it all together
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_services::{Collaborators, Storefront, StorefrontConfig};
//! use storefront_services::sandbox::{FixedRates, ShippingTable};
//!
//! let config = StorefrontConfig::load_or_default(None);
//! let collaborators = Collaborators::sandbox(FixedRates::new(), ShippingTable::new());
//! let storefront = Storefront::new(config, collaborators);
//!
//! if storefront.is_online() {
//!     println!("{}", storefront.render_page().await);
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collaborators;
pub mod config;
pub mod error;

// Orchestration
pub mod accounts;
pub mod checkout;
pub mod feed;
pub mod pages;
pub mod pricing;
pub mod shipping;

pub mod sandbox;
pub mod storefront;

// =============================================================================
// Re-exports
// =============================================================================

pub use accounts::{Accounts, WELCOME_SUBJECT};
pub use checkout::Checkout;
pub use collaborators::{
    CodeGenerator, EmailSender, ExchangeRates, PageAnalytics, PaymentGateway, ShippingQuotes,
};
pub use config::{PricingSettings, StorefrontConfig};
pub use error::{ServiceError, ServiceResult};
pub use feed::fetch_data;
pub use pages::PageRenderer;
pub use pricing::PriceConverter;
pub use shipping::ShippingInfo;
pub use storefront::{Collaborators, Storefront};
