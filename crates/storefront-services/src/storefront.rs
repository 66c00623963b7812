//! # Storefront Facade
//!
//! Bundles the orchestration services with the configuration and clock they
//! share, so an application wires collaborators once.
//!
//! ```text
//! Collaborators ─┐
//! Config ────────┼──► Storefront ──► pricing / shipping / pages
//! Clock ─────────┘                   checkout / accounts
//!                                    is_online / current_discount
//!                                    is_valid_username / validate_user_input
//! ```

use std::sync::Arc;
use storefront_core::policy::{get_discount, is_online};
use storefront_core::{
    Clock, CreditCard, DiscountRate, InputRejected, Money, Order, OrderOutcome, SystemClock,
};

use crate::accounts::Accounts;
use crate::checkout::Checkout;
use crate::collaborators::{
    CodeGenerator, EmailSender, ExchangeRates, PageAnalytics, PaymentGateway, ShippingQuotes,
};
use crate::config::StorefrontConfig;
use crate::error::ServiceResult;
use crate::pages::PageRenderer;
use crate::pricing::PriceConverter;
use crate::sandbox::{
    FixedRates, LoggingAnalytics, LoggingEmailSender, RandomCodeGenerator, SandboxPaymentGateway,
    ShippingTable,
};
use crate::shipping::ShippingInfo;

/// Every external system the storefront talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub rates: Arc<dyn ExchangeRates>,
    pub shipping: Arc<dyn ShippingQuotes>,
    pub analytics: Arc<dyn PageAnalytics>,
    pub payments: Arc<dyn PaymentGateway>,
    pub email: Arc<dyn EmailSender>,
    pub codes: Arc<dyn CodeGenerator>,
}

impl Collaborators {
    /// Sandbox stand-ins for every collaborator.
    pub fn sandbox(rates: FixedRates, shipping: ShippingTable) -> Self {
        Collaborators {
            rates: Arc::new(rates),
            shipping: Arc::new(shipping),
            analytics: Arc::new(LoggingAnalytics),
            payments: Arc::new(SandboxPaymentGateway),
            email: Arc::new(LoggingEmailSender),
            codes: Arc::new(RandomCodeGenerator),
        }
    }
}

/// The storefront's user-facing operations.
#[derive(Clone)]
pub struct Storefront {
    config: Arc<StorefrontConfig>,
    clock: Arc<dyn Clock>,
    pricing: PriceConverter,
    shipping: ShippingInfo,
    pages: PageRenderer,
    checkout: Checkout,
    accounts: Accounts,
}

impl Storefront {
    /// Builds a storefront reading the system clock.
    pub fn new(config: StorefrontConfig, collaborators: Collaborators) -> Self {
        Self::with_clock(config, collaborators, Arc::new(SystemClock))
    }

    pub fn with_clock(
        config: StorefrontConfig,
        collaborators: Collaborators,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let pricing = PriceConverter::new(collaborators.rates, config.base_currency());
        Storefront {
            pricing,
            shipping: ShippingInfo::new(collaborators.shipping),
            pages: PageRenderer::new(collaborators.analytics),
            checkout: Checkout::new(collaborators.payments),
            accounts: Accounts::new(collaborators.email, collaborators.codes),
            config: Arc::new(config),
            clock,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn price_in_currency(&self, price: Money, target_currency: &str) -> ServiceResult<Money> {
        self.pricing.price_in_currency(price, target_currency)
    }

    pub fn shipping_info(&self, destination: &str) -> String {
        self.shipping.shipping_info(destination)
    }

    pub async fn render_page(&self) -> String {
        self.pages.render_page().await
    }

    pub async fn submit_order(&self, order: &Order, card: &CreditCard) -> OrderOutcome {
        self.checkout.submit_order(order, card).await
    }

    pub async fn sign_up(&self, email: &str) -> bool {
        self.accounts.sign_up(email).await
    }

    pub async fn login(&self, email: &str) {
        self.accounts.login(email).await
    }

    /// True while the configured opening window contains the current hour.
    pub fn is_online(&self) -> bool {
        is_online(self.clock.as_ref(), &self.config.hours)
    }

    /// The holiday promotion's discount today, zero on other days.
    pub fn current_discount(&self) -> DiscountRate {
        get_discount(self.clock.as_ref(), &self.config.promotion)
    }

    /// Username check with the configured stand-alone bounds.
    pub fn is_valid_username(&self, name: &str) -> bool {
        self.config.usernames.accepts(name)
    }

    /// Sign-up form check with the configured profile bounds.
    pub fn validate_user_input(
        &self,
        username: &str,
        age: u32,
    ) -> Result<&'static str, InputRejected> {
        self.config.profile.check(username, age)
    }
}
