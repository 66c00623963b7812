//! # Storefront Sandbox
//!
//! Runs every storefront flow once against the sandbox collaborators and
//! prints the results.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize logging (RUST_LOG, default info,storefront=debug)        │
//! │  2. Load storefront.toml or defaults, apply STOREFRONT_* overrides      │
//! │  3. Wire sandbox collaborators into a Storefront                        │
//! │  4. Walk through pricing, shipping, checkout, accounts, policies        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use storefront_core::coupons::{calculate_discount, coupons};
use storefront_core::validation::{can_drive, is_price_in_range};
use storefront_core::{CreditCard, Money, Order, ShippingQuote, Stack};
use storefront_services::sandbox::{FixedRates, ShippingTable};
use storefront_services::{fetch_data, Collaborators, Storefront, StorefrontConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = StorefrontConfig::load(None).context("failed to load storefront configuration")?;
    info!(base_currency = %config.base_currency(), "Configuration loaded");

    let storefront = Storefront::new(config, sandbox_collaborators());

    // Catalogue and pricing
    let price = Money::from_cents(1000);
    let in_range = is_price_in_range(price, Money::zero(), Money::from_cents(10_000));
    println!("Price in range [$0, $100]: {in_range}");
    println!("Price in AUD: {}", storefront.price_in_currency(price, "AUD")?);
    for coupon in coupons() {
        let discounted = calculate_discount(price, &coupon.code)?;
        println!("{} takes {} to {}", coupon.code, price, discounted);
    }

    println!("London: {}", storefront.shipping_info("London"));
    println!("Atlantis: {}", storefront.shipping_info("Atlantis"));
    println!("{}", storefront.render_page().await);

    // Checkout
    let order = Order { total_amount: price };
    let outcome = storefront
        .submit_order(&order, &CreditCard::new("4242424242424242"))
        .await;
    println!("Order outcome: {:?}", outcome);

    // Accounts
    println!("Signed up: {}", storefront.sign_up("example@gmail.com").await);
    storefront.login("example@gmail.com").await;
    println!("Username 'shopper' valid: {}", storefront.is_valid_username("shopper"));
    match storefront.validate_user_input("shopper", 30) {
        Ok(message) => println!("{message}"),
        Err(rejected) => println!("{rejected}"),
    }
    println!("17 may drive in the UK: {}", can_drive(17, "UK")?);

    // Time policies
    println!("Online now: {}", storefront.is_online());
    println!("Discount today: {}", storefront.current_discount().fraction());

    // Odds and ends
    let mut recent: Stack<&str> = Stack::new();
    recent.push("home");
    recent.push("checkout");
    println!("Last visited: {}", recent.pop()?);
    println!("Feed: {:?}", fetch_data().await?);

    info!("Sandbox walkthrough complete");
    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn sandbox_collaborators() -> Collaborators {
    let rates = FixedRates::new()
        .with_rate("USD", "AUD", 1.5)
        .with_rate("USD", "EUR", 0.92);
    let shipping = ShippingTable::new().with_quote(
        "London",
        ShippingQuote {
            cost: Money::from_cents(1000),
            estimated_days: 2,
        },
    );
    Collaborators::sandbox(rates, shipping)
}
