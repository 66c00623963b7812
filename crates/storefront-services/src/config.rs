//! # Storefront Configuration
//!
//! Settings for pricing, opening hours, the holiday promotion and the two
//! username/profile validators.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_BASE_CURRENCY=EUR                                       │
//! │     STOREFRONT_OPEN_HOUR=9                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.storefront.shop/... (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     USD, open 08-20, 20% off on 12-25                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [pricing]
//! base_currency = "USD"
//!
//! [hours]
//! open_hour = 8
//! close_hour = 20
//!
//! [promotion]
//! month = 12
//! day = 25
//! discount_bps = 2000
//!
//! [usernames]
//! min_length = 5
//! max_length = 15
//!
//! [profile]
//! min_username_length = 3
//! max_username_length = 255
//! min_age = 18
//! max_age = 100
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use storefront_core::validation::{UserInputRules, UsernameRules};
use storefront_core::{DiscountRate, HolidayPromotion, OpeningHours};
use tracing::{debug, info, warn};

use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Pricing Settings
// =============================================================================

/// Currency settings for price conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// ISO 4217 code every catalog price is expressed in.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            base_currency: default_base_currency(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub hours: OpeningHours,

    #[serde(default)]
    pub promotion: HolidayPromotion,

    /// Bounds for the stand-alone username check.
    #[serde(default)]
    pub usernames: UsernameRules,

    /// Bounds for the sign-up form check.
    #[serde(default)]
    pub profile: UserInputRules,
}

impl StorefrontConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ServiceResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ServiceResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ServiceError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ServiceResult<()> {
        let currency = &self.pricing.base_currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ServiceError::InvalidConfig(format!(
                "base_currency must be a three-letter code, got: '{}'",
                currency
            )));
        }

        if self.hours.close_hour > 24 {
            return Err(ServiceError::InvalidConfig(
                "close_hour must be at most 24".into(),
            ));
        }
        if self.hours.open_hour >= self.hours.close_hour {
            return Err(ServiceError::InvalidConfig(format!(
                "open_hour ({}) must be before close_hour ({})",
                self.hours.open_hour, self.hours.close_hour
            )));
        }

        if !self.promotion.is_real_date() {
            return Err(ServiceError::InvalidConfig(format!(
                "promotion date {:02}-{:02} does not exist",
                self.promotion.month, self.promotion.day
            )));
        }
        if self.promotion.discount.bps() > 10000 {
            return Err(ServiceError::InvalidConfig(
                "promotion discount_bps must be at most 10000".into(),
            ));
        }

        if self.usernames.min_length > self.usernames.max_length {
            return Err(ServiceError::InvalidConfig(
                "usernames.min_length must not exceed max_length".into(),
            ));
        }
        if self.profile.min_username_length > self.profile.max_username_length {
            return Err(ServiceError::InvalidConfig(
                "profile.min_username_length must not exceed max_username_length".into(),
            ));
        }
        if self.profile.min_age > self.profile.max_age {
            return Err(ServiceError::InvalidConfig(
                "profile.min_age must not exceed max_age".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(currency) = std::env::var("STOREFRONT_BASE_CURRENCY") {
            debug!(currency = %currency, "Overriding base currency from environment");
            self.pricing.base_currency = currency.to_uppercase();
        }

        if let Ok(hour) = std::env::var("STOREFRONT_OPEN_HOUR") {
            match hour.parse::<u32>() {
                Ok(h) => self.hours.open_hour = h,
                Err(_) => warn!(value = %hour, "Ignoring non-numeric STOREFRONT_OPEN_HOUR"),
            }
        }

        if let Ok(hour) = std::env::var("STOREFRONT_CLOSE_HOUR") {
            match hour.parse::<u32>() {
                Ok(h) => self.hours.close_hour = h,
                Err(_) => warn!(value = %hour, "Ignoring non-numeric STOREFRONT_CLOSE_HOUR"),
            }
        }

        if let Ok(bps) = std::env::var("STOREFRONT_HOLIDAY_DISCOUNT_BPS") {
            match bps.parse::<u32>() {
                Ok(b) => {
                    debug!(bps = b, "Overriding holiday discount from environment");
                    self.promotion.discount = DiscountRate::from_bps(b);
                }
                Err(_) => {
                    warn!(value = %bps, "Ignoring non-numeric STOREFRONT_HOLIDAY_DISCOUNT_BPS")
                }
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "shop")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    pub fn base_currency(&self) -> &str {
        &self.pricing.base_currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.base_currency(), "USD");
        assert_eq!(config.hours.open_hour, 8);
        assert_eq!(config.hours.close_hour, 20);
        assert_eq!(config.promotion.discount.bps(), 2000);
        assert_eq!(config.usernames.min_length, 5);
        assert_eq!(config.usernames.max_length, 15);
        assert_eq!(config.profile.min_username_length, 3);
        assert_eq!(config.profile.max_username_length, 255);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = StorefrontConfig::default();

        config.pricing.base_currency = "DOLLARS".into();
        assert!(config.validate().is_err());
        config.pricing.base_currency = "EUR".into();
        assert!(config.validate().is_ok());

        config.hours.open_hour = 20;
        assert!(config.validate().is_err());
        config.hours.open_hour = 8;

        config.hours.close_hour = 25;
        assert!(config.validate().is_err());
        config.hours.close_hour = 24;
        assert!(config.validate().is_ok());

        config.promotion.month = 13;
        assert!(config.validate().is_err());
        config.promotion.month = 12;

        config.promotion.discount = DiscountRate::from_bps(10001);
        assert!(config.validate().is_err());
        config.promotion.discount = DiscountRate::from_bps(2000);

        config.profile.min_age = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [hours]
            open_hour = 9

            [promotion]
            discount_bps = 1500
            "#,
        )
        .unwrap();

        assert_eq!(config.hours.open_hour, 9);
        assert_eq!(config.hours.close_hour, 20);
        assert_eq!(config.promotion.month, 12);
        assert_eq!(config.promotion.discount.bps(), 1500);
        assert_eq!(config.base_currency(), "USD");
    }

    #[test]
    fn test_toml_serialization() {
        let config = StorefrontConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[pricing]"));
        assert!(toml_str.contains("[hours]"));
        assert!(toml_str.contains("discount_bps = 2000"));
    }

    // Process environment is shared across test threads.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 4] = [
        "STOREFRONT_BASE_CURRENCY",
        "STOREFRONT_OPEN_HOUR",
        "STOREFRONT_CLOSE_HOUR",
        "STOREFRONT_HOLIDAY_DISCOUNT_BPS",
    ];

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn temp_config_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("storefront-config-{}", uuid::Uuid::new_v4()))
            .join("storefront.toml")
    }

    /// Loads from a missing file with `vars` set, then clears them again.
    fn load_with_env(vars: &[(&str, &str)]) -> StorefrontConfig {
        let _guard = env_lock();
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        let result = StorefrontConfig::load(Some(temp_config_path()));
        for key in ENV_VARS {
            std::env::remove_var(key);
        }
        result.unwrap()
    }

    #[test]
    fn test_save_then_load() {
        let _guard = env_lock();
        let path = temp_config_path();

        let mut config = StorefrontConfig::default();
        config.hours.open_hour = 7;
        config.promotion.discount = DiscountRate::from_bps(1500);
        config.save(Some(path.clone())).unwrap();

        let loaded = StorefrontConfig::load(Some(path.clone())).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let _guard = env_lock();
        let path = temp_config_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[hours]\nopen_hour = 21\nclose_hour = 20\n").unwrap();

        let err = StorefrontConfig::load(Some(path.clone())).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidConfig(_)));

        let fallback = StorefrontConfig::load_or_default(Some(path.clone()));
        assert_eq!(fallback, StorefrontConfig::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = load_with_env(&[]);
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_env_override_base_currency() {
        let config = load_with_env(&[("STOREFRONT_BASE_CURRENCY", "eur")]);
        assert_eq!(config.base_currency(), "EUR");
    }

    #[test]
    fn test_env_override_hours() {
        let config = load_with_env(&[
            ("STOREFRONT_OPEN_HOUR", "9"),
            ("STOREFRONT_CLOSE_HOUR", "22"),
        ]);
        assert_eq!(config.hours.open_hour, 9);
        assert_eq!(config.hours.close_hour, 22);
    }

    #[test]
    fn test_env_override_holiday_discount() {
        let config = load_with_env(&[("STOREFRONT_HOLIDAY_DISCOUNT_BPS", "1500")]);
        assert_eq!(config.promotion.discount.bps(), 1500);
    }

    #[test]
    fn test_non_numeric_env_overrides_are_ignored() {
        let config = load_with_env(&[
            ("STOREFRONT_OPEN_HOUR", "nine"),
            ("STOREFRONT_CLOSE_HOUR", "late"),
            ("STOREFRONT_HOLIDAY_DISCOUNT_BPS", "lots"),
        ]);
        assert_eq!(config.hours, OpeningHours::default());
        assert_eq!(config.promotion.discount.bps(), 2000);
    }

    #[test]
    fn test_env_override_is_validated() {
        let _guard = env_lock();
        std::env::set_var("STOREFRONT_OPEN_HOUR", "23");
        let result = StorefrontConfig::load(Some(temp_config_path()));
        std::env::remove_var("STOREFRONT_OPEN_HOUR");

        assert!(matches!(result, Err(ServiceError::InvalidConfig(_))));
    }
}
