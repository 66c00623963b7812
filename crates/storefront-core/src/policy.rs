//! # Time Policies
//!
//! Rules that depend on the current wall-clock time: whether the shop is
//! open, and whether today's holiday promotion applies.
//!
//! ## Clock Injection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   is_online(&clock, &hours)        get_discount(&clock, &promotion)     │
//! │         │                                  │                            │
//! │         └──────────► clock.now() ◄─────────┘                            │
//! │                          │                                              │
//! │             ┌────────────┴────────────┐                                 │
//! │             ▼                         ▼                                 │
//! │       SystemClock                FixedClock                             │
//! │   (local wall clock)     (tests: "2024-12-25 00:01")                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here reads the system time directly; callers pass a [`Clock`].

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, ParseResult, Timelike};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Clock
// =============================================================================

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the machine's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub const fn new(at: NaiveDateTime) -> Self {
        FixedClock(at)
    }

    /// Parses `YYYY-MM-DD HH:MM`.
    ///
    /// ```rust
    /// use storefront_core::policy::{Clock, FixedClock};
    ///
    /// let clock = FixedClock::at("2024-01-01 07:59").unwrap();
    /// assert_eq!(clock.now().to_string(), "2024-01-01 07:59:00");
    /// ```
    pub fn at(text: &str) -> ParseResult<Self> {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M").map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

// =============================================================================
// Opening Hours
// =============================================================================

/// Daily opening window `[open_hour, close_hour)` in local hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OpeningHours {
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,

    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
}

fn default_open_hour() -> u32 {
    8
}

fn default_close_hour() -> u32 {
    20
}

impl Default for OpeningHours {
    fn default() -> Self {
        OpeningHours {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
        }
    }
}

impl OpeningHours {
    /// True iff the hour of `at` lies in `[open_hour, close_hour)`.
    ///
    /// 19:59 is open, 20:00 is closed.
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        let hour = at.hour();
        hour >= self.open_hour && hour < self.close_hour
    }
}

/// True iff the shop is open at the clock's current time.
///
/// ## Example
/// ```rust
/// use storefront_core::policy::{is_online, FixedClock, OpeningHours};
///
/// let hours = OpeningHours::default();
/// assert!(is_online(&FixedClock::at("2024-01-01 08:00").unwrap(), &hours));
/// assert!(!is_online(&FixedClock::at("2024-01-01 20:01").unwrap(), &hours));
/// ```
pub fn is_online(clock: &dyn Clock, hours: &OpeningHours) -> bool {
    hours.is_open_at(clock.now())
}

// =============================================================================
// Holiday Promotion
// =============================================================================

/// A discount that applies for the whole of one calendar day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HolidayPromotion {
    #[serde(default = "default_holiday_month")]
    pub month: u32,

    #[serde(default = "default_holiday_day")]
    pub day: u32,

    #[serde(default = "default_holiday_discount", rename = "discount_bps")]
    pub discount: DiscountRate,
}

fn default_holiday_month() -> u32 {
    12
}

fn default_holiday_day() -> u32 {
    25
}

fn default_holiday_discount() -> DiscountRate {
    DiscountRate::from_bps(2000)
}

impl Default for HolidayPromotion {
    fn default() -> Self {
        HolidayPromotion {
            month: default_holiday_month(),
            day: default_holiday_day(),
            discount: default_holiday_discount(),
        }
    }
}

impl HolidayPromotion {
    /// The promotion's discount on its day, zero on every other day.
    pub fn discount_on(&self, date: NaiveDate) -> DiscountRate {
        if date.month() == self.month && date.day() == self.day {
            self.discount
        } else {
            DiscountRate::zero()
        }
    }

    /// True if the month/day pair exists in a leap year.
    pub fn is_real_date(&self) -> bool {
        NaiveDate::from_ymd_opt(2024, self.month, self.day).is_some()
    }
}

/// Today's promotional discount.
///
/// ## Example
/// ```rust
/// use storefront_core::policy::{get_discount, FixedClock, HolidayPromotion};
///
/// let promo = HolidayPromotion::default();
/// let christmas = FixedClock::at("2024-12-25 23:59").unwrap();
/// assert_eq!(get_discount(&christmas, &promo).fraction(), 0.2);
/// ```
pub fn get_discount(clock: &dyn Clock, promotion: &HolidayPromotion) -> DiscountRate {
    promotion.discount_on(clock.now().date())
}

// =============================================================================
// Unit Tests
// =============================================================================
