#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::Tier;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::Weekday;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Longest warranty a tier may grant, roughly a century.
pub const MAX_WARRANTY_DAYS: i64 = 36_500;

/// Every constant the eligibility, pricing and scheduling rules read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    /// Prices strictly above this take the upper tier.
    pub price_threshold: Decimal,
    /// The single vowel count that makes a code ineligible.
    pub excluded_vowel_count: usize,
    /// Advancing onto this weekday doesn't count toward the warranty length.
    pub skipped_weekday: Weekday,
    /// An end date on this weekday is pushed forward by `deferral_days`.
    pub deferred_weekday: Weekday,
    pub deferral_days: i64,
    pub upper_tier: Tier,
    pub lower_tier: Tier,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            price_threshold: dec!(500000),
            upper_tier: Tier {
                discount_rate: dec!(0.20),
                warranty_days: 200,
            },
            lower_tier: Tier {
                discount_rate: dec!(0.10),
                warranty_days: 100,
            },
            excluded_vowel_count: 3,
            skipped_weekday: Weekday::Mon,
            deferred_weekday: Weekday::Sun,
            deferral_days: 2,
        }
    }
}

impl Validate for PricingPolicy {
    fn validate(&self) -> Result<()> {
        validation::validate_range(
            "pricing.price_threshold",
            self.price_threshold,
            Decimal::ZERO,
            Decimal::MAX,
        )?;

        for (name, tier) in [("upper_tier", &self.upper_tier), ("lower_tier", &self.lower_tier)] {
            validation::validate_range(
                &format!("pricing.{}.discount_rate", name),
                tier.discount_rate,
                Decimal::ZERO,
                Decimal::ONE,
            )?;
            validation::validate_range(
                &format!("pricing.{}.warranty_days", name),
                tier.warranty_days,
                1,
                MAX_WARRANTY_DAYS,
            )?;
        }

        validation::validate_range("pricing.deferral_days", self.deferral_days, 0, 7)?;
        Ok(())
    }
}
