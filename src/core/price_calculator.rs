use crate::config::PricingPolicy;
use crate::core::scheduler::BusinessDayScheduler;
use crate::domain::model::{Tier, WarrantyQuote};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct PriceCalculator {
    price_threshold: Decimal,
    upper_tier: Tier,
    lower_tier: Tier,
    scheduler: BusinessDayScheduler,
}

impl PriceCalculator {
    pub fn new(policy: &PricingPolicy) -> Self {
        Self {
            price_threshold: policy.price_threshold,
            upper_tier: policy.upper_tier,
            lower_tier: policy.lower_tier,
            scheduler: BusinessDayScheduler::new(policy),
        }
    }

    /// Strictly above the threshold takes the upper tier; the threshold
    /// itself stays in the lower one.
    pub fn select_tier(&self, price: Decimal) -> Tier {
        if price > self.price_threshold {
            self.upper_tier
        } else {
            self.lower_tier
        }
    }

    pub fn compute_fee_and_end_date(&self, price: Decimal, start_date: NaiveDate) -> WarrantyQuote {
        let tier = self.select_tier(price);
        let fee = price * tier.discount_rate;
        let end_date = self.scheduler.advance(tier.warranty_days, start_date);

        tracing::debug!(
            "Price {} -> rate {} over {} days: fee {}, ends {}",
            price,
            tier.discount_rate,
            tier.warranty_days,
            fee,
            end_date
        );
        WarrantyQuote::new(fee, end_date, tier)
    }

    pub fn scheduler(&self) -> &BusinessDayScheduler {
        &self.scheduler
    }
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self::new(&PricingPolicy::default())
    }
}
