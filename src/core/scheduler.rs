use crate::config::PricingPolicy;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Advances dates by "working" days, where a working day is any day that
/// isn't the skipped weekday.
#[derive(Debug, Clone, Copy)]
pub struct BusinessDayScheduler {
    skipped_weekday: Weekday,
    deferred_weekday: Weekday,
    deferral_days: u64,
}

impl BusinessDayScheduler {
    pub fn new(policy: &PricingPolicy) -> Self {
        Self {
            skipped_weekday: policy.skipped_weekday,
            deferred_weekday: policy.deferred_weekday,
            deferral_days: policy.deferral_days.max(0) as u64,
        }
    }

    /// The start date already counts as day one, so `days <= 1` only runs
    /// the deferral check. The deferral is applied once and the shifted date
    /// is not checked again. A walk past the last representable date stops
    /// there.
    pub fn advance(&self, days: i64, start_date: NaiveDate) -> NaiveDate {
        let mut current = start_date;
        let mut counted = 1;

        while counted < days {
            let Some(next) = current.checked_add_days(Days::new(1)) else {
                tracing::warn!("Advancing {} by {} days ran past {}", start_date, days, current);
                return current;
            };
            current = next;
            if current.weekday() != self.skipped_weekday {
                counted += 1;
            }
        }

        if current.weekday() == self.deferred_weekday {
            tracing::debug!("{} falls on {:?}, deferring", current, self.deferred_weekday);
            current = current
                .checked_add_days(Days::new(self.deferral_days))
                .unwrap_or(current);
        }

        tracing::debug!("Advanced {} by {} days to {}", start_date, days, current);
        current
    }
}

impl Default for BusinessDayScheduler {
    fn default() -> Self {
        Self::new(&PricingPolicy::default())
    }
}
