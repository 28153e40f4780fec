use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub code: String,
    pub price: Decimal,
}

impl Product {
    pub fn new(code: impl Into<String>, price: Decimal) -> Self {
        Self {
            code: code.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warranty {
    pub product_code: String,
    pub requested_at: NaiveDateTime,
    pub end_date: NaiveDate,
    pub fee: Decimal,
    pub client_name: String,
}

/// A discount rate paired with the warranty length it grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub discount_rate: Decimal,
    pub warranty_days: i64,
}

/// Fee and expiration computed from one tier. Only the price calculator
/// builds these, so the two values can't drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WarrantyQuote {
    fee: Decimal,
    end_date: NaiveDate,
    tier: Tier,
}

impl WarrantyQuote {
    pub(crate) fn new(fee: Decimal, end_date: NaiveDate, tier: Tier) -> Self {
        Self {
            fee,
            end_date,
            tier,
        }
    }

    pub fn fee(&self) -> Decimal {
        self.fee
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }
}
