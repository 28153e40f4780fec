use crate::config::PricingPolicy;
use crate::core::code_validator::CodeValidator;
use crate::core::price_calculator::PriceCalculator;
use crate::domain::model::{Warranty, WarrantyQuote};
use crate::domain::ports::{Clock, ProductStore, WarrantyStore};
use crate::utils::error::{Result, WarrantyError};
use chrono::NaiveDate;

pub struct WarrantyAdvisor<P: ProductStore, W: WarrantyStore, C: Clock> {
    products: P,
    warranties: W,
    clock: C,
    validator: CodeValidator,
    calculator: PriceCalculator,
}

impl<P: ProductStore, W: WarrantyStore, C: Clock> WarrantyAdvisor<P, W, C> {
    pub fn new(products: P, warranties: W, clock: C) -> Self {
        Self::with_policy(products, warranties, clock, &PricingPolicy::default())
    }

    pub fn with_policy(products: P, warranties: W, clock: C, policy: &PricingPolicy) -> Self {
        Self {
            products,
            warranties,
            clock,
            validator: CodeValidator::new(policy),
            calculator: PriceCalculator::new(policy),
        }
    }

    /// Issues an extended warranty for `code` and returns what was stored.
    ///
    /// Rejects codes that already carry a warranty before looking at
    /// anything else, then rejects ineligible codes before any pricing.
    /// Store failures are returned as the store reported them.
    pub fn generate_warranty(&self, code: &str, client_name: &str) -> Result<Warranty> {
        if self.has_warranty(code)? {
            tracing::warn!("Rejected {}: warranty already exists", code);
            return Err(WarrantyError::DuplicateWarranty {
                code: code.to_string(),
            });
        }

        self.validate_code(code)?;

        let start_date = self.today();
        let quote = self.quote(code, start_date)?;

        self.record(code, client_name, quote)
    }

    /// Today's date on the advisor's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date()
    }

    pub fn has_warranty(&self, code: &str) -> Result<bool> {
        Ok(self.warranties.find_active_by_product_code(code)?.is_some())
    }

    pub fn validate_code(&self, code: &str) -> Result<()> {
        self.validator.validate(code).inspect_err(|_| {
            tracing::warn!("Rejected {}: code not eligible", code);
        })
    }

    /// Prices the product currently stored under `code` from `start_date`.
    pub fn quote(&self, code: &str, start_date: NaiveDate) -> Result<WarrantyQuote> {
        let product = self.products.find_by_code(code)?;
        Ok(self
            .calculator
            .compute_fee_and_end_date(product.price, start_date))
    }

    /// Stores a warranty for `code`, stamped with its own request time.
    pub fn record(&self, code: &str, client_name: &str, quote: WarrantyQuote) -> Result<Warranty> {
        let product = self.products.find_by_code(code)?;
        let requested_at = self.clock.now();

        let warranty = Warranty {
            product_code: product.code,
            requested_at,
            end_date: quote.end_date(),
            fee: quote.fee(),
            client_name: client_name.to_string(),
        };
        self.warranties.insert(warranty.clone())?;

        tracing::info!(
            "Recorded warranty for {} ({}): fee {}, ends {}",
            warranty.product_code,
            warranty.client_name,
            warranty.fee,
            warranty.end_date
        );
        Ok(warranty)
    }

    pub fn validator(&self) -> &CodeValidator {
        &self.validator
    }

    pub fn calculator(&self) -> &PriceCalculator {
        &self.calculator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::memory::{InMemoryProductStore, InMemoryWarrantyStore};
    use crate::domain::model::Product;
    use rust_decimal_macros::dec;

    fn clock() -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(2020, 9, 3)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        )
    }

    fn advisor() -> WarrantyAdvisor<InMemoryProductStore, InMemoryWarrantyStore, FixedClock> {
        let products = InMemoryProductStore::from_products(vec![
            Product::new("AFBT1", dec!(600000)),
            Product::new("ABETPO5", dec!(100)),
        ]);
        WarrantyAdvisor::new(products, InMemoryWarrantyStore::new(), clock())
    }

    #[test]
    fn test_generate_warranty_records_upper_tier() {
        let advisor = advisor();
        let warranty = advisor.generate_warranty("AFBT1", "Juan").unwrap();

        assert_eq!(warranty.fee, dec!(120000));
        assert_eq!(warranty.client_name, "Juan");
        assert_eq!(warranty.requested_at, clock().now());
        assert_eq!(
            warranty.end_date,
            advisor
                .calculator()
                .scheduler()
                .advance(200, NaiveDate::from_ymd_opt(2020, 9, 3).unwrap())
        );
        assert!(advisor.has_warranty("AFBT1").unwrap());
    }

    #[test]
    fn test_today_comes_from_the_advisor_clock() {
        assert_eq!(advisor().today(), NaiveDate::from_ymd_opt(2020, 9, 3).unwrap());
    }

    #[test]
    fn test_second_request_is_a_duplicate() {
        let advisor = advisor();
        advisor.generate_warranty("AFBT1", "Juan").unwrap();

        let err = advisor.generate_warranty("AFBT1", "Maria").unwrap_err();
        assert!(matches!(err, WarrantyError::DuplicateWarranty { .. }));
    }

    #[test]
    fn test_ineligible_code_is_rejected() {
        let err = advisor().generate_warranty("ABETPO5", "Juan").unwrap_err();
        assert!(matches!(err, WarrantyError::IneligibleCode { .. }));
    }

    #[test]
    fn test_unknown_product_propagates_store_error() {
        let err = advisor().generate_warranty("ZZZ9", "Juan").unwrap_err();
        assert!(matches!(err, WarrantyError::ProductNotFound { ref code } if code == "ZZZ9"));
    }
}
