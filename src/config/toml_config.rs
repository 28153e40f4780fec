use crate::adapters::memory::{InMemoryProductStore, InMemoryWarrantyStore};
use crate::config::PricingPolicy;
use crate::core::advisor::WarrantyAdvisor;
use crate::domain::model::{Product, Warranty};
use crate::domain::ports::Clock;
use crate::utils::error::{Result, WarrantyError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub pricing: PricingPolicy,
    #[serde(default)]
    pub products: Vec<Product>,
    /// Warranties issued before this run.
    #[serde(default)]
    pub warranties: Vec<Warranty>,
}

impl AdvisorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: AdvisorConfig = toml::from_str(&processed_content)?;

        tracing::debug!(
            "Parsed config: {} products, {} existing warranties",
            config.products.len(),
            config.warranties.len()
        );
        Ok(config)
    }

    /// Advisor over in-memory stores seeded from this file.
    pub fn build_advisor<C: Clock>(
        &self,
        clock: C,
    ) -> WarrantyAdvisor<InMemoryProductStore, InMemoryWarrantyStore, C> {
        WarrantyAdvisor::with_policy(
            InMemoryProductStore::from_products(self.products.clone()),
            InMemoryWarrantyStore::from_warranties(self.warranties.clone()),
            clock,
            &self.pricing,
        )
    }

    /// 寫回 TOML 檔案，保留已發出的保固
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string(self)?;

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&path, content)?;
        tracing::debug!(
            "Saved config with {} warranties to {}",
            self.warranties.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// 替換環境變數 (例如 ${CATALOG_PRICE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WarrantyError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for AdvisorConfig {
    fn validate(&self) -> Result<()> {
        self.pricing.validate()?;

        for product in &self.products {
            validation::validate_non_empty_string("products.code", &product.code)?;
            validation::validate_range(
                &format!("products[{}].price", product.code),
                product.price,
                Decimal::ZERO,
                Decimal::MAX,
            )?;
        }
        validation::validate_unique("products.code", self.products.iter().map(|p| p.code.as_str()))?;

        for warranty in &self.warranties {
            validation::validate_non_empty_string("warranties.product_code", &warranty.product_code)?;
            validation::validate_non_empty_string("warranties.client_name", &warranty.client_name)?;
        }
        validation::validate_unique(
            "warranties.product_code",
            self.warranties.iter().map(|w| w.product_code.as_str()),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use rust_decimal_macros::dec;

    #[test]
    fn test_config_parsing_with_defaults() {
        let toml_content = r#"
[[products]]
code = "AFBT1"
price = 600000

[[products]]
code = "TARJ22"
price = "399999.99"
"#;

        let config = AdvisorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.pricing, PricingPolicy::default());
        assert_eq!(config.products.len(), 2);
        assert_eq!(config.products[0].price, dec!(600000));
        assert_eq!(config.products[1].price, dec!(399999.99));
        assert!(config.warranties.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_pricing_table_keeps_other_defaults() {
        let toml_content = r#"
[pricing]
price_threshold = 750000
skipped_weekday = "Tue"

[pricing.upper_tier]
discount_rate = 0.25
warranty_days = 300
"#;

        let config = AdvisorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.pricing.price_threshold, dec!(750000));
        assert_eq!(config.pricing.upper_tier.discount_rate, dec!(0.25));
        assert_eq!(config.pricing.upper_tier.warranty_days, 300);
        assert_eq!(config.pricing.lower_tier.warranty_days, 100);
        assert_eq!(config.pricing.skipped_weekday, Weekday::Tue);
        assert_eq!(config.pricing.deferred_weekday, Weekday::Sun);
    }

    #[test]
    fn test_existing_warranties_are_parsed() {
        let toml_content = r#"
[[warranties]]
product_code = "AFBT1"
client_name = "Juan"
fee = 120000
end_date = "2021-03-02"
requested_at = "2020-09-03T10:15:00"
"#;

        let config = AdvisorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.warranties.len(), 1);
        assert_eq!(config.warranties[0].client_name, "Juan");
        assert_eq!(
            config.warranties[0].end_date,
            chrono::NaiveDate::from_ymd_opt(2021, 3, 2).unwrap()
        );
    }

    #[test]
    fn test_duplicate_product_codes_fail_validation() {
        let toml_content = r#"
[[products]]
code = "AFBT1"
price = 10

[[products]]
code = "AFBT1"
price = 20
"#;

        let config = AdvisorConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let config = AdvisorConfig {
            products: vec![Product::new("NEG1", dec!(-1))],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("WARRANTY_ADVISOR_TEST_PRICE", "450000");
        let toml_content = r#"
[[products]]
code = "ENV1"
price = ${WARRANTY_ADVISOR_TEST_PRICE}
"#;

        let config = AdvisorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.products[0].price, dec!(450000));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result = AdvisorConfig::from_toml_str("[[products]\ncode =");
        assert!(matches!(result, Err(WarrantyError::TomlError(_))));
    }

    #[test]
    fn test_save_and_reload_keeps_warranties() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warranty.toml");
        let day = chrono::NaiveDate::from_ymd_opt(2021, 3, 2).unwrap();
        let config = AdvisorConfig {
            products: vec![Product::new("AFBT1", dec!(600000))],
            warranties: vec![Warranty {
                product_code: "AFBT1".to_string(),
                requested_at: day.and_hms_opt(10, 15, 0).unwrap(),
                end_date: day,
                fee: dec!(120000),
                client_name: "Juan".to_string(),
            }],
            ..Default::default()
        };

        config.save_to_file(&path).unwrap();
        let reloaded = AdvisorConfig::from_file(&path).unwrap();

        assert_eq!(reloaded.pricing, config.pricing);
        assert_eq!(reloaded.products, config.products);
        assert_eq!(reloaded.warranties, config.warranties);
        assert!(reloaded.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warranty.toml");
        std::fs::write(&path, "[[products]]\ncode = \"FILE1\"\nprice = 1000\n").unwrap();

        let config = AdvisorConfig::from_file(&path).unwrap();
        assert_eq!(config.products[0].code, "FILE1");

        let missing = AdvisorConfig::from_file(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(WarrantyError::IoError(_))));
    }
}
