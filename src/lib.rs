pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::clock::{FixedClock, SystemClock};
pub use adapters::memory::{InMemoryProductStore, InMemoryWarrantyStore};
pub use config::{toml_config::AdvisorConfig, PricingPolicy};
pub use core::{
    advisor::WarrantyAdvisor, code_validator::CodeValidator, price_calculator::PriceCalculator,
    scheduler::BusinessDayScheduler,
};
pub use domain::model::{Product, Tier, Warranty, WarrantyQuote};
pub use utils::error::{Result, WarrantyError};
