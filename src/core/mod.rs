pub mod advisor;
pub mod code_validator;
pub mod price_calculator;
pub mod scheduler;

pub use crate::domain::model::{Product, Tier, Warranty, WarrantyQuote};
pub use crate::domain::ports::{Clock, ProductStore, WarrantyStore};
pub use crate::utils::error::Result;
