use crate::domain::model::{Product, Warranty};
use crate::utils::error::Result;
use chrono::NaiveDateTime;

pub trait ProductStore {
    /// Fails when no product has this code.
    fn find_by_code(&self, code: &str) -> Result<Product>;
}

pub trait WarrantyStore {
    fn find_active_by_product_code(&self, code: &str) -> Result<Option<Warranty>>;
    fn insert(&self, warranty: Warranty) -> Result<()>;
}

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

impl<T: ProductStore + ?Sized> ProductStore for &T {
    fn find_by_code(&self, code: &str) -> Result<Product> {
        (**self).find_by_code(code)
    }
}

impl<T: WarrantyStore + ?Sized> WarrantyStore for &T {
    fn find_active_by_product_code(&self, code: &str) -> Result<Option<Warranty>> {
        (**self).find_active_by_product_code(code)
    }

    fn insert(&self, warranty: Warranty) -> Result<()> {
        (**self).insert(warranty)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
