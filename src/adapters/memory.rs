use crate::domain::model::{Product, Warranty};
use crate::domain::ports::{ProductStore, WarrantyStore};
use crate::utils::error::{Result, WarrantyError};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct InMemoryProductStore {
    products: HashMap<String, Product>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.code.clone(), product))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductStore for InMemoryProductStore {
    fn find_by_code(&self, code: &str) -> Result<Product> {
        self.products
            .get(code)
            .cloned()
            .ok_or_else(|| WarrantyError::ProductNotFound {
                code: code.to_string(),
            })
    }
}

#[derive(Debug, Default)]
pub struct InMemoryWarrantyStore {
    warranties: RefCell<HashMap<String, Warranty>>,
}

impl InMemoryWarrantyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_warranties(warranties: impl IntoIterator<Item = Warranty>) -> Self {
        Self {
            warranties: RefCell::new(
                warranties
                    .into_iter()
                    .map(|warranty| (warranty.product_code.clone(), warranty))
                    .collect(),
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.warranties.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.warranties.borrow().is_empty()
    }
}

impl WarrantyStore for InMemoryWarrantyStore {
    fn find_active_by_product_code(&self, code: &str) -> Result<Option<Warranty>> {
        Ok(self.warranties.borrow().get(code).cloned())
    }

    fn insert(&self, warranty: Warranty) -> Result<()> {
        let mut warranties = self.warranties.borrow_mut();
        if warranties.contains_key(&warranty.product_code) {
            return Err(WarrantyError::StoreError {
                message: format!("warranty for {} already stored", warranty.product_code),
            });
        }
        warranties.insert(warranty.product_code.clone(), warranty);
        Ok(())
    }
}
