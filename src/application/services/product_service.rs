//! Tenant-scoped product operations
//!
//! Every call takes the advisor id attached by the auth middleware; the
//! repository filters on it, so another tenant's products are simply
//! absent rather than forbidden.

use std::sync::Arc;

use tracing::info;

use crate::domain::product::{CreateProductDto, Product, ProductRepositoryInterface};
use crate::domain::{DomainError, DomainResult};

const NO_PRODUCTS: &str = "No products found";

pub struct ProductService {
    products: Arc<dyn ProductRepositoryInterface>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepositoryInterface>) -> Self {
        Self { products }
    }

    pub async fn create(&self, advisor_id: i32, dto: CreateProductDto) -> DomainResult<Product> {
        let product = self.products.create_product(advisor_id, dto).await?;
        info!(product_id = product.id, advisor_id, "Product created successfully");
        Ok(product)
    }

    pub async fn get_by_id(&self, advisor_id: i32, product_id: i32) -> DomainResult<Product> {
        self.products
            .find_by_id(advisor_id, product_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(NO_PRODUCTS.to_string()))
    }

    pub async fn list(&self, advisor_id: i32) -> DomainResult<Vec<Product>> {
        let products = self.products.find_all(advisor_id).await?;
        if products.is_empty() {
            return Err(DomainError::NotFound(NO_PRODUCTS.to_string()));
        }
        Ok(products)
    }
}
