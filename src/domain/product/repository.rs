use async_trait::async_trait;

use super::{CreateProductDto, Product};
use crate::domain::DomainResult;

/// Tenant-scoped product persistence. Every operation takes the owning
/// advisor id and filters on it; a row outside that scope behaves exactly
/// like a missing row.
#[async_trait]
pub trait ProductRepositoryInterface: Send + Sync {
    async fn create_product(
        &self,
        advisor_id: i32,
        dto: CreateProductDto,
    ) -> DomainResult<Product>;

    async fn find_by_id(&self, advisor_id: i32, product_id: i32)
        -> DomainResult<Option<Product>>;

    async fn find_all(&self, advisor_id: i32) -> DomainResult<Vec<Product>>;
}
