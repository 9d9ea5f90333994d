use async_trait::async_trait;

use super::{Advisor, RegisterAdvisorDto};
use crate::domain::DomainResult;

#[async_trait]
pub trait AdvisorRepositoryInterface: Send + Sync {
    /// Persist a new advisor, hashing the password before the write.
    /// A duplicate email surfaces as `DomainError::Conflict`.
    async fn create_advisor(&self, dto: RegisterAdvisorDto) -> DomainResult<Advisor>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Advisor>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Advisor>>;
}
