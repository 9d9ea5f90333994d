//! Advisor aggregate
//!
//! Contains the Advisor entity, DTOs, and repository interface.

pub mod dto;
pub mod model;
pub mod repository;

pub use dto::RegisterAdvisorDto;
pub use model::{Advisor, PublicAdvisor};
pub use repository::AdvisorRepositoryInterface;
