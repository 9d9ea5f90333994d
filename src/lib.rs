//! # Advisor Catalog Service
//!
//! Multi-tenant catalog backend: advisors register and authenticate,
//! then manage products scoped to their own account.
//!
//! ## Architecture
//!
//! - **domain**: Core entities, DTOs and repository traits
//! - **application**: Services orchestrating auth and catalog operations
//! - **infrastructure**: External concerns (database, crypto)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Cross-cutting types (error taxonomy)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
