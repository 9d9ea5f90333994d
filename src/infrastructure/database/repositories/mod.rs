//! SeaORM repository implementations

pub mod advisor_repository;
pub mod product_repository;

pub use advisor_repository::SeaOrmAdvisorRepository;
pub use product_repository::SeaOrmProductRepository;
