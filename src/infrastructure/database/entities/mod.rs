//! SeaORM entities

pub mod advisor;
pub mod product;
