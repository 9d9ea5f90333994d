//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240925_000001_create_advisors;
mod m20240925_000002_create_products;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240925_000001_create_advisors::Migration),
            Box::new(m20240925_000002_create_products::Migration),
        ]
    }
}
