//! SeaORM implementation of the tenant-scoped product repository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::info;

use crate::domain::product::{CreateProductDto, Product, ProductRepositoryInterface};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::product;

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(model: product::Model) -> Product {
    Product {
        id: model.id,
        advisor_id: model.advisor_id,
        name: model.name,
        description: model.description,
        price: model.price,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl ProductRepositoryInterface for SeaOrmProductRepository {
    async fn create_product(
        &self,
        advisor_id: i32,
        dto: CreateProductDto,
    ) -> DomainResult<Product> {
        let now = Utc::now();
        let new_product = product::ActiveModel {
            id: NotSet,
            advisor_id: Set(advisor_id),
            name: Set(dto.name),
            description: Set(dto.description),
            price: Set(dto.price),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = new_product.insert(&self.db).await.map_err(db_err)?;
        info!(product_id = created.id, advisor_id, "Product persisted");

        Ok(model_to_domain(created))
    }

    async fn find_by_id(
        &self,
        advisor_id: i32,
        product_id: i32,
    ) -> DomainResult<Option<Product>> {
        // scoped lookup: a row owned by another advisor is invisible here
        let model = product::Entity::find()
            .filter(product::Column::Id.eq(product_id))
            .filter(product::Column::AdvisorId.eq(advisor_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self, advisor_id: i32) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .filter(product::Column::AdvisorId.eq(advisor_id))
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(model_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advisor::{AdvisorRepositoryInterface, RegisterAdvisorDto};
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::SeaOrmAdvisorRepository;
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;

    async fn test_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
        options.max_connections(1);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn seed_advisor(db: &DatabaseConnection, email: &str) -> i32 {
        let repo = SeaOrmAdvisorRepository::new(db.clone(), 4);
        repo.create_advisor(RegisterAdvisorDto {
            name: "Owner".to_string(),
            email: email.to_string(),
            password: "password1".to_string(),
        })
        .await
        .unwrap()
        .id
    }

    fn product_dto(name: &str, price: f64) -> CreateProductDto {
        CreateProductDto {
            name: name.to_string(),
            description: Some("test product".to_string()),
            price,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_scoped() {
        let db = test_db().await;
        let advisor_id = seed_advisor(&db, "owner@example.com").await;
        let repo = SeaOrmProductRepository::new(db);

        let created = repo
            .create_product(advisor_id, product_dto("Pension Plan", 99.5))
            .await
            .unwrap();
        assert_eq!(created.advisor_id, advisor_id);

        let found = repo.find_by_id(advisor_id, created.id).await.unwrap();
        assert_eq!(found.unwrap().name, "Pension Plan");
    }

    #[tokio::test]
    async fn test_cross_tenant_lookup_is_invisible() {
        let db = test_db().await;
        let owner = seed_advisor(&db, "a@example.com").await;
        let other = seed_advisor(&db, "b@example.com").await;
        let repo = SeaOrmProductRepository::new(db);

        let created = repo
            .create_product(owner, product_dto("Private Fund", 10.0))
            .await
            .unwrap();

        assert!(repo.find_by_id(other, created.id).await.unwrap().is_none());
        assert!(repo.find_all(other).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_returns_only_own_products() {
        let db = test_db().await;
        let owner = seed_advisor(&db, "a@example.com").await;
        let other = seed_advisor(&db, "b@example.com").await;
        let repo = SeaOrmProductRepository::new(db);

        repo.create_product(owner, product_dto("First", 1.0)).await.unwrap();
        repo.create_product(owner, product_dto("Second", 2.0)).await.unwrap();
        repo.create_product(other, product_dto("Foreign", 3.0)).await.unwrap();

        let products = repo.find_all(owner).await.unwrap();
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.advisor_id == owner));
    }
}
