//! SeaORM implementation of the advisor repository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr};
use tracing::info;

use crate::domain::advisor::{Advisor, AdvisorRepositoryInterface, RegisterAdvisorDto};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::crypto::password::hash_password;
use crate::infrastructure::database::entities::advisor;

pub struct SeaOrmAdvisorRepository {
    db: DatabaseConnection,
    bcrypt_cost: u32,
}

impl SeaOrmAdvisorRepository {
    pub fn new(db: DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(model: advisor::Model) -> Advisor {
    Advisor {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn insert_err(e: sea_orm::DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::Conflict("Email already exists".to_string())
        }
        _ => db_err(e),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl AdvisorRepositoryInterface for SeaOrmAdvisorRepository {
    async fn create_advisor(&self, dto: RegisterAdvisorDto) -> DomainResult<Advisor> {
        let cost = self.bcrypt_cost;
        let password = dto.password;

        // hash before persist; bcrypt is deliberately slow, keep it off
        // the async workers
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| DomainError::Storage(format!("Hashing task failed: {e}")))?
            .map_err(|e| DomainError::Storage(format!("Failed to hash password: {e}")))?;

        let now = Utc::now();
        let new_advisor = advisor::ActiveModel {
            id: NotSet,
            name: Set(dto.name),
            email: Set(dto.email),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = new_advisor.insert(&self.db).await.map_err(insert_err)?;
        info!(advisor_id = created.id, "Advisor persisted");

        Ok(model_to_domain(created))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Advisor>> {
        let model = advisor::Entity::find()
            .filter(advisor::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Advisor>> {
        let model = advisor::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::password::verify_password;
    use crate::infrastructure::database::migrator::Migrator;
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;

    async fn test_db() -> DatabaseConnection {
        // a single connection so the in-memory store is shared and
        // competing writes serialize onto one database
        let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
        options.max_connections(1);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    fn register_dto(email: &str) -> RegisterAdvisorDto {
        RegisterAdvisorDto {
            name: "Jane Advisor".to_string(),
            email: email.to_string(),
            password: "password1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_persists_hash_not_plaintext() {
        let repo = SeaOrmAdvisorRepository::new(test_db().await, 4);

        let created = repo.create_advisor(register_dto("jane@example.com")).await.unwrap();

        assert_ne!(created.password_hash, "password1");
        assert!(verify_password("password1", &created.password_hash).unwrap());

        let found = repo.find_by_email("jane@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_ne!(found.password_hash, "password1");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = SeaOrmAdvisorRepository::new(test_db().await, 4);

        repo.create_advisor(register_dto("dup@example.com")).await.unwrap();
        let err = repo
            .create_advisor(register_dto("dup@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_registrations_one_wins() {
        let repo = std::sync::Arc::new(SeaOrmAdvisorRepository::new(test_db().await, 4));

        let (a, b) = tokio::join!(
            repo.create_advisor(register_dto("race@example.com")),
            repo.create_advisor(register_dto("race@example.com")),
        );

        let outcomes = [a, b];
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(outcomes
            .iter()
            .any(|r| matches!(r, Err(DomainError::Conflict(_)))));
    }

    #[tokio::test]
    async fn test_find_by_unknown_email_is_none() {
        let repo = SeaOrmAdvisorRepository::new(test_db().await, 4);
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }
}
