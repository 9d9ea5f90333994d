//! Advisor registration and login flow

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::advisor::{AdvisorRepositoryInterface, PublicAdvisor, RegisterAdvisorDto};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::verify_password;

/// Single message for both unknown email and wrong password, so a caller
/// cannot probe which emails are registered.
const LOGIN_FAILED: &str = "Email or Password is incorrect";

pub struct AdvisorService {
    advisors: Arc<dyn AdvisorRepositoryInterface>,
    jwt: JwtConfig,
}

impl AdvisorService {
    pub fn new(advisors: Arc<dyn AdvisorRepositoryInterface>, jwt: JwtConfig) -> Self {
        Self { advisors, jwt }
    }

    /// Register a new advisor. The repository hashes the password before
    /// the write; the returned projection carries no credential material.
    pub async fn register(&self, dto: RegisterAdvisorDto) -> DomainResult<PublicAdvisor> {
        let advisor = self.advisors.create_advisor(dto).await?;
        info!(advisor_id = advisor.id, "Advisor created successfully");
        Ok(PublicAdvisor::from(advisor))
    }

    /// Authenticate by email and password, returning a signed bearer token.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<String> {
        let Some(advisor) = self.advisors.find_by_email(email).await? else {
            warn!(email, "Login attempt with unknown email");
            return Err(DomainError::Unauthorized(LOGIN_FAILED.to_string()));
        };

        let password = password.to_owned();
        let stored_hash = advisor.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| DomainError::Storage(format!("Verification task failed: {e}")))?
            .unwrap_or_else(|e| {
                // a malformed stored hash counts as a mismatch, but is logged
                error!(error = %e, "Password verification failed");
                false
            });

        if !valid {
            warn!(email, "Login attempt with invalid password");
            return Err(DomainError::Unauthorized(LOGIN_FAILED.to_string()));
        }

        let token = create_token(advisor.id, &self.jwt)
            .map_err(|e| DomainError::Storage(format!("Token signing failed: {e}")))?;

        info!(advisor_id = advisor.id, "Advisor successfully authenticated");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advisor::Advisor;
    use crate::infrastructure::crypto::jwt::verify_token;
    use crate::infrastructure::crypto::password::hash_password;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    /// In-memory stand-in mirroring the real repository's contract,
    /// including hashing before the write and duplicate-email conflicts.
    struct InMemoryAdvisors {
        rows: Mutex<Vec<Advisor>>,
    }

    impl InMemoryAdvisors {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                rows: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl AdvisorRepositoryInterface for InMemoryAdvisors {
        async fn create_advisor(&self, dto: RegisterAdvisorDto) -> DomainResult<Advisor> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|a| a.email == dto.email) {
                return Err(DomainError::Conflict("Email already exists".to_string()));
            }
            let now = Utc::now();
            let advisor = Advisor {
                id: rows.len() as i32 + 1,
                name: dto.name,
                email: dto.email,
                password_hash: hash_password(&dto.password, 4).unwrap(),
                created_at: now,
                updated_at: now,
            };
            rows.push(advisor.clone());
            Ok(advisor)
        }

        async fn find_by_email(&self, email: &str) -> DomainResult<Option<Advisor>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.email == email)
                .cloned())
        }

        async fn find_by_id(&self, id: i32) -> DomainResult<Option<Advisor>> {
            Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
        }
    }

    fn service(repo: Arc<InMemoryAdvisors>) -> AdvisorService {
        AdvisorService::new(repo, JwtConfig::default())
    }

    fn register_dto() -> RegisterAdvisorDto {
        RegisterAdvisorDto {
            name: "Jane Advisor".to_string(),
            email: "jane@example.com".to_string(),
            password: "password1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_returns_public_projection() {
        let repo = InMemoryAdvisors::new();
        let advisor = service(repo.clone()).register(register_dto()).await.unwrap();

        assert_eq!(advisor.email, "jane@example.com");
        // the stored row holds a hash, not the plaintext
        let stored = repo.find_by_email("jane@example.com").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "password1");
    }

    #[tokio::test]
    async fn test_login_issues_token_for_the_advisor() {
        let repo = InMemoryAdvisors::new();
        let svc = service(repo);
        let registered = svc.register(register_dto()).await.unwrap();

        let token = svc.login("jane@example.com", "password1").await.unwrap();
        let claims = verify_token(&token, &JwtConfig::default()).unwrap();
        assert_eq!(claims.advisor_id, registered.id);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let repo = InMemoryAdvisors::new();
        let svc = service(repo);
        svc.register(register_dto()).await.unwrap();

        let wrong_password = svc.login("jane@example.com", "nope").await.unwrap_err();
        let unknown_email = svc.login("ghost@example.com", "password1").await.unwrap_err();

        assert_eq!(wrong_password, unknown_email);
        assert_eq!(
            wrong_password,
            DomainError::Unauthorized(LOGIN_FAILED.to_string())
        );
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_conflict() {
        let repo = InMemoryAdvisors::new();
        let svc = service(repo);
        svc.register(register_dto()).await.unwrap();

        let err = svc.register(register_dto()).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
