use chrono::{DateTime, Utc};

/// Advisor account — the tenant that owns a private product catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Advisor {
    pub id: i32,
    pub name: String,
    /// Login key, unique across all advisors
    pub email: String,
    /// bcrypt hash; never leaves the auth boundary
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projection of an advisor that is safe to return to clients.
///
/// Carries no credential material at the type level, so a handler cannot
/// accidentally serialize the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicAdvisor {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Advisor> for PublicAdvisor {
    fn from(advisor: Advisor) -> Self {
        Self {
            id: advisor.id,
            name: advisor.name,
            email: advisor.email,
            created_at: advisor.created_at,
            updated_at: advisor.updated_at,
        }
    }
}
