//! Advisor DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::advisor::PublicAdvisor;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Advisor name is required field"))]
    pub name: String,
    #[validate(email(message = "Email is required field"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required field"))]
    pub password: String,
}

/// Login body. Fields default to empty so a missing field is handled by
/// the handler's presence check rather than a deserialization error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Public advisor view. There is deliberately no password field here.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdvisorResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PublicAdvisor> for AdvisorResponse {
    fn from(advisor: PublicAdvisor) -> Self {
        Self {
            id: advisor.id,
            name: advisor.name,
            email: advisor.email,
            created_at: advisor.created_at,
            updated_at: advisor.updated_at,
        }
    }
}
