//! Advisor registration and login handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use super::dto::{AdvisorResponse, LoginRequest, RegisterRequest, TokenResponse};
use crate::application::services::AdvisorService;
use crate::domain::advisor::RegisterAdvisorDto;
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::{ApiError, ErrorBody};

/// Advisor route state
#[derive(Clone)]
pub struct AdvisorApiState {
    pub service: Arc<AdvisorService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/advisor/register",
    tag = "Advisor",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Advisor created", body = AdvisorResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 409, description = "Email already exists", body = ErrorBody)
    )
)]
pub async fn register(
    State(state): State<AdvisorApiState>,
    ValidatedJson(body): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AdvisorResponse>), ApiError> {
    info!("Registering advisor");

    let advisor = state
        .service
        .register(RegisterAdvisorDto {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(advisor.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/advisor/login",
    tag = "Advisor",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = TokenResponse),
        (status = 400, description = "Missing email or password", body = ErrorBody),
        (status = 401, description = "Bad credentials", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AdvisorApiState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    if body.email.is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email or password is missing".to_string(),
        ));
    }

    let token = state.service.login(&body.email, &body.password).await?;

    Ok(Json(TokenResponse { token }))
}
