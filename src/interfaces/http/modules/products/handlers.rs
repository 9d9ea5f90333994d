//! Product handlers
//!
//! All routes here sit behind the auth middleware; the owning advisor id
//! always comes from the request extension, never from the client.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::info;

use super::dto::{CreateProductRequest, ProductResponse};
use crate::application::services::ProductService;
use crate::domain::product::CreateProductDto;
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::{ApiError, ErrorBody};
use crate::interfaces::http::middleware::AuthenticatedAdvisor;

/// Product route state
#[derive(Clone)]
pub struct ProductApiState {
    pub service: Arc<ProductService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 403, description = "Missing or invalid token")
    )
)]
pub async fn create_product(
    State(state): State<ProductApiState>,
    Extension(advisor): Extension<AuthenticatedAdvisor>,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    info!(advisor_id = advisor.advisor_id, "Creating product");

    let product = state
        .service
        .create(
            advisor.advisor_id,
            CreateProductDto {
                name: body.name,
                description: body.description,
                price: body.price,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Products owned by the caller", body = Vec<ProductResponse>),
        (status = 403, description = "Missing or invalid token"),
        (status = 404, description = "No products found", body = ErrorBody)
    )
)]
pub async fn list_products(
    State(state): State<ProductApiState>,
    Extension(advisor): Extension<AuthenticatedAdvisor>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = state.service.list(advisor.advisor_id).await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{product_id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 403, description = "Missing or invalid token"),
        (status = 404, description = "No products found", body = ErrorBody)
    )
)]
pub async fn get_product(
    State(state): State<ProductApiState>,
    Extension(advisor): Extension<AuthenticatedAdvisor>,
    Path(product_id): Path<i32>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state
        .service
        .get_by_id(advisor.advisor_id, product_id)
        .await?;

    Ok(Json(product.into()))
}
