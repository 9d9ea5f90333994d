//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::services::{AdvisorService, ProductService};
use crate::domain::advisor::AdvisorRepositoryInterface;
use crate::domain::product::ProductRepositoryInterface;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::{
    SeaOrmAdvisorRepository, SeaOrmProductRepository,
};
use crate::interfaces::http::error::ErrorBody;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{advisors, health, products};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Advisor
        advisors::register,
        advisors::login,
        // Products
        products::create_product,
        products::list_products,
        products::get_product,
    ),
    components(
        schemas(
            ErrorBody,
            // Advisor
            advisors::RegisterRequest,
            advisors::LoginRequest,
            advisors::TokenResponse,
            advisors::AdvisorResponse,
            // Products
            products::CreateProductRequest,
            products::ProductResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Advisor", description = "Advisor registration and login (JWT)"),
        (name = "Product", description = "Advisor-owned product catalog"),
    ),
    info(
        title = "Advisor Catalog API",
        version = "1.0.0",
        description = "REST API for advisors managing their private product catalogs",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(db: DatabaseConnection, jwt: JwtConfig, bcrypt_cost: u32) -> Router {
    let advisor_repo: Arc<dyn AdvisorRepositoryInterface> =
        Arc::new(SeaOrmAdvisorRepository::new(db.clone(), bcrypt_cost));
    let product_repo: Arc<dyn ProductRepositoryInterface> =
        Arc::new(SeaOrmProductRepository::new(db));

    let advisor_state = advisors::AdvisorApiState {
        service: Arc::new(AdvisorService::new(advisor_repo, jwt.clone())),
    };
    let product_state = products::ProductApiState {
        service: Arc::new(ProductService::new(product_repo)),
    };
    let auth_state = AuthState { jwt };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Advisor routes (public)
    let advisor_routes = Router::new()
        .route("/register", post(advisors::register))
        .route("/login", post(advisors::login))
        .with_state(advisor_state);

    // Product routes (behind the identity gate)
    let product_routes = Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route("/{product_id}", get(products::get_product))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(product_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .nest("/api/v1/advisor", advisor_routes)
        .nest("/api/v1/products", product_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
