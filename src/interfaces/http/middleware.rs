//! Authentication middleware for Axum
//!
//! The sole authorization gate for tenant-scoped routes. A request either
//! leaves here with `AuthenticatedAdvisor` attached, or is answered with
//! 403 and never reaches a handler.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenClaims};

const MISSING_AUTH: &str = "Authorization token is missing or invalid";

/// Authentication state for the middleware
#[derive(Clone)]
pub struct AuthState {
    pub jwt: JwtConfig,
}

/// Identity attached to the request after a successful verification.
/// Handlers must scope every read and write by this id, never by a
/// client-supplied one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedAdvisor {
    pub advisor_id: i32,
}

impl AuthenticatedAdvisor {
    pub fn from_claims(claims: &TokenClaims) -> Self {
        Self {
            advisor_id: claims.advisor_id,
        }
    }
}

/// Extract the token from a `Bearer <token>` header value
fn extract_token(auth_header: &str) -> Option<&str> {
    let token = auth_header.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Bearer-token authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response(MISSING_AUTH);
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response(MISSING_AUTH);
    };

    match verify_token(token, &auth_state.jwt) {
        Ok(claims) => {
            let advisor = AuthenticatedAdvisor::from_claims(&claims);
            request.extensions_mut().insert(advisor);
            next.run(request).await
        }
        Err(e) => {
            warn!(error = %e, "Rejected bearer token");
            auth_error_response(&e.to_string())
        }
    }
}

fn auth_error_response(message: &str) -> Response {
    let body = Json(json!({
        "error": true,
        "errorMsg": message
    }));

    (StatusCode::FORBIDDEN, body).into_response()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::jwt::create_token;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use axum::routing::get;
    use axum::{middleware, Extension, Router};
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use tower::ServiceExt;

    async fn whoami(Extension(advisor): Extension<AuthenticatedAdvisor>) -> String {
        advisor.advisor_id.to_string()
    }

    fn app(jwt: JwtConfig) -> Router {
        Router::new()
            .route("/protected", get(whoami))
            .layer(middleware::from_fn_with_state(
                AuthState { jwt },
                auth_middleware,
            ))
    }

    fn request(auth_header: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().method("GET").uri("/protected");
        if let Some(value) = auth_header {
            builder = builder.header("authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let response = app(JwtConfig::default())
            .oneshot(request(None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["error"], true);
        assert_eq!(body["errorMsg"], MISSING_AUTH);
    }

    #[tokio::test]
    async fn test_wrong_scheme_is_rejected() {
        let response = app(JwtConfig::default())
            .oneshot(request(Some("Basic dXNlcjpwYXNz")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["errorMsg"], MISSING_AUTH);
    }

    #[tokio::test]
    async fn test_empty_token_is_rejected() {
        let response = app(JwtConfig::default())
            .oneshot(request(Some("Bearer ")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["errorMsg"], MISSING_AUTH);
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected_with_verifier_reason() {
        let response = app(JwtConfig::default())
            .oneshot(request(Some("Bearer not.a.token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_json(response).await["errorMsg"],
            "Invalid authentication token"
        );
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected_with_expiry_reason() {
        let jwt = JwtConfig::default();
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            advisor_id: 5,
            iat: now - 1200,
            exp: now - 600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt.secret.as_bytes()),
        )
        .unwrap();

        let response = app(jwt)
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["errorMsg"], "Token has expired");
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler_with_identity() {
        let jwt = JwtConfig::default();
        let token = create_token(5, &jwt).unwrap();

        let response = app(jwt)
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"5");
    }
}
