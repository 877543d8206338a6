//! Authentication middleware.
//!
//! Validates the `Authorization: Bearer <token>` header against a single
//! static secret before any handler runs.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Shared secret the auth middleware compares bearer tokens against.
#[derive(Clone)]
pub struct BearerAuth {
    secret: std::sync::Arc<str>,
}

impl BearerAuth {
    /// Creates an auth state from the configured token.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into().into(),
        }
    }

    /// Compares a presented token to the secret in constant time.
    pub fn verify(&self, presented: &str) -> bool {
        presented.as_bytes().ct_eq(self.secret.as_bytes()).into()
    }
}

/// Bearer token authentication middleware handler.
///
/// Rejects the request with 401 before it reaches the handler when the
/// `Authorization` header is missing, is not a bearer scheme, or carries a
/// token that does not match the configured secret.
pub async fn bearer_auth_middleware(
    State(auth): State<BearerAuth>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&req).ok_or(AppError::Unauthorized)?;
    if !auth.verify(token) {
        tracing::warn!(path = %req.uri().path(), "rejected request with invalid bearer token");
        return Err(AppError::Unauthorized);
    }
    Ok(next.run(req).await)
}

/// Extract bearer token from Authorization header.
pub fn extract_bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_auth(value: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/query");
        if let Some(value) = value {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = request_with_auth(Some("Bearer secret123"));
        assert_eq!(extract_bearer_token(&req), Some("secret123"));
    }

    #[test]
    fn test_extract_rejects_other_schemes() {
        let req = request_with_auth(Some("Basic dXNlcjpwYXNz"));
        assert_eq!(extract_bearer_token(&req), None);

        let req = request_with_auth(None);
        assert_eq!(extract_bearer_token(&req), None);
    }

    #[test]
    fn test_verify() {
        let auth = BearerAuth::new("secret123");
        assert!(auth.verify("secret123"));
        assert!(!auth.verify("wrong"));
        assert!(!auth.verify(""));
        assert!(!auth.verify("secret1234"));
    }
}
