//! Middleware components for all services.

pub mod auth;
pub mod request_id;

// Re-export commonly used types
pub use auth::{bearer_auth_middleware, extract_bearer_token, BearerAuth};
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
