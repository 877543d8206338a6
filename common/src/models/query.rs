//! SQL query models.
//!
//! Contains the inbound request model for query forwarding.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for forwarding a SQL query to ClickHouse.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct QueryRequest {
    /// SQL statement to execute, e.g. `SELECT name, engine FROM system.tables LIMIT 5`.
    #[validate(length(min = 1, message = "SQL query is required"))]
    pub query: String,

    /// Output format override; defaults to ClickHouse's JSONCompact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Database override; defaults to the configured database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}
