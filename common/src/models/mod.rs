//! Shared data models.

pub mod query;

// Re-export commonly used types
pub use query::QueryRequest;
