//! Schema validation error types.

use thiserror::Error;

/// Errors from the schema registry and typed decoding.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema compilation error. Only reachable with a malformed schema
    /// document, which is a build-time defect, not a runtime condition.
    #[error("Schema compilation error: {0}")]
    Compile(String),

    /// A value passed schema validation but failed to decode into its typed
    /// counterpart.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
