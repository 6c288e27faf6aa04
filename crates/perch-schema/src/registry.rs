//! Name-keyed registry over the store contract schemas.
//!
//! The boolean guards in [`crate::guards`] are the hot path; the registry
//! exists for tooling: exporting the contract documents, listing what the
//! client validates, and diagnostic validation that keeps per-error detail
//! instead of collapsing to a boolean.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::SchemaError;
use crate::schemas;

/// Central store of the contract schemas, keyed by document kind.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, &'static Value>,
}

impl SchemaRegistry {
    /// Build a registry over the three contract documents.
    #[must_use]
    pub fn new() -> Self {
        let mut map = HashMap::new();
        map.insert("workspaces", schemas::workspaces());
        map.insert("channels", schemas::channels());
        map.insert("post", schemas::post());
        Self { schemas: map }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static Value> {
        self.schemas.get(name).copied()
    }

    /// Validate a JSON value against a named schema, collecting every
    /// violation rather than stopping at the first.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|error| SchemaError::Compile(error.to_string()))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|error| error.to_string())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
