//! Compiled type guards for the store contract.
//!
//! Each schema document is compiled exactly once, on first use, into a
//! process-lifetime [`Validator`]. The boolean guards are the hot path: pure
//! predicates suitable for calling inline wherever a response body has been
//! decoded, from any thread. They collapse every violation (missing field,
//! wrong type, extra key, nested constraint) into `false`; callers that want
//! per-error detail go through [`SchemaRegistry`](crate::SchemaRegistry) or
//! the `parse_*` functions.

use std::sync::LazyLock;

use jsonschema::Validator;
use perch_core::{Channel, Post, Workspace};
use serde_json::Value;

use crate::error::SchemaError;
use crate::schemas;

static WORKSPACES: LazyLock<Validator> =
    LazyLock::new(|| compile("workspaces", schemas::workspaces()));

static CHANNELS: LazyLock<Validator> = LazyLock::new(|| compile("channels", schemas::channels()));

static POST: LazyLock<Validator> = LazyLock::new(|| compile("post", schemas::post()));

/// Compile a schema document, panicking on failure. The documents are static
/// data in this crate, so a compile failure is a build-time defect.
fn compile(name: &str, schema: &Value) -> Validator {
    jsonschema::validator_for(schema)
        .unwrap_or_else(|error| panic!("{name} schema failed to compile: {error}"))
}

/// Whether `value` is a conforming array of workspace envelopes.
#[must_use]
pub fn is_workspaces(value: &Value) -> bool {
    check("workspaces", &WORKSPACES, value)
}

/// Whether `value` is a conforming array of channel envelopes.
#[must_use]
pub fn is_channels(value: &Value) -> bool {
    check("channels", &CHANNELS, value)
}

/// Whether `value` is a conforming post envelope.
#[must_use]
pub fn is_post(value: &Value) -> bool {
    check("post", &POST, value)
}

fn check(name: &str, validator: &Validator, value: &Value) -> bool {
    let valid = validator.is_valid(value);
    if !valid {
        tracing::debug!(schema = name, "payload failed schema validation");
    }
    valid
}

/// Validate and decode an array of workspace envelopes.
///
/// # Errors
///
/// Returns `SchemaError::ValidationFailed` with per-error detail when the
/// value does not conform, or `SchemaError::Decode` if a conforming value
/// fails typed decoding.
pub fn parse_workspaces(value: &Value) -> Result<Vec<Workspace>, SchemaError> {
    validate(&WORKSPACES, value)?;
    Ok(serde_json::from_value(value.clone())?)
}

/// Validate and decode an array of channel envelopes.
///
/// # Errors
///
/// See [`parse_workspaces`].
pub fn parse_channels(value: &Value) -> Result<Vec<Channel>, SchemaError> {
    validate(&CHANNELS, value)?;
    Ok(serde_json::from_value(value.clone())?)
}

/// Validate and decode a single post envelope.
///
/// # Errors
///
/// See [`parse_workspaces`].
pub fn parse_post(value: &Value) -> Result<Post, SchemaError> {
    validate(&POST, value)?;
    Ok(serde_json::from_value(value.clone())?)
}

fn validate(validator: &Validator, value: &Value) -> Result<(), SchemaError> {
    let errors: Vec<String> = validator
        .iter_errors(value)
        .map(|error| error.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::ValidationFailed { errors })
    }
}
