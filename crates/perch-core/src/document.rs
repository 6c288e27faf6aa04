//! Document envelope and audit metadata.
//!
//! Every document in the store, regardless of kind, arrives as
//! `{doc, meta, path}`. The envelope and metadata are closed shapes: the
//! store contract forbids keys beyond the ones declared here, which
//! `deny_unknown_fields` mirrors on the serde side.

use serde::{Deserialize, Serialize};

/// Audit block recorded by the store on every document.
///
/// Timestamps are epoch milliseconds; `u64` encodes the contract's
/// non-negative-integer constraint in the type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Metadata {
    pub created_at: u64,
    pub created_by: String,
    pub last_modified_at: u64,
    pub last_modified_by: String,
}

/// The `{doc, meta, path}` wrapper common to all stored documents.
///
/// `path` is the document's hierarchical location in the store
/// (e.g. `/workspaces/general/channels/random`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Envelope<T> {
    pub doc: T,
    pub meta: Metadata,
    pub path: String,
}

/// A workspace envelope. The `doc` payload is an open object: the store
/// contract only requires it to be an object and constrains nothing inside.
pub type Workspace = Envelope<serde_json::Map<String, serde_json::Value>>;

/// A channel envelope. Same open `doc` payload as [`Workspace`].
pub type Channel = Envelope<serde_json::Map<String, serde_json::Value>>;
