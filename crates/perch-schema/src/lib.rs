//! # perch-schema
//!
//! The store contract for Perch: JSON Schema documents and the compiled type
//! guards that gate every payload crossing the network boundary.
//!
//! This crate provides:
//! - `schemas`: the three draft-07 schema documents (workspaces, channels,
//!   post), declared as data so they can be published as a machine-readable
//!   contract
//! - Type guards ([`is_workspaces`], [`is_channels`], [`is_post`]): pure
//!   boolean predicates compiled once from those documents
//! - [`SchemaRegistry`]: name-keyed schema lookup and diagnostic validation
//!   with per-error detail, for tooling and logging
//!
//! ## Architecture
//!
//! The backend is a loosely-typed document store, so every response is
//! revalidated here before the rest of the client trusts it. The guards are
//! synchronous and side-effect-free so adapters can call them inline wherever
//! a response body is decoded. Typed decoding into `perch-core` structs goes
//! through [`parse_workspaces`], [`parse_channels`], and [`parse_post`].

mod error;
mod guards;
mod registry;
pub mod schemas;

pub use error::SchemaError;
pub use guards::{
    is_channels, is_post, is_workspaces, parse_channels, parse_post, parse_workspaces,
};
pub use registry::SchemaRegistry;
