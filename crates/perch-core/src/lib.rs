//! # perch-core
//!
//! Core document types for Perch, a messaging client backed by a
//! hierarchical-path document store.
//!
//! Everything the store returns is wrapped in the same envelope:
//! `{doc, meta, path}`. This crate provides the typed counterparts of those
//! decoded payloads:
//! - [`Envelope`] and [`Metadata`]: the common wrapper and its audit block
//! - [`Workspace`] / [`Channel`]: envelopes around an open `doc` object
//! - [`PostBody`] and [`ReactionMap`]: the closed post payload
//!
//! These are pure value objects. Validation against the published store
//! contract lives in `perch-schema`; network I/O belongs to the adapters
//! that consume both crates.

pub mod document;
pub mod post;

pub use document::{Channel, Envelope, Metadata, Workspace};
pub use post::{Post, PostBody, Reaction, ReactionMap, STARRED_TAG};
