//! Core contracts and helpers for dbtwin.
//!
//! This crate defines the canonical schema snapshot types, the column
//! semantics classifier, the foreign-key dependency ordering, and utilities
//! shared between the introspection adapter and the generators.

pub mod error;
pub mod graph;
pub mod redaction;
pub mod schema;
pub mod semantics;
pub mod validation;

pub use error::{Error, Result};
pub use graph::{creation_order, CreationOrder};
pub use redaction::{redact_connection_string, RedactedConnection};
pub use schema::{Column, DatabaseSchema, ForeignKey, Index, Table};
pub use semantics::{classify, SemanticKind};
pub use validation::validate_schema;

/// Current contract version for `schema.json` artifacts.
pub const SCHEMA_VERSION: &str = "0.1";
