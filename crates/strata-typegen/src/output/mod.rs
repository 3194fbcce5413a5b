//! Output backends.
//!
//! Each backend takes a [`SchemaDef`](crate::ir::SchemaDef) and produces one
//! source module as a string. Backends are pure; persisting the result is the
//! caller's job.

pub mod typescript;

pub use typescript::generate_typescript_types;
