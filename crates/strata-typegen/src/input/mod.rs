//! Schema providers.
//!
//! The generator consumes a ready-made [`SchemaDef`](crate::ir::SchemaDef);
//! providers produce one. JSON is the only wire format today.

pub mod json;

pub use json::{SchemaError, parse_schema, schema_to_json};
