//! TypeScript type generation from content schemas.
//!
//! `strata-typegen` converts a content schema (named document and object
//! type definitions with typed fields) into a TypeScript module of
//! equivalent `export type` declarations, so a content pipeline can give
//! authors compile-time guarantees about the shape of their content.
//!
//! # Architecture
//!
//! ```text
//! Provider              Schema               Output Backend
//! ─────────────     ──────────────     ─────────────────────────
//! JSON snapshot ──> SchemaDef (ir.rs) ──> TypeScript declarations
//! ```
//!
//! Generation is pure and deterministic: one [`SchemaDef`](ir::SchemaDef) in,
//! one string out, definitions sorted by name. Persisting the result is the
//! caller's job (the `strata` CLI writes it into the artifact directory).
//!
//! # Example
//!
//! ```
//! use strata_typegen::generate_typescript_types;
//! use strata_typegen::ir::{DocumentDef, FieldDef, FieldKind, SchemaDef};
//!
//! let mut schema = SchemaDef::new();
//! schema.add_document(
//!     DocumentDef::new("Post", "Post")
//!         .with_fields(vec![FieldDef::required("title", FieldKind::String)]),
//! );
//!
//! let module = generate_typescript_types(&schema);
//! assert!(module.contains("export type Post = {"));
//! assert!(module.contains("title: string"));
//! ```

pub mod input;
pub mod ir;
pub mod output;

// Re-export commonly used items
pub use input::{SchemaError, parse_schema, schema_to_json};
pub use output::generate_typescript_types;
