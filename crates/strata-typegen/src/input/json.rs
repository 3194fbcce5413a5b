//! JSON schema provider.
//!
//! Deserializes a [`SchemaDef`] snapshot from its JSON form and serializes
//! it back for the side artifact the CLI persists next to generated types.

use crate::ir::SchemaDef;

/// Errors from loading or persisting a schema snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a schema snapshot from its JSON serialization.
///
/// Referential integrity of `object_type` / `document_type` names is not
/// checked here; that is the schema author's contract.
pub fn parse_schema(input: &str) -> Result<SchemaDef, SchemaError> {
    Ok(serde_json::from_str(input)?)
}

/// Serialize a schema snapshot to pretty-printed JSON.
pub fn schema_to_json(schema: &SchemaDef) -> Result<String, SchemaError> {
    Ok(serde_json::to_string_pretty(schema)?)
}
