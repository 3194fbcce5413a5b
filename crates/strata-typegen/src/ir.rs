//! Schema snapshot for one generation run.
//!
//! A [`SchemaDef`] is the immutable value the generator consumes: named
//! document and object type definitions with typed fields. It is produced
//! upstream (the CLI loads it from JSON) and never mutated here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A whole-schema snapshot: document and object type definitions keyed by
/// name. Names are unique within each map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDef {
    /// Document type definitions.
    #[serde(default)]
    pub documents: HashMap<String, DocumentDef>,
    /// Object type definitions.
    #[serde(default)]
    pub objects: HashMap<String, ObjectDef>,
}

/// A document type: a top-level content record with identity members and
/// optional computed fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDef {
    /// Identifier, also used as the generated type's discriminant literal.
    pub name: String,
    /// Display name.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub computed_fields: Vec<ComputedField>,
}

/// An object type: a nested content record without identity or computed
/// fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDef {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// One field of a document or object type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name as it appears in the schema.
    pub name: String,
    /// Whether authors must supply the field.
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The field's kind and kind-specific payload.
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// The kind of a field.
///
/// This covers everything the content system accepts. Kinds the TypeScript
/// backend does not implement yet (`Number`, `Json`, `Url`) still parse and
/// render as a placeholder, so generation never aborts on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Boolean,
    String,
    Date,
    Image,
    Markdown,
    /// Reference to a document type, stored as that document's id.
    Reference { document_type: String },
    /// Reference to an object type, embedded in place.
    Object { object_type: String },
    /// An anonymous nested record.
    InlineObject { fields: Vec<FieldDef> },
    List { item: ListItemDef },
    PolymorphicList { items: Vec<ListItemDef> },
    /// Closed set of string options, in declared order.
    Enum { options: Vec<String> },
    Number,
    Json,
    Url,
}

impl FieldKind {
    /// The schema-facing kind name (matches the serialized `type` tag).
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::Boolean => "boolean",
            FieldKind::String => "string",
            FieldKind::Date => "date",
            FieldKind::Image => "image",
            FieldKind::Markdown => "markdown",
            FieldKind::Reference { .. } => "reference",
            FieldKind::Object { .. } => "object",
            FieldKind::InlineObject { .. } => "inline_object",
            FieldKind::List { .. } => "list",
            FieldKind::PolymorphicList { .. } => "polymorphic_list",
            FieldKind::Enum { .. } => "enum",
            FieldKind::Number => "number",
            FieldKind::Json => "json",
            FieldKind::Url => "url",
        }
    }
}

/// The restricted kind set valid as a list member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListItemDef {
    Boolean,
    String,
    Object { object_type: String },
    Reference { document_type: String },
    Enum { options: Vec<String> },
    InlineObject { fields: Vec<FieldDef> },
    Number,
}

impl ListItemDef {
    /// The schema-facing kind name (matches the serialized `type` tag).
    pub fn kind_name(&self) -> &'static str {
        match self {
            ListItemDef::Boolean => "boolean",
            ListItemDef::String => "string",
            ListItemDef::Object { .. } => "object",
            ListItemDef::Reference { .. } => "reference",
            ListItemDef::Enum { .. } => "enum",
            ListItemDef::InlineObject { .. } => "inline_object",
            ListItemDef::Number => "number",
        }
    }
}

/// A derived field whose type text is supplied pre-rendered and emitted
/// verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputedField {
    pub name: String,
    /// Raw TypeScript type expression. Opaque to the generator.
    pub type_expr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SchemaDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, doc: DocumentDef) {
        self.documents.insert(doc.name.clone(), doc);
    }

    pub fn add_object(&mut self, obj: ObjectDef) {
        self.objects.insert(obj.name.clone(), obj);
    }
}

impl DocumentDef {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: None,
            fields: Vec::new(),
            computed_fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldDef>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_computed_fields(mut self, computed_fields: Vec<ComputedField>) -> Self {
        self.computed_fields = computed_fields;
        self
    }
}

impl ObjectDef {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldDef>) -> Self {
        self.fields = fields;
        self
    }
}

impl FieldDef {
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            required: true,
            description: None,
            kind,
        }
    }

    pub fn optional(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            required: false,
            description: None,
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl ComputedField {
    pub fn new(name: impl Into<String>, type_expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_expr: type_expr.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
