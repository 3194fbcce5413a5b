//! TypeScript output backend - emits a schema as a typed module.
//!
//! The generated module declares one `export type` per document and object
//! definition, plus the cross-referencing unions (`DocumentTypes`,
//! `ObjectTypes`, ...) the content pipeline consumes. Definitions are sorted
//! by name before rendering, so output is byte-identical for a given schema
//! regardless of map iteration order.

use crate::ir::{ComputedField, DocumentDef, FieldDef, FieldKind, ListItemDef, ObjectDef, SchemaDef};

const INDENT: &str = "  ";

/// Fixed block every generated module starts with. The `Image` and
/// `Markdown` aliases are what rendered field types reference.
const PREAMBLE: &str = "\
// This file is auto-generated by strata. Do not edit it manually.

export type Image = string
export type Markdown = string";

/// Generate the full TypeScript module for a schema.
pub fn generate_typescript_types(schema: &SchemaDef) -> String {
    let mut documents: Vec<&DocumentDef> = schema.documents.values().collect();
    documents.sort_by(|a, b| a.name.cmp(&b.name));

    let mut objects: Vec<&ObjectDef> = schema.objects.values().collect();
    objects.sort_by(|a, b| a.name.cmp(&b.name));

    let mut blocks: Vec<String> = vec![PREAMBLE.to_string()];

    blocks.push(format!(
        "export type DocumentTypes = {}",
        union_of(documents.iter().map(|d| d.name.as_str()))
    ));
    blocks.push("export type DocumentTypeNames = DocumentTypes['_typeName']".to_string());

    blocks.push("export type AllTypes = DocumentTypes | ObjectTypes".to_string());
    blocks.push("export type AllTypeNames = DocumentTypeNames | ObjectTypeNames".to_string());

    blocks.push(document_type_map(&documents));

    for doc in &documents {
        blocks.push(document_declaration(doc));
    }

    blocks.push(format!(
        "export type ObjectTypes = {}",
        union_of(objects.iter().map(|o| o.name.as_str()))
    ));
    blocks.push("export type ObjectTypeNames = ObjectTypes['_typeName']".to_string());

    for obj in &objects {
        blocks.push(object_declaration(obj));
    }

    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

/// Union of type names. An empty literal union is not valid TypeScript, so
/// zero members always yields the bottom marker `never`.
fn union_of<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        "never".to_string()
    } else {
        names.join(" | ")
    }
}

/// Name-to-type lookup table over all document types, in sorted order.
fn document_type_map(documents: &[&DocumentDef]) -> String {
    if documents.is_empty() {
        return "export type DocumentTypeMap = {}".to_string();
    }
    let mut out = String::from("export type DocumentTypeMap = {\n");
    for doc in documents {
        out.push_str(&format!("{INDENT}{name}: {name}\n", name = doc.name));
    }
    out.push('}');
    out
}

fn document_declaration(doc: &DocumentDef) -> String {
    let mut out = String::new();
    push_type_comment(&mut out, doc.description.as_deref(), &doc.label);
    out.push_str(&format!("export type {} = {{\n", doc.name));
    out.push_str(&format!("{INDENT}_id: string\n"));
    out.push_str(&format!("{INDENT}_typeName: '{}'\n", doc.name));
    out.push_str(&format!("{INDENT}_raw?: Record<string, any>\n"));
    for field in &doc.fields {
        push_field_lines(&mut out, field, 1);
    }
    for computed in &doc.computed_fields {
        push_computed_lines(&mut out, computed, 1);
    }
    out.push('}');
    out
}

fn object_declaration(obj: &ObjectDef) -> String {
    let mut out = String::new();
    push_type_comment(&mut out, obj.description.as_deref(), &obj.label);
    out.push_str(&format!("export type {} = {{\n", obj.name));
    out.push_str(&format!("{INDENT}_typeName: '{}'\n", obj.name));
    out.push_str(&format!("{INDENT}_raw?: Record<string, any>\n"));
    for field in &obj.fields {
        push_field_lines(&mut out, field, 1);
    }
    out.push('}');
    out
}

/// Module-level description comment: the description, falling back to the
/// display label. Omitted when the chosen text is empty.
fn push_type_comment(out: &mut String, description: Option<&str>, label: &str) {
    let text = description.unwrap_or(label);
    if !text.is_empty() {
        out.push_str(&format!("/** {text} */\n"));
    }
}

/// One declared field: optional description comment, then `name: type`,
/// with ` | undefined` appended when the field is not required.
fn push_field_lines(out: &mut String, field: &FieldDef, level: usize) {
    let pad = INDENT.repeat(level);
    if let Some(description) = &field.description {
        out.push_str(&format!("{pad}/** {description} */\n"));
    }
    let ty = render_field_type(field, level);
    if field.required {
        out.push_str(&format!("{pad}{}: {ty}\n", field.name));
    } else {
        out.push_str(&format!("{pad}{}: {ty} | undefined\n", field.name));
    }
}

/// One computed field. The type text is author-supplied and emitted
/// verbatim, never re-rendered.
fn push_computed_lines(out: &mut String, computed: &ComputedField, level: usize) {
    let pad = INDENT.repeat(level);
    if let Some(description) = &computed.description {
        out.push_str(&format!("{pad}/** {description} */\n"));
    }
    out.push_str(&format!("{pad}{}: {}\n", computed.name, computed.type_expr));
}

/// Render one field's type expression. Total: kinds the backend does not
/// implement degrade to a placeholder instead of failing, so an incomplete
/// schema feature never blocks generation.
fn render_field_type(field: &FieldDef, level: usize) -> String {
    match &field.kind {
        FieldKind::Boolean => "boolean".to_string(),
        FieldKind::String => "string".to_string(),
        FieldKind::Date => "string".to_string(),
        FieldKind::Image => "Image".to_string(),
        FieldKind::Markdown => "Markdown".to_string(),
        // References are stored as the referenced document's id.
        FieldKind::Reference { .. } => "string".to_string(),
        FieldKind::Object { object_type } => object_type.clone(),
        FieldKind::InlineObject { fields } => inline_object(fields, level),
        FieldKind::List { item } => format!("{}[]", render_list_item_type(item, level)),
        FieldKind::PolymorphicList { items } => {
            let members: Vec<String> = items
                .iter()
                .map(|item| render_list_item_type(item, level))
                .collect();
            format!("({})[]", members.join(" | "))
        }
        FieldKind::Enum { options } => literal_union(options),
        other => unknown_placeholder(other.kind_name()),
    }
}

/// Render one list member's type expression. Same totality rule as
/// [`render_field_type`].
fn render_list_item_type(item: &ListItemDef, level: usize) -> String {
    match item {
        ListItemDef::Boolean => "boolean".to_string(),
        ListItemDef::String => "string".to_string(),
        ListItemDef::Object { object_type } => object_type.clone(),
        ListItemDef::Reference { document_type } => document_type.clone(),
        ListItemDef::Enum { options } => format!("({})", literal_union(options)),
        ListItemDef::InlineObject { fields } => inline_object(fields, level),
        other => unknown_placeholder(other.kind_name()),
    }
}

/// Anonymous record literal. Nested fields go through the full field-line
/// rule, one indent level deeper; recursion depth is unbounded.
fn inline_object(fields: &[FieldDef], level: usize) -> String {
    let mut out = String::from("{\n");
    for field in fields {
        push_field_lines(&mut out, field, level + 1);
    }
    out.push_str(&INDENT.repeat(level));
    out.push('}');
    out
}

fn literal_union(options: &[String]) -> String {
    let literals: Vec<String> = options.iter().map(|o| format!("'{o}'")).collect();
    literals.join(" | ")
}

fn unknown_placeholder(kind: &str) -> String {
    format!("'unknown-{kind}'")
}
