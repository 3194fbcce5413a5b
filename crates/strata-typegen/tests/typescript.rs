//! Integration tests for the TypeScript backend.

use strata_typegen::generate_typescript_types;
use strata_typegen::ir::{
    ComputedField, DocumentDef, FieldDef, FieldKind, ListItemDef, ObjectDef, SchemaDef,
};

fn post_schema() -> SchemaDef {
    let mut schema = SchemaDef::new();
    schema.add_document(
        DocumentDef::new("Post", "Post")
            .with_description("A post")
            .with_fields(vec![FieldDef::required("title", FieldKind::String)]),
    );
    schema
}

#[test]
fn post_document_declaration_block() {
    let output = generate_typescript_types(&post_schema());

    let expected = "/** A post */\n\
export type Post = {\n\
\x20 _id: string\n\
\x20 _typeName: 'Post'\n\
\x20 _raw?: Record<string, any>\n\
\x20 title: string\n\
}";
    assert!(output.contains(expected), "missing block in:\n{output}");
    assert!(output.contains("export type ObjectTypes = never"));
}

#[test]
fn full_module_shape() {
    let output = generate_typescript_types(&post_schema());

    insta::assert_snapshot!(output, @r"
// This file is auto-generated by strata. Do not edit it manually.

export type Image = string
export type Markdown = string

export type DocumentTypes = Post

export type DocumentTypeNames = DocumentTypes['_typeName']

export type AllTypes = DocumentTypes | ObjectTypes

export type AllTypeNames = DocumentTypeNames | ObjectTypeNames

export type DocumentTypeMap = {
  Post: Post
}

/** A post */
export type Post = {
  _id: string
  _typeName: 'Post'
  _raw?: Record<string, any>
  title: string
}

export type ObjectTypes = never

export type ObjectTypeNames = ObjectTypes['_typeName']
");
}

#[test]
fn declarations_are_sorted_by_name() {
    let mut schema = SchemaDef::new();
    // Insertion order deliberately unsorted
    schema.add_document(DocumentDef::new("Zebra", "Zebra"));
    schema.add_document(DocumentDef::new("Alpha", "Alpha"));
    schema.add_document(DocumentDef::new("Mango", "Mango"));
    schema.add_object(ObjectDef::new("Seo", "Seo"));
    schema.add_object(ObjectDef::new("Cta", "Cta"));

    let output = generate_typescript_types(&schema);

    assert!(output.contains("export type DocumentTypes = Alpha | Mango | Zebra"));
    assert!(output.contains("export type ObjectTypes = Cta | Seo"));

    let alpha = output.find("export type Alpha = {").unwrap();
    let mango = output.find("export type Mango = {").unwrap();
    let zebra = output.find("export type Zebra = {").unwrap();
    assert!(alpha < mango && mango < zebra);

    let cta = output.find("export type Cta = {").unwrap();
    let seo = output.find("export type Seo = {").unwrap();
    assert!(cta < seo);
}

#[test]
fn optional_fields_get_undefined_suffix() {
    let mut schema = SchemaDef::new();
    schema.add_document(DocumentDef::new("Page", "Page").with_fields(vec![
        FieldDef::required("title", FieldKind::String),
        FieldDef::optional("draft", FieldKind::Boolean),
    ]));

    let output = generate_typescript_types(&schema);
    assert!(output.contains("  title: string\n"));
    assert!(output.contains("  draft: boolean | undefined\n"));
}

#[test]
fn computed_field_type_text_is_verbatim() {
    let mut schema = SchemaDef::new();
    schema.add_document(
        DocumentDef::new("Post", "Post").with_computed_fields(vec![
            ComputedField::new("url", "`/posts/${string}`").with_description("Canonical URL"),
        ]),
    );

    let output = generate_typescript_types(&schema);
    assert!(output.contains("  /** Canonical URL */\n  url: `/posts/${string}`\n"));
}

#[test]
fn object_declarations_have_no_id_member() {
    let mut schema = SchemaDef::new();
    schema.add_object(
        ObjectDef::new("Seo", "SEO")
            .with_fields(vec![FieldDef::optional("canonical", FieldKind::Url)]),
    );

    let output = generate_typescript_types(&schema);
    let expected = "/** SEO */\n\
export type Seo = {\n\
\x20 _typeName: 'Seo'\n\
\x20 _raw?: Record<string, any>\n\
\x20 canonical: 'unknown-url' | undefined\n\
}";
    assert!(output.contains(expected), "missing block in:\n{output}");
}

#[test]
fn empty_schema_uses_bottom_markers() {
    let output = generate_typescript_types(&SchemaDef::new());

    assert!(output.contains("export type DocumentTypes = never"));
    assert!(output.contains("export type DocumentTypeMap = {}"));
    assert!(output.contains("export type ObjectTypes = never"));
    assert!(output.ends_with('\n'));
}

#[test]
fn dangling_references_are_reproduced_verbatim() {
    // Referential integrity is the upstream provider's contract; a dangling
    // name flows through unchanged and is left to the TypeScript compiler.
    let mut schema = SchemaDef::new();
    schema.add_document(DocumentDef::new("Post", "Post").with_fields(vec![
        FieldDef::required(
            "hero",
            FieldKind::Object {
                object_type: "Ghost".into(),
            },
        ),
    ]));

    let output = generate_typescript_types(&schema);
    assert!(output.contains("  hero: Ghost\n"));
}

#[test]
fn generation_is_idempotent() {
    let mut schema = SchemaDef::new();
    schema.add_document(DocumentDef::new("Post", "Post").with_fields(vec![
        FieldDef::optional(
            "sections",
            FieldKind::PolymorphicList {
                items: vec![
                    ListItemDef::String,
                    ListItemDef::Enum {
                        options: vec!["a".into(), "b".into()],
                    },
                ],
            },
        ),
    ]));
    schema.add_object(ObjectDef::new("Seo", "SEO"));

    let first = generate_typescript_types(&schema);
    let second = generate_typescript_types(&schema);
    assert_eq!(first, second);
    assert!(output_contains_polymorphic(&first));
}

fn output_contains_polymorphic(output: &str) -> bool {
    output.contains("  sections: (string | ('a' | 'b'))[] | undefined\n")
}
