//! Rule-by-rule validator tests driven from schema source.

mod common;

use common::*;
use storm_schema::{SchemaValidator, compile_with, validate};

#[test]
fn database_header_rules() {
    let outcome = compile_source(
        "database driver = \"oracle\"\ndatabase url = \"localhost\"\nmodel A { id Int @id }",
    );
    assert_eq!(
        error_messages(&outcome),
        vec![
            "unsupported database driver: oracle",
            "invalid database URL format: localhost",
        ]
    );

    let quoted = compile_source(
        "database driver = \"'sqlite3'\"\ndatabase url = \"sqlite://x\"\nmodel A { id Int @id }",
    );
    assert_no_validation_errors(&quoted);
}

#[test]
fn model_rules() {
    let outcome = compile_source(&with_header(
        "model A { id Int @id }\nmodel A { id Int @id }\nmodel select { id Int @id }\nmodel Empty { }",
    ));
    assert_has_error_containing(&outcome, "duplicate model name: A");
    assert_has_error_containing(&outcome, "model name 'select' is reserved");
    assert_has_error_containing(&outcome, "model Empty: model must have at least one field");
}

#[test]
fn field_rules() {
    let outcome = compile_source(&with_header(
        "model User { id Int @id  email String  email String  type String }",
    ));
    assert_eq!(
        error_messages(&outcome),
        vec!["duplicate field name: email", "field name 'type' is reserved"]
    );
}

#[test]
fn directive_argument_rules() {
    let outcome = compile_source(&with_header(
        r#"
model Product {
  id Int @id @auto(1)
  sku String @length
  price Decimal @precision(10)
  weight Float @min("heavy")
  status String @enum
  label String @default
  alias String @map(a, b)
  owner Int @relation(a, b, c)
}
"#,
    ));
    assert_eq!(
        error_messages(&outcome),
        vec![
            "@auto directive does not accept arguments",
            "@length directive requires exactly one integer argument",
            "@precision directive requires exactly two integer arguments",
            "@min directive argument must be a number",
            "@enum directive requires at least one argument",
            "@default directive requires exactly one argument",
            "@map directive requires exactly one argument",
            "@relation directive accepts at most two arguments",
        ]
    );
}

#[test]
fn valid_arguments_pass() {
    compile_cleanly(&with_header(
        r#"
model Product {
  id Int @id @auto
  sku String @length(32) @unique @index
  price Decimal @precision(10, 2) @min(0) @max(99999.99)
  status String @enum(draft, published, archived) @default(draft)
  legacyName String @map("legacy_name") @nullable
  createdAt DateTime @createdAt @defaultNow
  updatedAt Timestamp @updatedAt
  stock BigInt @min(-5)
}
"#,
    ));
}

#[test]
fn compatibility_rules() {
    let outcome = compile_source(&with_header(
        r#"
model Event {
  id Int @id
  flag Boolean @length(10)
  title String @precision(5, 2)
  note Text @max(3)
  day Date @updatedAt
  count Int @defaultNow
}
"#,
    ));
    assert_eq!(outcome.errors().count(), 5, "{}", format_diagnostics(&outcome.diagnostics));
    assert_has_error_containing(
        &outcome,
        "@length directive can only be used with String, Char or Text fields, found Boolean",
    );
    assert_has_error_containing(
        &outcome,
        "@precision directive can only be used with Decimal or Float fields, found String",
    );
    assert_has_error_containing(
        &outcome,
        "@max directive can only be used with Int, Float, Decimal or BigInt fields, found Text",
    );
    assert_has_error_containing(
        &outcome,
        "@updatedAt directive can only be used with DateTime or Timestamp fields, found Date",
    );
    assert_has_error_containing(
        &outcome,
        "@defaultNow directive can only be used with DateTime, Date, Time or Timestamp fields, found Int",
    );
}

#[test]
fn identity_rules() {
    let outcome = compile_source(&with_header(
        "model A { id Int @id  other Int @id  seq Int @auto }",
    ));
    assert_eq!(
        error_messages(&outcome),
        vec![
            "model must have at most one @id field, found 2",
            "@auto can only be used with @id fields",
        ]
    );
}

#[test]
fn relation_fields_need_a_directive() {
    let outcome = compile_source(&with_header(
        "model User { id Int @id  posts Post[] }\nmodel Post { id Int @id  author User }",
    ));
    assert_eq!(
        error_messages(&outcome),
        vec![
            "array relation field must have @hasMany directive",
            "relation field must have @belongsTo or @hasOne directive",
        ]
    );
}

#[test]
fn has_one_without_back_reference_warns() {
    let outcome = compile_source(&with_header(
        "model User { id Int @id  profile Profile @hasOne }\nmodel Profile { id Int @id }",
    ));
    assert_no_validation_errors(&outcome);
    assert_has_warning_containing(
        &outcome,
        "has @hasOne but no corresponding @belongsTo in model Profile",
    );
}

#[test]
fn belongs_to_without_back_reference_warns() {
    let outcome = compile_source(&with_header(
        "model Post { id Int @id  author User @belongsTo }\nmodel User { id Int @id }",
    ));
    assert_no_validation_errors(&outcome);
    assert_has_warning_containing(
        &outcome,
        "has @belongsTo but no corresponding @hasMany or @hasOne in model User",
    );
}

#[test]
fn relation_to_missing_model() {
    let outcome = compile_source(&with_header("model User { id Int @id  team Team @belongsTo }"));
    assert_eq!(error_messages(&outcome), vec!["references non-existent model Team"]);
}

#[test]
fn relation_warnings_can_be_switched_off() {
    let source =
        with_header("model User { id Int @id  team Team[] @hasMany }\nmodel Team { id Int @id }");
    let quiet = SchemaValidator::new().with_relation_warnings(false);
    let outcome = compile_with(&source, &quiet).unwrap();
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn extra_reserved_keywords_apply_to_fields() {
    let source = with_header("model User { id Int @id  order Int }");
    let validator = SchemaValidator::new().with_reserved_keywords(["order"]);
    let outcome = compile_with(&source, &validator).unwrap();
    assert_eq!(error_messages(&outcome), vec!["field name 'order' is reserved"]);

    assert!(validate(&lower_cleanly(&source)).is_empty());
}

#[test]
fn diagnostics_are_ordered_by_pass_then_declaration() {
    let outcome = compile_source(
        "database driver = \"\"\ndatabase url = \"x://y\"\nmodel B { id Int @id  x Boolean @length(1) }\nmodel A { id Int @id  y Int @unique(1) }",
    );
    let codes: Vec<&str> = outcome.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec!["S001", "S031", "S040"]);
    assert_eq!(outcome.diagnostics[1].context.model.as_deref(), Some("A"));
}

#[test]
fn oversized_length_is_rejected() {
    let outcome = compile_source(&with_header(
        "model Note { id Int @id  body String @length(99999999999) }",
    ));
    assert_eq!(
        error_messages(&outcome),
        vec!["@length directive argument must be at most 4294967295"]
    );
    assert!(outcome.ir.is_none());
}

#[test]
fn has_one_on_array_is_a_shape_error() {
    let outcome = compile_source(&with_header(
        "model User { id Int @id  profiles Profile[] @hasOne }\nmodel Profile { id Int @id }",
    ));
    assert_has_error_containing(
        &outcome,
        "model User, field profiles, @hasOne: field with @hasOne cannot be an array",
    );
}

#[test]
fn belongs_to_on_array_is_a_shape_error() {
    let outcome = compile_source(&with_header(
        "model Post { id Int @id  authors User[] @belongsTo }\nmodel User { id Int @id }",
    ));
    assert_has_error_containing(
        &outcome,
        "@belongsTo directive cannot be used with array fields",
    );
    assert_has_error_containing(
        &outcome,
        "model Post, field authors, @belongsTo: field with @belongsTo cannot be an array",
    );
}

#[test]
fn has_one_to_missing_model() {
    let outcome = compile_source(&with_header("model User { id Int @id  badge Badge @hasOne }"));
    assert_eq!(error_messages(&outcome), vec!["references non-existent model Badge"]);
    assert_eq!(outcome.diagnostics[0].context.directive.as_deref(), Some("hasOne"));
}

#[test]
fn belongs_to_missing_model_reports_each_field() {
    let outcome = compile_source(&with_header(
        "model Post { id Int @id  author Writer @belongsTo  editor Editor @belongsTo }",
    ));
    assert_eq!(
        error_messages(&outcome),
        vec![
            "references non-existent model Writer",
            "references non-existent model Editor",
        ]
    );
}

#[test]
fn self_referencing_belongs_to_is_not_circular() {
    let outcome = compile_source(&with_header("model Node { id Int @id  parent Node @belongsTo }"));
    assert_no_validation_errors(&outcome);
    assert_eq!(outcome.warnings().count(), 1);
    assert_has_warning_containing(
        &outcome,
        "has @belongsTo but no corresponding @hasMany or @hasOne in model Node",
    );
}
