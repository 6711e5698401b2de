//! AST → IR lowering.
//!
//! Lowering is a single infallible pass. Unknown type tokens become
//! [`FieldKind::Custom`]; unknown directive names are carried over as
//! [`UnknownDirective`] for the validator to reject.

use super::{Directive, DirectiveKind, Field, FieldKind, FieldType, Model, Schema, UnknownDirective};
use crate::ast::{DirectiveArg, DirectiveDecl, FieldDecl, ModelDecl, SchemaFile, TypeRef};
use smol_str::SmolStr;

/// Lowers a parsed schema file into the IR.
pub fn lower(file: SchemaFile) -> Schema {
    let models: Vec<Model> = file.models.into_iter().map(lower_model).collect();

    tracing::debug!(
        models = models.len(),
        fields = models.iter().map(|m| m.fields.len()).sum::<usize>(),
        "lowered schema to IR"
    );

    Schema {
        database_driver: file.database_driver,
        database_url: file.database_url,
        models,
    }
}

fn lower_model(model: ModelDecl) -> Model {
    Model {
        name: model.name,
        fields: model.fields.into_iter().map(lower_field).collect(),
        span: model.name_span,
    }
}

fn lower_field(field: FieldDecl) -> Field {
    let is_array = field.ty.is_array;
    let mut ty = resolve_type(field.ty);

    for decl in field.directives {
        match DirectiveKind::from_name(&decl.name) {
            Some(kind) => ty.directives.push(Directive {
                kind,
                args: normalize_args(&decl),
                span: decl.span,
            }),
            None => ty.unknown_directives.push(UnknownDirective {
                args: normalize_args(&decl),
                name: decl.name,
                span: decl.span,
            }),
        }
    }

    Field {
        name: field.name,
        ty,
        is_array,
        span: field.span,
    }
}

fn resolve_type(ty: TypeRef) -> FieldType {
    match FieldKind::from_type_name(&ty.name) {
        Some(kind) => FieldType::new(kind),
        None => FieldType::custom(ty.name),
    }
}

fn normalize_args(decl: &DirectiveDecl) -> Vec<SmolStr> {
    decl.args
        .iter()
        .map(|arg| normalize_arg(&arg.node))
        .collect()
}

/// Renders an argument as its canonical string.
///
/// Floats use the shortest representation that parses back to the same value
/// and always keep a fraction or exponent, so `2.0` never reads as an integer.
pub fn normalize_arg(arg: &DirectiveArg) -> SmolStr {
    match arg {
        DirectiveArg::String(value) | DirectiveArg::Ident(value) => value.clone(),
        DirectiveArg::Integer(value) => SmolStr::new(value.to_string()),
        DirectiveArg::Float(value) => SmolStr::new(format!("{value:?}")),
    }
}
