use crate::diag::{Diag, DiagContext};
use crate::ir::{Directive, DirectiveKind, Field, FieldKind, Model, Schema};
use crate::semantic::diag::SemanticDiagKind;
use crate::semantic::rules::{self, ArgumentForm, Arity, TypeRequirement};

use super::{ModelIndex, SchemaValidator};

/// Pass 4: Directive validity - Rejects unknown directives and checks
/// argument counts and forms.
pub(super) fn run_directive_arguments(
    _validator: &SchemaValidator,
    schema: &Schema,
    _index: &ModelIndex<'_>,
    diagnostics: &mut Vec<Diag>,
) {
    for model in &schema.models {
        for field in &model.fields {
            for unknown in &field.ty.unknown_directives {
                diagnostics.push(
                    SemanticDiagKind::UnknownDirective
                        .diag(format!("unknown directive: @{}", unknown.name))
                        .with_context(context(model, field, &unknown.name))
                        .with_primary_label(unknown.span.clone(), "not a recognized directive"),
                );
            }

            for directive in &field.ty.directives {
                if let Some(message) = argument_error(directive) {
                    diagnostics.push(
                        SemanticDiagKind::InvalidDirectiveArguments
                            .diag(message)
                            .with_context(context(model, field, directive.kind.name()))
                            .with_primary_label(directive.span.clone(), "invalid arguments"),
                    );
                }
            }
        }
    }
}

/// Pass 5: Directive compatibility - Checks each directive against the
/// field's kind and array-ness.
pub(super) fn run_directive_compatibility(
    _validator: &SchemaValidator,
    schema: &Schema,
    _index: &ModelIndex<'_>,
    diagnostics: &mut Vec<Diag>,
) {
    for model in &schema.models {
        for field in &model.fields {
            for directive in &field.ty.directives {
                if let Some(message) = compatibility_error(field, directive.kind) {
                    diagnostics.push(
                        SemanticDiagKind::IncompatibleDirective
                            .diag(message)
                            .with_context(context(model, field, directive.kind.name()))
                            .with_primary_label(directive.span.clone(), "incompatible directive")
                            .with_secondary_label(field.span.clone(), "field declared here"),
                    );
                }
            }
        }
    }
}

fn context(model: &Model, field: &Field, directive: &str) -> DiagContext {
    DiagContext::field(model.name.clone(), field.name.clone()).with_directive(directive)
}

/// Returns the first problem with a directive's arguments, if any.
fn argument_error(directive: &Directive) -> Option<String> {
    let kind = directive.kind;
    let rule = rules::argument_rule(kind);
    let args = &directive.args;

    if !rule.arity.accepts(args.len()) {
        return Some(arity_message(kind, rule.arity, rule.form));
    }

    match rule.form {
        ArgumentForm::Any => None,
        ArgumentForm::Numeric => {
            let all_numeric = args
                .iter()
                .all(|arg| arg.parse::<f64>().is_ok_and(f64::is_finite));
            if all_numeric {
                None
            } else {
                Some(format!("@{kind} directive argument must be a number"))
            }
        }
        ArgumentForm::Integer => {
            let parsed: Option<Vec<i64>> = args.iter().map(|arg| arg.parse().ok()).collect();
            match parsed {
                None if args.len() == 1 => {
                    Some(format!("@{kind} directive argument must be an integer"))
                }
                None => Some(format!("@{kind} directive arguments must be integers")),
                Some(values) => integer_range_error(kind, &values),
            }
        }
    }
}

/// Largest `@length` or `@precision` value a column type can carry.
const MAX_COLUMN_SIZE: i64 = u32::MAX as i64;

fn integer_range_error(kind: DirectiveKind, values: &[i64]) -> Option<String> {
    match (kind, values) {
        (DirectiveKind::Length, [length]) if *length <= 0 => {
            Some("@length directive argument must be positive".to_string())
        }
        (DirectiveKind::Length, [length]) if *length > MAX_COLUMN_SIZE => Some(format!(
            "@length directive argument must be at most {MAX_COLUMN_SIZE}"
        )),
        (DirectiveKind::Precision, [precision, _]) if *precision <= 0 => {
            Some("@precision first argument (precision) must be positive".to_string())
        }
        (DirectiveKind::Precision, [precision, _]) if *precision > MAX_COLUMN_SIZE => {
            Some(format!(
                "@precision first argument (precision) must be at most {MAX_COLUMN_SIZE}"
            ))
        }
        (DirectiveKind::Precision, [precision, scale]) if *scale < 0 || scale > precision => {
            Some("@precision second argument (scale) must be between 0 and precision".to_string())
        }
        _ => None,
    }
}

fn arity_message(kind: DirectiveKind, arity: Arity, form: ArgumentForm) -> String {
    let noun = match form {
        ArgumentForm::Any => "",
        ArgumentForm::Integer => "integer ",
        ArgumentForm::Numeric => "numeric ",
    };
    match arity {
        Arity::None => format!("@{kind} directive does not accept arguments"),
        Arity::Exactly(n) => format!(
            "@{kind} directive requires exactly {} {noun}{}",
            count_word(n),
            plural(n)
        ),
        Arity::AtLeast(n) => format!(
            "@{kind} directive requires at least {} {}",
            count_word(n),
            plural(n)
        ),
        Arity::AtMost(n) => format!(
            "@{kind} directive accepts at most {} {}",
            count_word(n),
            plural(n)
        ),
    }
}

fn count_word(n: usize) -> String {
    match n {
        1 => "one".to_string(),
        2 => "two".to_string(),
        _ => n.to_string(),
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "argument" } else { "arguments" }
}

fn compatibility_error(field: &Field, kind: DirectiveKind) -> Option<String> {
    match rules::type_requirement(kind) {
        TypeRequirement::Any => None,
        TypeRequirement::Array if !field.is_array => {
            Some(format!("@{kind} directive can only be used with array fields"))
        }
        TypeRequirement::NotArray if field.is_array => {
            Some(format!("@{kind} directive cannot be used with array fields"))
        }
        TypeRequirement::Array | TypeRequirement::NotArray => None,
        TypeRequirement::Kinds(allowed) if !allowed.contains(&field.ty.kind) => Some(format!(
            "@{kind} directive can only be used with {} fields, found {}",
            kind_list(allowed),
            field.ty.type_name()
        )),
        TypeRequirement::Kinds(_) => None,
    }
}

fn kind_list(kinds: &[FieldKind]) -> String {
    match kinds {
        [] => String::new(),
        [only] => only.to_string(),
        [rest @ .., last] => {
            let head: Vec<&str> = rest.iter().map(|kind| kind.name()).collect();
            format!("{} or {last}", head.join(", "))
        }
    }
}
