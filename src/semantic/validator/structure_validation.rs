use std::collections::HashMap;

use crate::ast::Span;
use crate::diag::{Diag, DiagContext};
use crate::ir::{Model, Schema};
use crate::semantic::diag::SemanticDiagKind;
use crate::semantic::rules;

use super::{ModelIndex, SchemaValidator};

const IDENTIFIER_HELP: &str =
    "names start with a letter and contain only letters, digits and underscores";

/// Pass 2: Model structure - Checks model names, emptiness and duplicates.
pub(super) fn run_model_structure(
    validator: &SchemaValidator,
    schema: &Schema,
    _index: &ModelIndex<'_>,
    diagnostics: &mut Vec<Diag>,
) {
    let mut first_seen: HashMap<&str, &Span> = HashMap::new();
    for model in &schema.models {
        match first_seen.get(model.name.as_str()) {
            Some(first) => diagnostics.push(
                SemanticDiagKind::DuplicateModel
                    .diag(format!("duplicate model name: {}", model.name))
                    .with_primary_label(model.span.clone(), "declared again here")
                    .with_secondary_label((*first).clone(), "first declared here"),
            ),
            None => {
                first_seen.insert(model.name.as_str(), &model.span);
            }
        }
    }

    for model in &schema.models {
        let context = DiagContext::model(model.name.clone());
        check_name(
            validator,
            "model",
            &model.name,
            &model.span,
            SemanticDiagKind::InvalidModelName,
            &context,
            diagnostics,
        );

        if model.fields.is_empty() {
            diagnostics.push(
                SemanticDiagKind::EmptyModel
                    .diag("model must have at least one field")
                    .with_context(context)
                    .with_primary_label(model.span.clone(), "model declared here"),
            );
        }
    }
}

/// Pass 3: Field structure - Checks field names and duplicates per model.
pub(super) fn run_field_structure(
    validator: &SchemaValidator,
    schema: &Schema,
    _index: &ModelIndex<'_>,
    diagnostics: &mut Vec<Diag>,
) {
    for model in &schema.models {
        validate_model_fields(validator, model, diagnostics);
    }
}

fn validate_model_fields(validator: &SchemaValidator, model: &Model, diagnostics: &mut Vec<Diag>) {
    let mut first_seen: HashMap<&str, &Span> = HashMap::new();

    for field in &model.fields {
        let context = DiagContext::field(model.name.clone(), field.name.clone());
        check_name(
            validator,
            "field",
            &field.name,
            &field.span,
            SemanticDiagKind::InvalidFieldName,
            &context,
            diagnostics,
        );

        match first_seen.get(field.name.as_str()) {
            Some(first) => diagnostics.push(
                SemanticDiagKind::DuplicateField
                    .diag(format!("duplicate field name: {}", field.name))
                    .with_context(DiagContext::model(model.name.clone()))
                    .with_primary_label(field.span.clone(), "declared again here")
                    .with_secondary_label((*first).clone(), "first declared here"),
            ),
            None => {
                first_seen.insert(field.name.as_str(), &field.span);
            }
        }
    }
}

/// Shared name checks for models and fields.
fn check_name(
    validator: &SchemaValidator,
    what: &str,
    name: &str,
    span: &Span,
    kind: SemanticDiagKind,
    context: &DiagContext,
    diagnostics: &mut Vec<Diag>,
) {
    if name.is_empty() {
        diagnostics.push(
            kind.diag(format!("{what} name cannot be empty"))
                .with_context(context.clone())
                .with_primary_label(span.clone(), "name missing"),
        );
        return;
    }

    if !rules::is_valid_identifier(name) {
        diagnostics.push(
            kind.diag(format!("invalid {what} name: {name}"))
                .with_context(context.clone())
                .with_primary_label(span.clone(), "not a valid identifier")
                .with_help(IDENTIFIER_HELP),
        );
    }

    if validator.is_reserved(name) {
        diagnostics.push(
            kind.diag(format!("{what} name '{name}' is reserved"))
                .with_context(context.clone())
                .with_primary_label(span.clone(), "reserved keyword"),
        );
    }
}
