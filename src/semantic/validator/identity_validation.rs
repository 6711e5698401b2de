use crate::diag::{Diag, DiagContext};
use crate::ir::{DirectiveKind, Schema};
use crate::semantic::diag::SemanticDiagKind;

use super::{ModelIndex, SchemaValidator};

/// Pass 6: Identity - Checks `@id` and `@auto` combinations.
///
/// The `@id` type itself is covered by the compatibility pass.
pub(super) fn run_identity_validation(
    _validator: &SchemaValidator,
    schema: &Schema,
    _index: &ModelIndex<'_>,
    diagnostics: &mut Vec<Diag>,
) {
    let kind = SemanticDiagKind::InvalidIdentity;

    for model in &schema.models {
        let id_fields: Vec<_> = model
            .fields
            .iter()
            .filter(|field| field.has_directive(DirectiveKind::Id))
            .collect();

        if id_fields.len() > 1 {
            let mut diag = kind
                .diag(format!(
                    "model must have at most one @id field, found {}",
                    id_fields.len()
                ))
                .with_context(DiagContext::model(model.name.clone()))
                .with_primary_label(model.span.clone(), "model declared here");
            for field in &id_fields {
                diag = diag.with_secondary_label(field.span.clone(), "@id field");
            }
            diagnostics.push(diag);
        }

        for field in &model.fields {
            let context = DiagContext::field(model.name.clone(), field.name.clone());

            if let Some(id) = field.directive(DirectiveKind::Id) {
                let mut conflicts = Vec::new();
                if field.is_array {
                    conflicts.push("@id field cannot be an array");
                }
                if field.has_directive(DirectiveKind::HasMany) {
                    conflicts.push("@id field cannot be combined with @hasMany");
                }
                if field.has_directive(DirectiveKind::BelongsTo) {
                    conflicts.push("@id field cannot be combined with @belongsTo");
                }
                for message in conflicts {
                    diagnostics.push(
                        kind.diag(message)
                            .with_context(context.clone().with_directive(DirectiveKind::Id.name()))
                            .with_primary_label(id.span.clone(), "identity declared here"),
                    );
                }
            } else if let Some(auto) = field.directive(DirectiveKind::Auto) {
                diagnostics.push(
                    kind.diag("@auto can only be used with @id fields")
                        .with_context(context.with_directive(DirectiveKind::Auto.name()))
                        .with_primary_label(auto.span.clone(), "requires @id")
                        .with_help("add @id to this field or remove @auto"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ir::{Directive, DirectiveKind, Field, FieldKind, FieldType, Model, Schema};
    use crate::semantic::validator::SchemaValidator;

    fn field(name: &str, kind: FieldKind, directives: &[DirectiveKind]) -> Field {
        let ty = directives
            .iter()
            .fold(FieldType::new(kind), |ty, kind| ty.with_directive(Directive::bare(*kind)));
        Field::new(name, ty)
    }

    fn identity_messages(fields: Vec<Field>) -> Vec<String> {
        let schema = Schema::new("mysql", "mysql://h/db", vec![Model::new("M", fields)]);
        SchemaValidator::new()
            .validate(&schema)
            .into_iter()
            .filter(|d| d.code == "S050")
            .map(|d| d.message)
            .collect()
    }

    #[test]
    fn two_id_fields() {
        let messages = identity_messages(vec![
            field("a", FieldKind::Int, &[DirectiveKind::Id]),
            field("b", FieldKind::Int, &[DirectiveKind::Id]),
        ]);
        assert_eq!(messages, vec!["model must have at most one @id field, found 2"]);
    }

    #[test]
    fn auto_without_id() {
        let messages = identity_messages(vec![
            field("id", FieldKind::Int, &[DirectiveKind::Id, DirectiveKind::Auto]),
            field("seq", FieldKind::Int, &[DirectiveKind::Auto]),
        ]);
        assert_eq!(messages, vec!["@auto can only be used with @id fields"]);
    }

    #[test]
    fn id_conflicts_accumulate() {
        let messages = identity_messages(vec![
            field(
                "id",
                FieldKind::Int,
                &[DirectiveKind::Id, DirectiveKind::HasMany, DirectiveKind::BelongsTo],
            )
            .array(),
        ]);
        assert_eq!(
            messages,
            vec![
                "@id field cannot be an array",
                "@id field cannot be combined with @hasMany",
                "@id field cannot be combined with @belongsTo",
            ]
        );
    }
}
