use std::collections::HashSet;

use smol_str::SmolStr;

use crate::ast::Span;
use crate::diag::{Diag, DiagContext};
use crate::ir::{DirectiveKind, Field, Model, Schema};
use crate::semantic::diag::SemanticDiagKind;

use super::{ModelIndex, SchemaValidator};

const RELATION_KINDS: [DirectiveKind; 3] = [
    DirectiveKind::HasMany,
    DirectiveKind::BelongsTo,
    DirectiveKind::HasOne,
];

/// Pass 7: Relation resolution - A custom field naming another declared model
/// must carry exactly one relation directive matching its array-ness.
pub(super) fn run_relation_resolution(
    _validator: &SchemaValidator,
    schema: &Schema,
    index: &ModelIndex<'_>,
    diagnostics: &mut Vec<Diag>,
) {
    for model in &schema.models {
        for field in &model.fields {
            let target = field.relation_target();
            if !field.ty.is_relation_candidate()
                || target == model.name.as_str()
                || !index.contains(target)
            {
                continue;
            }

            let context = DiagContext::field(model.name.clone(), field.name.clone());
            let present: Vec<DirectiveKind> = RELATION_KINDS
                .into_iter()
                .filter(|kind| field.has_directive(*kind))
                .collect();

            let satisfied = if field.is_array {
                present.contains(&DirectiveKind::HasMany)
            } else {
                present.contains(&DirectiveKind::BelongsTo)
                    || present.contains(&DirectiveKind::HasOne)
            };

            if !satisfied {
                let (message, help) = if field.is_array {
                    (
                        "array relation field must have @hasMany directive",
                        format!("add @hasMany to relate many {target} records"),
                    )
                } else {
                    (
                        "relation field must have @belongsTo or @hasOne directive",
                        format!("add @belongsTo or @hasOne to relate one {target} record"),
                    )
                };
                diagnostics.push(
                    SemanticDiagKind::MissingRelationDirective
                        .diag(message)
                        .with_context(context.clone())
                        .with_primary_label(field.span.clone(), format!("refers to model {target}"))
                        .with_help(help),
                );
            }

            if present.len() > 1 {
                let names: Vec<String> = present.iter().map(|kind| format!("@{kind}")).collect();
                diagnostics.push(
                    SemanticDiagKind::ConflictingRelationDirectives
                        .diag(format!(
                            "relation field must carry exactly one relation directive, found {}",
                            names.join(" and ")
                        ))
                        .with_context(context)
                        .with_primary_label(field.span.clone(), "conflicting relation directives"),
                );
            }
        }
    }
}

/// Pass 8: Relational consistency - Checks relation targets and reciprocal
/// declarations across the whole schema.
pub(super) fn run_relational_consistency(
    validator: &SchemaValidator,
    schema: &Schema,
    index: &ModelIndex<'_>,
    diagnostics: &mut Vec<Diag>,
) {
    let mut checker = RelationChecker {
        validator,
        index,
        reported_cycles: HashSet::new(),
        diagnostics,
    };

    for model in &schema.models {
        for field in &model.fields {
            for kind in RELATION_KINDS {
                if let Some(directive) = field.directive(kind) {
                    let span = directive.span.clone();
                    checker.check(model, field, kind, span);
                }
            }
        }
    }
}

struct RelationChecker<'v, 'i, 'a, 'd> {
    validator: &'v SchemaValidator,
    index: &'i ModelIndex<'a>,
    /// Model pairs, name-sorted, already reported as circular.
    reported_cycles: HashSet<(SmolStr, SmolStr)>,
    diagnostics: &'d mut Vec<Diag>,
}

impl RelationChecker<'_, '_, '_, '_> {
    fn check(&mut self, model: &Model, field: &Field, kind: DirectiveKind, span: Span) {
        let context =
            DiagContext::field(model.name.clone(), field.name.clone()).with_directive(kind.name());

        let wants_array = kind == DirectiveKind::HasMany;
        if field.is_array != wants_array {
            let message = if wants_array {
                format!("field with @{kind} must be an array")
            } else {
                format!("field with @{kind} cannot be an array")
            };
            self.diagnostics.push(
                SemanticDiagKind::InvalidRelationShape
                    .diag(message)
                    .with_context(context)
                    .with_primary_label(span, "relation declared here"),
            );
            return;
        }

        let target_name = field.relation_target();
        let Some(target) = self.index.get(target_name) else {
            self.diagnostics.push(
                SemanticDiagKind::UnknownRelationTarget
                    .diag(format!("references non-existent model {target_name}"))
                    .with_context(context)
                    .with_primary_label(field.span.clone(), "no model with this name"),
            );
            return;
        };

        let reciprocal = match kind {
            DirectiveKind::HasMany => {
                has_back_reference(target, &model.name, DirectiveKind::BelongsTo, false, field)
                    || has_back_reference(target, &model.name, DirectiveKind::HasMany, true, field)
            }
            DirectiveKind::BelongsTo => {
                let mutual =
                    has_back_reference(target, &model.name, DirectiveKind::BelongsTo, false, field);
                if target.name != model.name && mutual {
                    self.report_cycle(model, target, context, span);
                    return;
                }
                has_back_reference(target, &model.name, DirectiveKind::HasMany, true, field)
                    || has_back_reference(target, &model.name, DirectiveKind::HasOne, false, field)
            }
            _ => has_back_reference(target, &model.name, DirectiveKind::BelongsTo, false, field),
        };

        if !reciprocal && self.validator.config.warn_on_unidirectional_relations {
            let expected = match kind {
                DirectiveKind::HasMany => "@belongsTo or @hasMany",
                DirectiveKind::BelongsTo => "@hasMany or @hasOne",
                _ => "@belongsTo",
            };
            let message = format!(
                "has @{kind} but no corresponding {expected} in model {} (unidirectional relation)",
                target.name
            );
            tracing::warn!(model = %model.name, field = %field.name, "{message}");
            self.diagnostics.push(
                SemanticDiagKind::UnidirectionalRelation
                    .diag(message)
                    .with_context(context)
                    .with_primary_label(span, "declared on one side only")
                    .with_help(format!("declare the inverse relation on model {}", target.name)),
            );
        }
    }

    fn report_cycle(&mut self, model: &Model, target: &Model, context: DiagContext, span: Span) {
        let pair = if model.name <= target.name {
            (model.name.clone(), target.name.clone())
        } else {
            (target.name.clone(), model.name.clone())
        };
        if !self.reported_cycles.insert(pair) {
            return;
        }
        self.diagnostics.push(
            SemanticDiagKind::CircularBelongsTo
                .diag(format!(
                    "circular belongsTo relation: models {} and {} both have @belongsTo \
                     pointing at each other",
                    model.name, target.name
                ))
                .with_context(context)
                .with_primary_label(span, "one side")
                .with_secondary_label(target.span.clone(), "other model")
                .with_help(
                    "keep @belongsTo on the owning side and use @hasOne or @hasMany on the other",
                ),
        );
    }
}

/// Whether `model` has a field other than `origin` carrying `kind`, with the
/// given array-ness, whose type names `target`.
fn has_back_reference(
    model: &Model,
    target: &str,
    kind: DirectiveKind,
    array: bool,
    origin: &Field,
) -> bool {
    model.fields.iter().any(|field| {
        !std::ptr::eq(field, origin)
            && field.is_array == array
            && field.has_directive(kind)
            && field.relation_target() == target
    })
}
