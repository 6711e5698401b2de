//! Schema validator coordinating the validation passes.

mod database_config;
mod directive_validation;
mod identity_validation;
mod relation_validation;
mod structure_validation;

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::diag::{Diag, DiagSeverity};
use crate::ir::{Model, Schema, ValidationOutcome};
use crate::semantic::rules;

/// Configuration for schema validation.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Emit warnings for relations declared on one side only.
    pub warn_on_unidirectional_relations: bool,

    /// Report every warning as an error.
    pub warnings_as_errors: bool,

    /// Names reserved in addition to the built-in keywords.
    pub extra_reserved_keywords: Vec<SmolStr>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            warn_on_unidirectional_relations: true,
            warnings_as_errors: false,
            extra_reserved_keywords: Vec::new(),
        }
    }
}

/// Model lookup built once per validation call.
///
/// When a name is declared twice the first declaration wins; the duplicate is
/// reported by the structural pass.
pub(super) struct ModelIndex<'a> {
    by_name: HashMap<&'a str, &'a Model>,
}

impl<'a> ModelIndex<'a> {
    fn build(schema: &'a Schema) -> Self {
        let mut by_name = HashMap::with_capacity(schema.models.len());
        for model in &schema.models {
            by_name.entry(model.name.as_str()).or_insert(model);
        }
        Self { by_name }
    }

    pub(super) fn get(&self, name: &str) -> Option<&'a Model> {
        self.by_name.get(name).copied()
    }

    pub(super) fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }
}

/// Main schema validator running every pass over a lowered schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    pub(super) config: ValidationConfig,
}

impl SchemaValidator {
    /// Creates a validator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Enables or disables unidirectional relation warnings.
    pub fn with_relation_warnings(mut self, enabled: bool) -> Self {
        self.config.warn_on_unidirectional_relations = enabled;
        self
    }

    /// Promotes warnings to errors.
    pub fn with_warnings_as_errors(mut self, enabled: bool) -> Self {
        self.config.warnings_as_errors = enabled;
        self
    }

    /// Reserves additional model and field names.
    pub fn with_reserved_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.config
            .extra_reserved_keywords
            .extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub(super) fn is_reserved(&self, name: &str) -> bool {
        rules::is_builtin_reserved(name)
            || self
                .config
                .extra_reserved_keywords
                .iter()
                .any(|keyword| keyword == name)
    }

    /// Validates a schema and returns every diagnostic found.
    ///
    /// # Passes
    ///
    /// 1. Database config
    /// 2. Model structure (names, duplicates, non-empty)
    /// 3. Field structure (names, duplicates)
    /// 4. Directive validity and arguments
    /// 5. Directive/type compatibility
    /// 6. `@id`/`@auto` combinations
    /// 7. Relation resolution
    /// 8. Relational consistency across models
    ///
    /// No pass is skipped because an earlier one failed. Diagnostics come out
    /// in pass order, then declaration order.
    pub fn validate(&self, schema: &Schema) -> Vec<Diag> {
        let mut diagnostics = Vec::new();
        let index = ModelIndex::build(schema);

        let passes: [(&str, PassFn); 8] = [
            ("database_config", database_config::run_database_config),
            ("model_structure", structure_validation::run_model_structure),
            ("field_structure", structure_validation::run_field_structure),
            ("directive_arguments", directive_validation::run_directive_arguments),
            ("directive_compatibility", directive_validation::run_directive_compatibility),
            ("identity", identity_validation::run_identity_validation),
            ("relation_resolution", relation_validation::run_relation_resolution),
            ("relational_consistency", relation_validation::run_relational_consistency),
        ];

        for (name, pass) in passes {
            let before = diagnostics.len();
            pass(self, schema, &index, &mut diagnostics);
            tracing::trace!(
                pass = name,
                diagnostics = diagnostics.len() - before,
                "validation pass finished"
            );
        }

        if self.config.warnings_as_errors {
            for diag in &mut diagnostics {
                diag.severity = DiagSeverity::Error;
            }
        }

        tracing::debug!(
            models = schema.models.len(),
            diagnostics = diagnostics.len(),
            errors = diagnostics.iter().filter(|d| d.is_error()).count(),
            "validated schema"
        );

        diagnostics
    }

    /// Validates `schema` and keeps it only if no error was found.
    pub fn validate_into_outcome(&self, schema: Schema) -> ValidationOutcome {
        let diagnostics = self.validate(&schema);
        ValidationOutcome::from_diagnostics(schema, diagnostics)
    }
}

type PassFn = fn(&SchemaValidator, &Schema, &ModelIndex<'_>, &mut Vec<Diag>);
