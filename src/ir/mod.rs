//! Intermediate representation of a schema.
//!
//! The IR is what lowering produces and what validation and dialect mapping
//! consume. Type and directive names are resolved into closed enums; relation
//! targets stay as model-name strings and are only checked against the full
//! model set during validation, so models may reference each other in any
//! order.

pub mod kinds;
pub mod lower;

pub use kinds::{DirectiveKind, FieldKind};
pub use lower::lower;

use crate::ast::Span;
use crate::diag::{Diag, DiagSeverity, SourceFile, convert_diagnostics_to_reports};
use miette::Report;
use smol_str::SmolStr;

/// A lowered schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub database_driver: SmolStr,
    pub database_url: SmolStr,
    pub models: Vec<Model>,
}

impl Schema {
    pub fn new(
        database_driver: impl Into<SmolStr>,
        database_url: impl Into<SmolStr>,
        models: Vec<Model>,
    ) -> Self {
        Self {
            database_driver: database_driver.into(),
            database_url: database_url.into(),
            models,
        }
    }

    /// Finds the first model with the given name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub name: SmolStr,
    pub fields: Vec<Field>,
    /// Span of the model name; `0..0` for hand-built IR.
    pub span: Span,
}

impl Model {
    pub fn new(name: impl Into<SmolStr>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
            span: 0..0,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The first field carrying `@id`.
    pub fn id_field(&self) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.has_directive(DirectiveKind::Id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: SmolStr,
    pub ty: FieldType,
    pub is_array: bool,
    pub span: Span,
}

impl Field {
    pub fn new(name: impl Into<SmolStr>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            is_array: false,
            span: 0..0,
        }
    }

    /// Marks the field as an array of its type.
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    pub fn has_directive(&self, kind: DirectiveKind) -> bool {
        self.ty.has_directive(kind)
    }

    pub fn directive(&self, kind: DirectiveKind) -> Option<&Directive> {
        self.ty.directive(kind)
    }

    /// Name this field would point at if it were a relation.
    pub fn relation_target(&self) -> &str {
        self.ty.type_name()
    }
}

/// A resolved field type together with its directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    pub kind: FieldKind,
    /// The original type token; set only when `kind` is [`FieldKind::Custom`].
    pub model_name: Option<SmolStr>,
    /// Recognized directives in declaration order.
    pub directives: Vec<Directive>,
    /// Directives whose names matched no [`DirectiveKind`]. Kept so the
    /// validator can reject them.
    pub unknown_directives: Vec<UnknownDirective>,
}

impl FieldType {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            model_name: None,
            directives: Vec::new(),
            unknown_directives: Vec::new(),
        }
    }

    /// A custom type referring to `model_name`.
    pub fn custom(model_name: impl Into<SmolStr>) -> Self {
        Self {
            model_name: Some(model_name.into()),
            ..Self::new(FieldKind::Custom)
        }
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn has_directive(&self, kind: DirectiveKind) -> bool {
        self.directives.iter().any(|directive| directive.kind == kind)
    }

    pub fn directive(&self, kind: DirectiveKind) -> Option<&Directive> {
        self.directives.iter().find(|directive| directive.kind == kind)
    }

    /// The referenced model name for custom types, the kind name otherwise.
    pub fn type_name(&self) -> &str {
        match (&self.model_name, self.kind) {
            (Some(name), FieldKind::Custom) => name.as_str(),
            _ => self.kind.name(),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.kind == FieldKind::Custom
    }

    /// Custom types are the only ones that can point at a model.
    pub fn is_relation_candidate(&self) -> bool {
        self.is_custom() && self.model_name.is_some()
    }
}

/// A recognized directive with string-normalized arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub args: Vec<SmolStr>,
    pub span: Span,
}

impl Directive {
    pub fn new<I, S>(kind: DirectiveKind, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            kind,
            args: args.into_iter().map(Into::into).collect(),
            span: 0..0,
        }
    }

    /// A directive with no arguments.
    pub fn bare(kind: DirectiveKind) -> Self {
        Self::new(kind, std::iter::empty::<SmolStr>())
    }
}

/// A directive whose name is not one of the recognized kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirective {
    /// The name as written, without `@`.
    pub name: SmolStr,
    pub args: Vec<SmolStr>,
    pub span: Span,
}

/// Result of compiling a schema, always carrying diagnostics.
///
/// Warnings never prevent the IR from being handed on.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// The IR, present exactly when no diagnostic is an error.
    pub ir: Option<Schema>,
    /// All diagnostics in the order they were produced.
    pub diagnostics: Vec<Diag>,
}

impl ValidationOutcome {
    /// Keeps `ir` only if `diagnostics` contains no error.
    pub fn from_diagnostics(ir: Schema, diagnostics: Vec<Diag>) -> Self {
        let has_errors = diagnostics
            .iter()
            .any(|d| d.severity == DiagSeverity::Error);
        Self {
            ir: if has_errors { None } else { Some(ir) },
            diagnostics,
        }
    }

    pub fn is_success(&self) -> bool {
        self.ir.is_some()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diag::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diag> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diag> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    /// Renders every diagnostic as a miette report against `source`.
    pub fn to_reports(&self, source: &SourceFile) -> Vec<Report> {
        convert_diagnostics_to_reports(&self.diagnostics, source)
    }
}
