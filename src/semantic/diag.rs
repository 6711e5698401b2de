//! Semantic diagnostic categories and their stable codes.

use crate::diag::{Diag, DiagSeverity};

/// Categories of semantic diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticDiagKind {
    /// Missing or unsupported database driver, or malformed URL.
    InvalidDatabaseConfig,
    InvalidModelName,
    EmptyModel,
    DuplicateModel,
    InvalidFieldName,
    DuplicateField,
    UnknownDirective,
    /// Wrong argument count or argument that does not parse.
    InvalidDirectiveArguments,
    /// Directive placed on a field type it does not apply to.
    IncompatibleDirective,
    /// `@id`/`@auto` misuse.
    InvalidIdentity,
    MissingRelationDirective,
    ConflictingRelationDirectives,
    /// Relation directive on a field with the wrong array-ness.
    InvalidRelationShape,
    UnknownRelationTarget,
    CircularBelongsTo,
    /// Relation declared on one side only. The only warning category.
    UnidirectionalRelation,
}

impl SemanticDiagKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidDatabaseConfig => "S001",
            Self::InvalidModelName => "S010",
            Self::EmptyModel => "S011",
            Self::DuplicateModel => "S012",
            Self::InvalidFieldName => "S020",
            Self::DuplicateField => "S021",
            Self::UnknownDirective => "S030",
            Self::InvalidDirectiveArguments => "S031",
            Self::IncompatibleDirective => "S040",
            Self::InvalidIdentity => "S050",
            Self::MissingRelationDirective => "S060",
            Self::ConflictingRelationDirectives => "S061",
            Self::InvalidRelationShape => "S070",
            Self::UnknownRelationTarget => "S071",
            Self::CircularBelongsTo => "S072",
            Self::UnidirectionalRelation => "S080",
        }
    }

    pub fn severity(self) -> DiagSeverity {
        match self {
            Self::UnidirectionalRelation => DiagSeverity::Warning,
            _ => DiagSeverity::Error,
        }
    }

    /// Starts a diagnostic of this kind.
    pub fn diag(self, message: impl Into<String>) -> Diag {
        Diag::new(self.severity(), self.code(), message)
    }
}
