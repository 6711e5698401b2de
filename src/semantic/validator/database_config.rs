use crate::diag::Diag;
use crate::dialect::Dialect;
use crate::ir::Schema;
use crate::semantic::diag::SemanticDiagKind;

use super::{ModelIndex, SchemaValidator};

/// Pass 1: Database config - Checks the driver and URL from the header.
pub(super) fn run_database_config(
    _validator: &SchemaValidator,
    schema: &Schema,
    _index: &ModelIndex<'_>,
    diagnostics: &mut Vec<Diag>,
) {
    let kind = SemanticDiagKind::InvalidDatabaseConfig;

    if schema.database_driver.is_empty() {
        diagnostics.push(kind.diag("database driver is required"));
    } else if Dialect::from_driver(&schema.database_driver).is_none() {
        let driver = schema.database_driver.trim_matches(['"', '\'']);
        diagnostics.push(
            kind.diag(format!("unsupported database driver: {driver}"))
                .with_help(format!(
                    "supported drivers are {}",
                    Dialect::SUPPORTED_DRIVERS.join(", ")
                )),
        );
    }

    if schema.database_url.is_empty() {
        diagnostics.push(kind.diag("database URL is required"));
    } else if !schema.database_url.contains("://") {
        diagnostics.push(
            kind.diag(format!("invalid database URL format: {}", schema.database_url))
                .with_help("expected a URL such as postgres://localhost/app"),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::ir::Schema;
    use crate::semantic::validator::SchemaValidator;

    fn messages(driver: &str, url: &str) -> Vec<String> {
        let schema = Schema::new(driver, url, Vec::new());
        SchemaValidator::new()
            .validate(&schema)
            .into_iter()
            .map(|d| d.message)
            .collect()
    }

    #[test]
    fn accepts_every_supported_driver() {
        for driver in ["mysql", "postgres", "postgresql", "sqlite", "sqlite3", "'mysql'"] {
            assert!(messages(driver, "x://y").is_empty(), "{driver}");
        }
    }

    #[test]
    fn rejects_unknown_driver() {
        assert_eq!(messages("oracle", "x://y"), vec!["unsupported database driver: oracle"]);
    }

    #[test]
    fn missing_values_are_reported_together() {
        assert_eq!(
            messages("", ""),
            vec!["database driver is required", "database URL is required"]
        );
    }

    #[test]
    fn url_needs_scheme_separator() {
        assert_eq!(
            messages("sqlite", "file.db"),
            vec!["invalid database URL format: file.db"]
        );
    }
}
