//! Create/alter command implementation
//!
//! Renders the configured tables as CREATE TABLE or ALTER TABLE statements.

use std::path::Path;

use tablewright::TableDefinition;

use crate::config::Config;
use crate::error::CliError;
use crate::output;

/// Which statement to render for each table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Create,
    Alter,
}

impl StatementKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Alter => "alter",
        }
    }

    fn render(self, table: &TableDefinition) -> String {
        match self {
            Self::Create => table.generate_create(),
            Self::Alter => table.generate_alter(),
        }
    }
}

/// Render the selected tables into one SQL script.
///
/// Statements are separated by a blank line and each ends with `;`.
pub fn render(
    config: &Config,
    kind: StatementKind,
    table_name: Option<&str>,
) -> Result<String, CliError> {
    let mut statements = Vec::new();

    for table in config.select(table_name)? {
        let definition = table.build().map_err(|source| CliError::Build {
            table: table.name.clone(),
            source,
        })?;
        statements.push(kind.render(&definition));
    }

    tracing::info!(kind = kind.as_str(), statements = statements.len(), "rendered");

    Ok(format!("{};\n", statements.join(";\n\n")))
}

/// Run the create or alter command
pub fn run(
    config: &Config,
    kind: StatementKind,
    table_name: Option<&str>,
    out_override: Option<&Path>,
) -> Result<(), CliError> {
    let sql = render(config, kind, table_name)?;

    // CLI flag overrides config
    match out_override.or(config.out.as_deref()) {
        Some(path) => {
            std::fs::write(path, &sql).map_err(|e| {
                CliError::IoError(format!("Failed to write {}: {}", path.display(), e))
            })?;
            println!(
                "{}",
                output::success(&format!("Wrote {} SQL to {}", kind.as_str(), path.display()))
            );
        }
        None => print!("{sql}"),
    }

    Ok(())
}
