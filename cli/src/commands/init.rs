//! Init command - writes a starter tablewright.toml

use std::path::Path;

use crate::config::CONFIG_FILE;
use crate::error::CliError;
use crate::output;

const STARTER_CONFIG: &str = r#"# tablewright configuration
#
# Each [[tables]] entry renders to one CREATE TABLE / ALTER TABLE statement.
# Columns are emitted in this order: primaryColumn, columns (as listed),
# then the created_at/updated_at pair when timestamps = true.

# out = "schema.sql"

[[tables]]
name = "users"
primaryColumn = "id"
timestamps = true

[tables.columns.email]
type = "VARCHAR(255)"

[tables.columns.nickname]
type = "VARCHAR(64)"
nullable = true
after = "email"
"#;

/// Write the starter config to `path`, refusing to overwrite
pub fn run(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        return Err(CliError::Other(format!(
            "{} already exists. Delete it first to reinitialize.",
            path.display()
        )));
    }

    std::fs::write(path, STARTER_CONFIG).map_err(|e| CliError::IoError(e.to_string()))?;

    println!("{}", output::success(&format!("Created {}", path.display())));
    println!();
    println!("Next steps:");
    println!("  1. Describe your tables in {}", path.display());
    println!(
        "  2. Run {} to print the CREATE TABLE statements",
        output::heading("tablewright create")
    );

    Ok(())
}

/// Default location of the config file
pub fn default_path() -> &'static Path {
    Path::new(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn starter_config_is_valid() {
        let config = Config::parse(STARTER_CONFIG).unwrap();
        let table = config.tables[0].build().unwrap();

        assert_eq!(table.table_name(), "users");
        assert_eq!(table.columns().len(), 5);
    }
}
