//! Configuration for the tablewright CLI
//!
//! Handles loading `tablewright.toml`, which lists the tables to render.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use tablewright::{ColumnMap, TableDefinition};

pub const CONFIG_FILE: &str = "tablewright.toml";

// ============================================================================
// Tables
// ============================================================================

/// One table as described in the config file.
///
/// Columns are applied in a fixed order: `primaryColumn`, then `columns` in
/// document order, then `timestamps`, then `primaryKey`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TableConfig {
    pub name: String,

    #[serde(default)]
    pub primary_column: Option<String>,

    #[serde(default)]
    pub primary_key: Option<String>,

    #[serde(default)]
    pub timestamps: bool,

    #[serde(default)]
    pub columns: ColumnMap,
}

impl TableConfig {
    /// Build the table definition
    pub fn build(&self) -> tablewright::Result<TableDefinition> {
        let mut table = TableDefinition::new(self.name.as_str());

        if let Some(column) = &self.primary_column {
            table = table.add_primary_column(column.as_str());
        }

        table.try_extend_columns(self.columns.clone())?;

        if self.timestamps {
            table = table.add_timestamps();
        }

        if let Some(column) = &self.primary_key {
            table = table.set_primary_key(column.as_str());
        }

        tracing::debug!(
            table = %self.name,
            columns = table.columns().len(),
            "built table definition"
        );

        Ok(table)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Default output file; stdout when unset
    #[serde(default)]
    pub out: Option<PathBuf>,

    #[serde(default)]
    pub tables: Vec<TableConfig>,
}

impl Config {
    /// Load from default config file
    pub fn load() -> Result<Self, Error> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            Error::Parse(_, source) => Error::Parse(path.into(), source),
            other => other,
        })?;

        tracing::debug!(path = %path.display(), tables = config.tables.len(), "loaded config");
        Ok(config)
    }

    /// Parse and validate config text
    pub fn parse(content: &str) -> Result<Self, Error> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::Parse(PathBuf::from(CONFIG_FILE), e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.tables.is_empty() {
            return Err(Error::NoTables);
        }

        for (i, table) in self.tables.iter().enumerate() {
            if self.tables[..i].iter().any(|t| t.name == table.name) {
                return Err(Error::DuplicateTable(table.name.clone()));
            }
        }

        Ok(())
    }

    /// Tables to render: the named one, or all of them in file order
    pub fn select(&self, name: Option<&str>) -> Result<Vec<&TableConfig>, Error> {
        match name {
            Some(name) => self
                .tables
                .iter()
                .find(|t| t.name == name)
                .map(|t| vec![t])
                .ok_or_else(|| Error::UnknownTable(name.to_string())),
            None => Ok(self.tables.iter().collect()),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("no tables defined")]
    NoTables,

    #[error("table '{0}' is defined more than once")]
    DuplicateTable(String),

    #[error("table '{0}' not found in config")]
    UnknownTable(String),
}

pub type ConfigError = Error;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tablewright::DefaultValue;

    const USERS: &str = r#"
        [[tables]]
        name = "users"
        primaryColumn = "id"
        timestamps = true

        [tables.columns.email]
        type = "VARCHAR(255)"

        [tables.columns.nickname]
        type = "VARCHAR(64)"
        nullable = true
        defaultValue = "anon"
        after = "email"
    "#;

    #[test]
    fn parses_tables_in_document_order() {
        let cfg = Config::parse(USERS).unwrap();
        assert_eq!(cfg.tables.len(), 1);

        let users = &cfg.tables[0];
        assert_eq!(users.primary_column.as_deref(), Some("id"));
        let names: Vec<_> = users.columns.keys().map(String::as_str).collect();
        assert_eq!(names, ["email", "nickname"]);
        assert_eq!(
            users.columns["nickname"].default,
            Some(DefaultValue::Text("anon".into()))
        );
    }

    #[test]
    fn build_applies_fixed_order() {
        let cfg = Config::parse(USERS).unwrap();
        let table = cfg.tables[0].build().unwrap();
        let names: Vec<_> = table.columns().iter().map(|c| c.name()).collect();

        assert_eq!(names, ["id", "email", "nickname", "created_at", "updated_at"]);
        assert_eq!(table.primary_key(), Some("id"));
    }

    #[test]
    fn explicit_primary_key_wins() {
        let cfg = Config::parse(
            r#"
            [[tables]]
            name = "tags"
            primaryKey = "slug"

            [tables.columns.slug]
            type = "VARCHAR(32)"
            "#,
        )
        .unwrap();

        let table = cfg.tables[0].build().unwrap();
        assert_eq!(table.primary_key(), Some("slug"));
    }

    #[test]
    fn missing_type_is_a_build_error() {
        let cfg = Config::parse(
            r#"
            [[tables]]
            name = "t"
            [tables.columns.foo]
            defaultValue = 1
            "#,
        )
        .unwrap();

        let err = cfg.tables[0].build().unwrap_err();
        assert!(err.to_string().contains("foo"));
    }

    #[test]
    fn empty_config_is_rejected() {
        assert!(matches!(Config::parse(""), Err(Error::NoTables)));
    }

    #[test]
    fn duplicate_tables_are_rejected() {
        let err = Config::parse(
            r#"
            [[tables]]
            name = "t"
            [[tables]]
            name = "t"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, Error::DuplicateTable(name) if name == "t"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::parse(
            r#"
            [[tables]]
            name = "t"
            primary = "id"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, Error::Parse(..)));
    }

    #[test]
    fn select_by_name() {
        let cfg = Config::parse(USERS).unwrap();
        assert_eq!(cfg.select(Some("users")).unwrap().len(), 1);
        assert!(matches!(
            cfg.select(Some("posts")),
            Err(Error::UnknownTable(name)) if name == "posts"
        ));
    }
}
