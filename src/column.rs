//! Column descriptors
//!
//! This module provides two complementary types:
//! - [`ColumnDescriptor`] - A complete column, as stored by [`TableDefinition`](crate::TableDefinition)
//! - [`ColumnSpec`] - A partial column keyed by name in [`ColumnMap`], used by the batch form

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::default_value::DefaultValue;
use crate::error::{Error, Result};

/// Ordered mapping from column name to its partial description.
pub type ColumnMap = IndexMap<String, ColumnSpec>;

/// A column to be created or added.
///
/// # Examples
///
/// ```
/// use tablewright::ColumnDescriptor;
///
/// let column = ColumnDescriptor::new("nickname", "VARCHAR(64)")
///     .nullable()
///     .default_value("anon")
///     .after_column("email");
///
/// assert_eq!(column.to_column_sql(false), "nickname VARCHAR(64) DEFAULT 'anon'");
/// assert_eq!(column.after(), Some("email"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// SQL type (e.g., "BIGINT UNSIGNED", "VARCHAR(255)")
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub sql_type: Cow<'static, str>,

    /// Default value, if any
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "defaultValue",
            alias = "default",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub default: Option<DefaultValue>,

    /// Whether NULL is allowed. `false` emits `NOT NULL`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nullable: bool,

    /// Column to place this one after, used by `ALTER TABLE` only
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub after: Option<String>,
}

impl ColumnDescriptor {
    /// Create a non-nullable column with no default
    #[must_use]
    pub fn new(name: impl Into<String>, sql_type: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            default: None,
            nullable: false,
            after: None,
        }
    }

    /// Allow NULL (drops the `NOT NULL` clause)
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the default value
    #[must_use]
    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Place the column after `column` in `ALTER TABLE` output
    #[must_use]
    pub fn after_column(mut self, column: impl Into<String>) -> Self {
        self.after = Some(column.into());
        self
    }

    /// Get the column name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the SQL type
    #[inline]
    #[must_use]
    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    /// Get the `AFTER` column, ignoring an empty name
    #[inline]
    #[must_use]
    pub fn after(&self) -> Option<&str> {
        self.after.as_deref().filter(|after| !after.is_empty())
    }

    /// Generate the column definition SQL shared by `CREATE TABLE` and
    /// `ADD COLUMN` (no leading/trailing punctuation, no `AFTER`).
    #[must_use]
    pub fn to_column_sql(&self, auto_increment: bool) -> String {
        let mut sql = format!("{} {}", self.name, self.sql_type);

        if !self.nullable {
            sql.push_str(" NOT NULL");
        }

        if let Some(default) = &self.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(&default.to_sql());
        }

        if auto_increment {
            sql.push_str(" AUTO_INCREMENT");
        }

        sql
    }

    /// Generate the `ADD COLUMN` clause, including `AFTER` when set
    #[must_use]
    pub fn add_column_sql(&self, auto_increment: bool) -> String {
        let mut sql = format!("ADD COLUMN {}", self.to_column_sql(auto_increment));

        if let Some(after) = self.after() {
            sql.push_str(" AFTER ");
            sql.push_str(after);
        }

        sql
    }
}

/// A column description without its name, as accepted by
/// [`TableDefinition::add_columns`](crate::TableDefinition::add_columns).
///
/// `sql_type` is optional here so that a missing type can be reported with the
/// column's name instead of failing deserialization.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ColumnSpec {
    /// SQL type, mandatory when converted into a column
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub sql_type: Option<Cow<'static, str>>,

    /// Default value, if any
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "defaultValue",
            alias = "default",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub default: Option<DefaultValue>,

    /// Whether NULL is allowed
    #[cfg_attr(feature = "serde", serde(default))]
    pub nullable: bool,

    /// Column to place this one after
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub after: Option<String>,
}

impl ColumnSpec {
    /// Create a partial column with a type
    #[must_use]
    pub fn new(sql_type: impl Into<Cow<'static, str>>) -> Self {
        Self {
            sql_type: Some(sql_type.into()),
            ..Self::default()
        }
    }

    /// Allow NULL
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the default value
    #[must_use]
    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Place the column after `column` in `ALTER TABLE` output
    #[must_use]
    pub fn after_column(mut self, column: impl Into<String>) -> Self {
        self.after = Some(column.into());
        self
    }

    /// Attach the name, failing if no type was given
    pub fn into_descriptor(self, name: impl Into<String>) -> Result<ColumnDescriptor> {
        let name = name.into();
        let Some(sql_type) = self.sql_type else {
            return Err(Error::MissingColumnType { column: name });
        };

        Ok(ColumnDescriptor {
            name,
            sql_type,
            default: self.default,
            nullable: self.nullable,
            after: self.after,
        })
    }
}

impl From<ColumnDescriptor> for ColumnSpec {
    fn from(column: ColumnDescriptor) -> Self {
        Self {
            sql_type: Some(column.sql_type),
            default: column.default,
            nullable: column.nullable,
            after: column.after,
        }
    }
}
