//! Table definitions and statement generation

use std::borrow::Cow;

use tablewright_types::MySqlType;

use crate::column::{ColumnDescriptor, ColumnSpec};
use crate::default_value::DefaultValue;
use crate::error::Result;
use crate::{tablewright_trace_column, tablewright_trace_ddl};

/// Name of the creation timestamp column added by [`TableDefinition::add_timestamps`]
pub const CREATED_AT: &str = "created_at";

/// Name of the update timestamp column added by [`TableDefinition::add_timestamps`]
pub const UPDATED_AT: &str = "updated_at";

/// An ordered set of columns plus an optional primary key, rendered to
/// `CREATE TABLE` or `ALTER TABLE ... ADD COLUMN` on demand.
///
/// Every add-operation consumes the definition and returns it, so calls chain.
/// Rendering borrows and may be repeated.
///
/// # Examples
///
/// ```
/// use tablewright::TableDefinition;
///
/// let sql = TableDefinition::new("users")
///     .add_primary_column("id")
///     .add_column("email", "VARCHAR(255)")
///     .add_timestamps()
///     .generate_create();
///
/// assert_eq!(
///     sql,
///     "CREATE TABLE `users` (\n\
///      \x20 id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,\n\
///      \x20 email VARCHAR(255) NOT NULL,\n\
///      \x20 created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,\n\
///      \x20 updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,\n\
///      \x20 PRIMARY KEY (id)\n\
///      )"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableDefinition {
    table_name: String,
    columns: Vec<ColumnDescriptor>,
    primary_key: Option<String>,
}

impl TableDefinition {
    /// Create an empty definition for `table_name`
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            columns: Vec::new(),
            primary_key: None,
        }
    }

    /// Append a `BIGINT UNSIGNED` column and make it the primary key
    #[must_use]
    pub fn add_primary_column(mut self, column_name: impl Into<String>) -> Self {
        let column_name = column_name.into();
        self.push(ColumnDescriptor::new(
            column_name.clone(),
            MySqlType::BigIntUnsigned,
        ));
        self.primary_key = Some(column_name);
        self
    }

    /// Append a non-nullable column with no default
    #[must_use]
    pub fn add_column(
        self,
        column_name: impl Into<String>,
        column_type: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.add_column_with(column_name, column_type, None, false)
    }

    /// Append a fully specified column
    ///
    /// ```
    /// use tablewright::TableDefinition;
    ///
    /// let sql = TableDefinition::new("users")
    ///     .add_column_with("age", "INT", None, true)
    ///     .generate_alter();
    ///
    /// assert_eq!(sql, "ALTER TABLE users\nADD COLUMN age INT");
    /// ```
    #[must_use]
    pub fn add_column_with(
        mut self,
        column_name: impl Into<String>,
        column_type: impl Into<Cow<'static, str>>,
        default: Option<DefaultValue>,
        nullable: bool,
    ) -> Self {
        self.push(ColumnDescriptor {
            name: column_name.into(),
            sql_type: column_type.into(),
            default,
            nullable,
            after: None,
        });
        self
    }

    /// Append an already built column
    #[must_use]
    pub fn add_descriptor(mut self, column: ColumnDescriptor) -> Self {
        self.push(column);
        self
    }

    /// Append a batch of columns in iteration order.
    ///
    /// Every entry must carry a type. All entries are checked before any column is
    /// appended; the first one without a type is reported as
    /// [`Error::MissingColumnType`](crate::Error::MissingColumnType). On error the
    /// definition is dropped; use [`try_extend_columns`](Self::try_extend_columns)
    /// to keep it and retry.
    ///
    /// ```
    /// use tablewright::{ColumnMap, ColumnSpec, TableDefinition};
    ///
    /// let mut columns = ColumnMap::new();
    /// columns.insert("age".into(), ColumnSpec::new("INT").nullable());
    /// columns.insert("nickname".into(), ColumnSpec::new("TEXT").after_column("age"));
    ///
    /// let table = TableDefinition::new("users").add_columns(columns)?;
    /// assert_eq!(table.columns().len(), 2);
    /// assert_eq!(table.columns()[1].after(), Some("age"));
    /// # Ok::<(), tablewright::Error>(())
    /// ```
    pub fn add_columns<I, K>(mut self, columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, ColumnSpec)>,
        K: Into<String>,
    {
        self.try_extend_columns(columns)?;
        Ok(self)
    }

    /// Append a batch of columns in place.
    ///
    /// Same rules as [`add_columns`](Self::add_columns), but the definition is
    /// left untouched on error so a corrected batch can be applied.
    ///
    /// ```
    /// use tablewright::{ColumnSpec, TableDefinition};
    ///
    /// let mut table = TableDefinition::new("users").add_primary_column("id");
    ///
    /// assert!(table.try_extend_columns([("age", ColumnSpec::default())]).is_err());
    /// assert_eq!(table.columns().len(), 1);
    ///
    /// table.try_extend_columns([("age", ColumnSpec::new("INT"))])?;
    /// assert_eq!(table.columns().len(), 2);
    /// # Ok::<(), tablewright::Error>(())
    /// ```
    pub fn try_extend_columns<I, K>(&mut self, columns: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, ColumnSpec)>,
        K: Into<String>,
    {
        let columns = columns
            .into_iter()
            .map(|(name, spec)| spec.into_descriptor(name))
            .collect::<Result<Vec<_>>>()?;

        for column in columns {
            self.push(column);
        }

        Ok(())
    }

    /// Append `created_at` and `updated_at`, both `DATETIME DEFAULT CURRENT_TIMESTAMP`
    #[must_use]
    pub fn add_timestamps(mut self) -> Self {
        for name in [CREATED_AT, UPDATED_AT] {
            self.push(
                ColumnDescriptor::new(name, MySqlType::DateTime)
                    .default_value(DefaultValue::CurrentTimestamp),
            );
        }
        self
    }

    /// Designate the primary key column. The name is not checked against
    /// the column list.
    #[doc(alias = "add_primary_key")]
    #[must_use]
    pub fn set_primary_key(mut self, column_name: impl Into<String>) -> Self {
        self.primary_key = Some(column_name.into());
        self
    }

    fn push(&mut self, column: ColumnDescriptor) {
        tablewright_trace_column!(&self.table_name, &column.name, &column.sql_type);
        self.columns.push(column);
    }

    /// Get the table name
    #[inline]
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the columns in insertion order
    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Get the primary key column name
    #[inline]
    #[must_use]
    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    /// Whether `column` is the designated primary key
    #[inline]
    #[must_use]
    pub fn is_auto_increment(&self, column: &ColumnDescriptor) -> bool {
        self.primary_key() == Some(column.name())
    }

    /// Generate CREATE TABLE SQL
    #[must_use]
    pub fn generate_create(&self) -> String {
        tablewright_trace_ddl!("create", &self.table_name, self.columns.len());

        let mut sql = format!("CREATE TABLE `{}` (\n", self.table_name);

        for column in &self.columns {
            sql.push_str("  ");
            sql.push_str(&column.to_column_sql(self.is_auto_increment(column)));
            sql.push_str(",\n");
        }

        if let Some(primary_key) = self.primary_key().filter(|pk| !pk.is_empty()) {
            sql.push_str(&format!("  PRIMARY KEY ({})", primary_key));
        }

        sql.push_str("\n)");
        sql
    }

    /// Generate ALTER TABLE SQL adding every column
    #[must_use]
    pub fn generate_alter(&self) -> String {
        tablewright_trace_ddl!("alter", &self.table_name, self.columns.len());

        let clauses = self
            .columns
            .iter()
            .map(|column| column.add_column_sql(self.is_auto_increment(column)))
            .collect::<Vec<_>>()
            .join(",\n");

        format!("ALTER TABLE {}\n{}", self.table_name, clauses)
    }
}
