//! Tracing utilities for DDL generation.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event for a generated statement.
///
/// ```ignore
/// tablewright_trace_ddl!("create", &self.table_name, self.columns.len());
/// ```
#[macro_export]
macro_rules! tablewright_trace_ddl {
    ($kind:literal, $table:expr, $column_count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            kind = $kind,
            table = %$table,
            columns = $column_count,
            "tablewright.ddl"
        );
    };
}

/// Emit a trace-level event when a column is appended to a table definition.
///
/// ```ignore
/// tablewright_trace_column!(&self.table_name, &column.name, &column.sql_type);
/// ```
#[macro_export]
macro_rules! tablewright_trace_column {
    ($table:expr, $column:expr, $sql_type:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(
            table = %$table,
            column = %$column,
            sql_type = %$sql_type,
            "tablewright.column"
        );
    };
}
