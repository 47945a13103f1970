//! # tablewright
//!
//! Builds MySQL `CREATE TABLE` and `ALTER TABLE ... ADD COLUMN` statements from a
//! fluent, in-memory description of a table's columns.
//!
//! ## Quick Start
//!
//! ```rust
//! use tablewright::prelude::*;
//!
//! let users = TableDefinition::new("users")
//!     .add_primary_column("id")
//!     .add_column("email", MySqlType::Varchar.with_length(255))
//!     .add_timestamps();
//!
//! let create = users.generate_create();
//! assert!(create.starts_with("CREATE TABLE `users` (\n"));
//!
//! let alter = TableDefinition::new("users")
//!     .add_descriptor(
//!         ColumnDescriptor::new("nickname", "VARCHAR(64)")
//!             .nullable()
//!             .after_column("email"),
//!     )
//!     .generate_alter();
//! assert_eq!(alter, "ALTER TABLE users\nADD COLUMN nickname VARCHAR(64) AFTER email");
//! ```
//!
//! ## Features
//!
//! - `serde` - Serialize/deserialize column descriptors and default values
//! - `tracing` - Emit `tracing` events as columns are added and statements rendered

mod tracing;

pub mod column;
pub mod default_value;
mod error;
pub mod table;

pub use column::{ColumnDescriptor, ColumnMap, ColumnSpec};
pub use default_value::{CURRENT_TIMESTAMP, DefaultValue};
pub use error::{Error, Result};
pub use table::TableDefinition;
pub use tablewright_types::{self as types, MySqlType};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::column::{ColumnDescriptor, ColumnMap, ColumnSpec};
    pub use crate::default_value::DefaultValue;
    pub use crate::table::TableDefinition;
    pub use tablewright_types::MySqlType;
}
