//! MySQL type definitions
//!
//! - [`MySqlType`] - MySQL column types
//! - [`ParseTypeError`] - error for unknown type names

mod sql_type;

pub use sql_type::{MySqlType, ParseTypeError};
