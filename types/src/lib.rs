//! Type catalog for tablewright
//!
//! This crate provides the dialect-specific type names used by the
//! `tablewright` table builder:
//!
//! - [`MySqlType`] - MySQL column types and their SQL spelling
//! - [`ParseTypeError`] - returned when a type name is not in the catalog
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization

pub mod mysql;

pub use mysql::{MySqlType, ParseTypeError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::mysql::MySqlType;
}
