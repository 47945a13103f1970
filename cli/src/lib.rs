//! tablewright CLI - Command-line interface for tablewright
//!
//! This crate provides a standalone CLI tool that renders MySQL DDL from a
//! `tablewright.toml` file instead of requiring Rust code.
//!
//! # Quick Start
//!
//! 1. Install the CLI: `cargo install tablewright-cli`
//! 2. Run `tablewright init` to create a `tablewright.toml`
//! 3. Run `tablewright create` to print the CREATE TABLE statements
//!
//! # Configuration
//!
//! ```toml
//! [[tables]]
//! name = "users"
//! primaryColumn = "id"
//! timestamps = true
//!
//! [tables.columns.email]
//! type = "VARCHAR(255)"
//!
//! [tables.columns.nickname]
//! type = "VARCHAR(64)"
//! nullable = true
//! after = "email"
//! ```
//!
//! # Commands
//!
//! - `tablewright init` - Create a new tablewright.toml configuration file
//! - `tablewright create` - Print CREATE TABLE statements
//! - `tablewright alter` - Print ALTER TABLE ... ADD COLUMN statements
//! - `tablewright check` - Validate the configuration

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use config::{Config, ConfigError, TableConfig};
pub use error::CliError;
