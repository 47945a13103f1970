//! Error types for the CLI

use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A table in the config could not be built
    #[error("Table '{table}': {source}")]
    Build {
        table: String,
        #[source]
        source: tablewright::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
