use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A batch column entry had no `type`
    #[error(
        "Column 'type' missing for {column}. Column 'type' is mandatory when defining a column with 'add_columns'"
    )]
    MissingColumnType { column: String },
}

/// Result type for table builder operations
pub type Result<T> = std::result::Result<T, Error>;
