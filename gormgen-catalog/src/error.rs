use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failure to read the catalog. Fatal for a generation run.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to start the catalog runtime")]
    Runtime(#[source] std::io::Error),

    #[error("failed to connect to the database")]
    Connect(#[source] sqlx::Error),

    #[error("failed to list tables in schema '{schema}'")]
    ListTables {
        schema: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to list columns of table '{table}'")]
    ListColumns {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("catalog rejected the query for '{target}': {reason}")]
    Rejected { target: String, reason: String },

    #[error("failed to close the database connection")]
    Close(#[source] sqlx::Error),
}
