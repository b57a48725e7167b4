//! # Data Store Error Types
//!
//! Structured error handling for the data-access layer using thiserror
//! instead of `Box<dyn Error>` patterns. Query construction itself is
//! error-free; everything here surfaces from configuration loading or from
//! executing emitted SQL against the database.

use thiserror::Error;

/// Errors surfaced by the data-access layer
#[derive(Error, Debug)]
pub enum DataStoreError {
    #[error("Database connection error: {message}")]
    ConnectionFailed { message: String },

    #[error("Query execution error: {operation}: {message}")]
    QueryExecution { operation: String, message: String },

    #[error("Row not found: {message}")]
    NotFound { message: String },

    #[error("Row decode error: {message}")]
    RowDecode { message: String },

    #[error("Configuration error: {component}: {message}")]
    Configuration { component: String, message: String },

    #[error("Connection pool exhausted: {message}")]
    PoolExhausted { message: String },
}

impl DataStoreError {
    /// Create a connection error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            message: message.into(),
        }
    }

    /// Create a query execution error
    pub fn query_execution(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::QueryExecution {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a row not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a row decode error
    pub fn row_decode(message: impl Into<String>) -> Self {
        Self::RowDecode {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a pool exhausted error
    pub fn pool_exhausted(message: impl Into<String>) -> Self {
        Self::PoolExhausted {
            message: message.into(),
        }
    }
}

/// Conversion from sqlx::Error to DataStoreError
impl From<sqlx::Error> for DataStoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DataStoreError::not_found("no rows returned"),
            sqlx::Error::Database(db_err) => {
                DataStoreError::query_execution("database", db_err.to_string())
            }
            sqlx::Error::ColumnDecode { index, source } => {
                DataStoreError::row_decode(format!("column {index}: {source}"))
            }
            sqlx::Error::Decode(decode_err) => DataStoreError::row_decode(decode_err.to_string()),
            sqlx::Error::PoolTimedOut => {
                DataStoreError::pool_exhausted("timed out waiting for a connection")
            }
            sqlx::Error::PoolClosed => DataStoreError::pool_exhausted("database pool is closed"),
            sqlx::Error::Configuration(config_err) => {
                DataStoreError::configuration("database", config_err.to_string())
            }
            _ => DataStoreError::connection_failed(err.to_string()),
        }
    }
}

/// Conversion from config::ConfigError to DataStoreError
impl From<config::ConfigError> for DataStoreError {
    fn from(err: config::ConfigError) -> Self {
        DataStoreError::configuration("config", err.to_string())
    }
}

/// Result type alias for data-access operations
pub type DataStoreResult<T> = Result<T, DataStoreError>;
