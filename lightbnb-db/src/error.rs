//! Error types for lightbnb-db
//!
//! Library consumers get structured errors; the CLI wraps them in `anyhow`.

use thiserror::Error;

use crate::models::ValidationError;

/// Main error type for data-access operations
#[derive(Debug, Error)]
pub enum DbError {
    /// The backing store rejected the statement or the connection failed
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Input rejected before any SQL was issued
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Connection settings could not be turned into connect options
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for data-access operations
pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DbError::config("bad DATABASE_URL");
        assert_eq!(err.to_string(), "configuration error: bad DATABASE_URL");

        let err: DbError = ValidationError::Empty { field: "name" }.into();
        assert_eq!(err.to_string(), "invalid input: name cannot be empty");
    }

    #[test]
    fn sqlx_error_conversion() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
        assert!(err.to_string().starts_with("database error:"));
    }
}
