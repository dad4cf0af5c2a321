//! Error types for quillsql.

use crate::transpiler::Dialect;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlError {
    /// A required statement attribute was never set.
    #[error("Missing attribute for {operation}: {attribute}")]
    MissingAttribute {
        operation: &'static str,
        attribute: &'static str,
    },

    /// A string token has no mapping in the keyword catalog.
    #[error("Unknown token: '{0}'")]
    UnknownToken(String),

    /// An operation tag outside the closed dispatch set.
    #[error("Unknown operation: '{0}'")]
    UnknownOperation(String),

    /// The requested construct has no representation on the active dialect.
    #[error("'{construct}' is not supported on {dialect}")]
    UnsupportedOnDialect {
        construct: &'static str,
        dialect: Dialect,
    },

    /// A condition descriptor is malformed (missing column, inverted range).
    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    /// Column list and value list lengths disagree.
    #[error("Number of columns ({columns}) doesn't match number of values ({values})")]
    ColumnValueMismatch { columns: usize, values: usize },

    /// A declared column size falls outside the bounds for its data type.
    #[error("Size {size} is outside the allowed range {min}..={max} for {data_type}")]
    SizeOutOfRange {
        data_type: &'static str,
        size: i64,
        min: i64,
        max: i64,
    },

    /// A CHECK/condition expression is blank.
    #[error("Check expression is empty")]
    EmptyExpression,

    /// Reading a file for a BLOB literal failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SqlError {
    /// Create a missing-attribute error.
    pub fn missing(operation: &'static str, attribute: &'static str) -> Self {
        Self::MissingAttribute {
            operation,
            attribute,
        }
    }

    /// Create an unsupported-on-dialect error.
    pub fn unsupported(construct: &'static str, dialect: Dialect) -> Self {
        Self::UnsupportedOnDialect { construct, dialect }
    }

    /// Create an invalid-condition error.
    pub fn condition(message: impl Into<String>) -> Self {
        Self::InvalidCondition(message.into())
    }
}

/// Result type alias for quillsql operations.
pub type SqlResult<T> = Result<T, SqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SqlError::missing("insert", "columns");
        assert_eq!(err.to_string(), "Missing attribute for insert: columns");

        let err = SqlError::unsupported("rename database", Dialect::Sqlite);
        assert_eq!(err.to_string(), "'rename database' is not supported on sqlite");
    }
}
