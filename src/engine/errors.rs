//! Engine error types
//!
//! In default mode the engine never fails: unsupported input degrades
//! into a displayable result set. Errors exist only for strict mode,
//! which rejects unresolved column names instead of falling back.

use std::fmt;

/// Engine error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorCode {
    /// A column name resolved to no header (strict mode only)
    UnknownColumn,
}

impl EngineErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            EngineErrorCode::UnknownColumn => "CSVQL_UNKNOWN_COLUMN",
        }
    }
}

impl fmt::Display for EngineErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Engine error with context
#[derive(Debug)]
pub struct EngineError {
    code: EngineErrorCode,
    message: String,
    column: Option<String>,
}

impl EngineError {
    /// Create an unknown-column error
    pub fn unknown_column(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: EngineErrorCode::UnknownColumn,
            message: format!("Unknown column: '{}'", name),
            column: Some(name),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> EngineErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending column name, if any
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for EngineError {}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_column_error() {
        let err = EngineError::unknown_column("nope");
        assert_eq!(err.code().code(), "CSVQL_UNKNOWN_COLUMN");
        assert_eq!(err.column(), Some("nope"));
        assert!(format!("{}", err).contains("nope"));
    }
}
