//! Loader error types
//!
//! The loader only fails structurally: an empty source cannot yield a
//! table. Everything past that point is normalized, never rejected.

use std::fmt;

/// Loader error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderErrorCode {
    /// Source text contains no data at all
    EmptySource,
}

impl LoaderErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            LoaderErrorCode::EmptySource => "CSVQL_EMPTY_SOURCE",
        }
    }
}

impl fmt::Display for LoaderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Loader error with context
#[derive(Debug)]
pub struct LoaderError {
    code: LoaderErrorCode,
    message: String,
}

impl LoaderError {
    /// Create an empty-source error
    pub fn empty_source(reason: impl Into<String>) -> Self {
        Self {
            code: LoaderErrorCode::EmptySource,
            message: reason.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> LoaderErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for LoaderError {}

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string() {
        assert_eq!(LoaderErrorCode::EmptySource.code(), "CSVQL_EMPTY_SOURCE");
    }

    #[test]
    fn test_error_display() {
        let err = LoaderError::empty_source("no lines");
        let display = format!("{}", err);
        assert!(display.contains("CSVQL_EMPTY_SOURCE"));
        assert!(display.contains("no lines"));
    }
}
