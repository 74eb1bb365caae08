//! CLI-specific error types
//!
//! CLI errors terminate the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::engine::EngineError;
use crate::loader::LoaderError;
use crate::source::SourceError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// No CSV source could be read
    SourceFailed,
    /// CSV source could not be parsed
    LoadFailed,
    /// Query rejected (strict mode only)
    QueryFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CSVQL_CLI_CONFIG_ERROR",
            Self::IoError => "CSVQL_CLI_IO_ERROR",
            Self::SourceFailed => "CSVQL_CLI_SOURCE_FAILED",
            Self::LoadFailed => "CSVQL_CLI_LOAD_FAILED",
            Self::QueryFailed => "CSVQL_CLI_QUERY_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SourceError> for CliError {
    fn from(e: SourceError) -> Self {
        Self::new(CliErrorCode::SourceFailed, e.to_string())
    }
}

impl From<LoaderError> for CliError {
    fn from(e: LoaderError) -> Self {
        Self::new(CliErrorCode::LoadFailed, e.to_string())
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        Self::new(CliErrorCode::QueryFailed, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
