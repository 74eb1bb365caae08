//! Source fetch errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Source fetch errors
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The only configured path could not be read
    #[error("Failed to read source {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// Primary and fallback both failed
    #[error(
        "All sources failed: primary {}: {primary_reason}; fallback {}: {fallback_reason}",
        primary.display(),
        fallback.display()
    )]
    AllSourcesFailed {
        primary: PathBuf,
        primary_reason: String,
        fallback: PathBuf,
        fallback_reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = SourceError::Read {
            path: PathBuf::from("/tmp/data.csv"),
            reason: "No such file".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("/tmp/data.csv"));
        assert!(display.contains("No such file"));
    }

    #[test]
    fn test_all_failed_names_both_paths() {
        let err = SourceError::AllSourcesFailed {
            primary: PathBuf::from("a.csv"),
            primary_reason: "denied".into(),
            fallback: PathBuf::from("b.csv"),
            fallback_reason: "missing".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("a.csv"));
        assert!(display.contains("b.csv"));
    }
}
