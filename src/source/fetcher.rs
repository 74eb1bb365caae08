//! CSV source fetcher

use std::fs;
use std::path::PathBuf;

use crate::observability::Logger;

use super::errors::{SourceError, SourceResult};

/// Fetches raw CSV text from a primary path with one optional fallback.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    primary: PathBuf,
    fallback: Option<PathBuf>,
}

impl SourceFetcher {
    /// Creates a fetcher with no fallback.
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            fallback: None,
        }
    }

    /// Adds the single fallback path.
    pub fn with_fallback(mut self, fallback: impl Into<PathBuf>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Returns the primary path.
    pub fn primary(&self) -> &PathBuf {
        &self.primary
    }

    /// Reads the primary source, falling back once on any failure.
    pub fn fetch(&self) -> SourceResult<String> {
        let primary_reason = match fs::read_to_string(&self.primary) {
            Ok(text) => return Ok(text),
            Err(e) => e.to_string(),
        };

        let fallback = match &self.fallback {
            Some(path) => path,
            None => {
                return Err(SourceError::Read {
                    path: self.primary.clone(),
                    reason: primary_reason,
                })
            }
        };

        Logger::warn(
            "SOURCE_FALLBACK",
            &[
                ("primary", &self.primary.display().to_string()),
                ("fallback", &fallback.display().to_string()),
            ],
        );

        match fs::read_to_string(fallback) {
            Ok(text) => Ok(text),
            Err(e) => Err(SourceError::AllSourcesFailed {
                primary: self.primary.clone(),
                primary_reason,
                fallback: fallback.clone(),
                fallback_reason: e.to_string(),
            }),
        }
    }
}
