//! Error handling for the countryvis-rs application
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application.

use thiserror::Error;

/// Main error type for countryvis-rs operations
#[derive(Error, Debug)]
pub enum CountryVisError {
    /// Errors related to dataset loading and validation
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Errors from the CSV parser
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CountryVisError>,
    },
}

impl CountryVisError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CountryVisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for countryvis-rs operations
pub type Result<T> = std::result::Result<T, CountryVisError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
