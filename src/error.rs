//! Error types for rqlens.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for rqlens operations.
#[derive(Error, Debug)]
pub enum RqlensError {
    /// Result-set errors (unreadable file, malformed SPARQL JSON, etc.)
    #[error("Results error: {0}")]
    Results(String),

    /// Example-query errors (missing queries directory, unreadable file, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration errors (invalid config file, missing required fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RqlensError {
    /// Creates a results error with the given message.
    pub fn results(msg: impl Into<String>) -> Self {
        Self::Results(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Results(_) => "Results Error",
            Self::Query(_) => "Query Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using RqlensError.
pub type Result<T> = std::result::Result<T, RqlensError>;
