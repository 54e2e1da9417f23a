//! Error hierarchy for the cost report library
//!
//! Estimation and report shaping degrade gracefully on partial input, so the
//! variants here cover the structural failures only: result loading, rendering
//! I/O, configuration, and an empty result set.

use std::io;
use thiserror::Error;

/// Every failure the library surfaces to its callers
#[derive(Error, Debug)]
pub enum ReportError {
    // === I/O and File System Errors ===
    #[error("I/O operation failed: {operation} - {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },

    #[error("Results directory not found: {path}")]
    ResultsDirNotFound { path: String },

    #[error("Results path is not a directory: {path}")]
    NotADirectory { path: String },

    // === Parsing and Serialization Errors ===
    #[error("Failed to parse benchmark record {path}: {source}")]
    RecordParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Benchmark record {path} is not a JSON object")]
    RecordNotObject { path: String },

    #[error("Serialization failed: {context} - {source}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    // === Configuration Errors ===
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {parameter} = {value} (reason: {reason})")]
    InvalidConfiguration {
        parameter: String,
        value: String,
        reason: String,
    },

    #[error("Unknown instance type: {name} (known: {known})")]
    UnknownInstanceType { name: String, known: String },

    // === Report Errors ===
    #[error("No benchmark results to report on")]
    EmptyInput,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// Create an I/O error with operation context
    pub fn io_error(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization_error(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io { .. } | Self::ResultsDirNotFound { .. } | Self::NotADirectory { .. } => "io",

            Self::RecordParse { .. } | Self::RecordNotObject { .. } | Self::Serialization { .. } => {
                "format"
            }

            Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::InvalidConfiguration { .. }
            | Self::UnknownInstanceType { .. } => "configuration",

            Self::EmptyInput => "input",
        }
    }
}
