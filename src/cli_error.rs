//! CLI Error Handling
//!
//! Errors surfaced by the `compression-report` binary, each with a remediation
//! hint and a stable process exit code.

use std::path::PathBuf;
use thiserror::Error;
use console::style;

use crate::error::ReportError;

/// CLI-specific errors with actionable remediation guidance
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        remediation: String,
        config_path: Option<PathBuf>,
    },

    #[error("Results directory not found: {path}")]
    ResultsNotFound {
        path: PathBuf,
        remediation: String,
    },

    #[error("No benchmark results found in {path}")]
    NoResults {
        path: PathBuf,
        skipped: Vec<PathBuf>,
        remediation: String,
    },

    #[error("Report generation failed: {reason}")]
    ReportFailed {
        reason: String,
        remediation: String,
    },

    #[error("Permission denied: {path}")]
    PermissionDenied {
        path: PathBuf,
        operation: String,
        remediation: String,
    },

    #[error("Validation error: {field} - {reason}")]
    ValidationError {
        field: String,
        reason: String,
        provided_value: String,
        valid_range: String,
        remediation: String,
    },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        context: String,
        remediation: String,
    },
}

impl CliError {
    /// Create a configuration error with remediation guidance
    pub fn configuration_error(message: &str, config_path: Option<PathBuf>) -> Self {
        let remediation = match config_path.as_ref() {
            Some(path) => format!(
                "Check the configuration file at '{}' or remove it to use the defaults",
                path.display()
            ),
            None => "Pass a configuration file with --config or fix the default one".to_string(),
        };

        Self::Configuration {
            message: message.to_string(),
            remediation,
            config_path,
        }
    }

    /// Create a results-not-found error
    pub fn results_not_found(path: PathBuf) -> Self {
        Self::ResultsNotFound {
            remediation: "Point --results-dir at the directory holding one subdirectory per scenario".to_string(),
            path,
        }
    }

    /// Create an error for a results directory without usable result files
    pub fn no_results(path: PathBuf, skipped: Vec<PathBuf>) -> Self {
        let remediation = if skipped.is_empty() {
            "Each scenario subdirectory needs a metrics.json or summary.json file".to_string()
        } else {
            "Result files were found but could not be parsed; check that they contain a JSON object".to_string()
        };

        Self::NoResults {
            path,
            skipped,
            remediation,
        }
    }

    /// Create a report failure with diagnostic guidance
    pub fn report_failed(reason: &str) -> Self {
        let remediation = match reason {
            r if r.contains("I/O") => "Check that the output location exists and is writable".to_string(),
            r if r.contains("Serialization") => "Run with --verbose and report the failing record".to_string(),
            _ => "Run with --verbose for detailed error information".to_string(),
        };

        Self::ReportFailed {
            reason: reason.to_string(),
            remediation,
        }
    }

    /// Create a validation error for CLI arguments
    pub fn validation_error(field: &str, reason: &str, provided_value: &str, valid_range: &str) -> Self {
        let remediation = format!(
            "Provide a valid value for '{}' in range {}. Use --help for more information",
            field, valid_range
        );

        Self::ValidationError {
            field: field.to_string(),
            reason: reason.to_string(),
            provided_value: provided_value.to_string(),
            valid_range: valid_range.to_string(),
            remediation,
        }
    }

    /// Print a formatted error message with remediation guidance
    pub fn print_error(&self) {
        eprintln!("{} {}", style("Error:").red().bold(), self);

        match self {
            Self::Configuration { remediation, config_path, .. } => {
                eprintln!("{} {}", style("Fix:").yellow().bold(), remediation);
                if let Some(path) = config_path {
                    eprintln!("{} {}", style("Config:").blue(), path.display());
                }
            }

            Self::ResultsNotFound { remediation, .. } => {
                eprintln!("{} {}", style("Fix:").yellow().bold(), remediation);
            }

            Self::NoResults { remediation, skipped, .. } => {
                eprintln!("{} {}", style("Fix:").yellow().bold(), remediation);
                if !skipped.is_empty() {
                    eprintln!("{} {}", style("Skipped:").blue(),
                        skipped.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "));
                }
            }

            Self::ReportFailed { remediation, .. } => {
                eprintln!("{} {}", style("Fix:").yellow().bold(), remediation);
            }

            Self::PermissionDenied { remediation, operation, .. } => {
                eprintln!("{} {}", style("Fix:").yellow().bold(), remediation);
                eprintln!("{} {}", style("Operation:").blue(), operation);
            }

            Self::ValidationError { remediation, valid_range, .. } => {
                eprintln!("{} {}", style("Fix:").yellow().bold(), remediation);
                eprintln!("{} {}", style("Valid:").blue(), valid_range);
            }

            Self::InternalError { remediation, context, .. } => {
                eprintln!("{} {}", style("Fix:").yellow().bold(), remediation);
                eprintln!("{} {}", style("Context:").blue(), context);
                eprintln!("{} Please report this issue with the above context", style("Note:").cyan());
            }
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration { .. } => 1,
            Self::ResultsNotFound { .. } => 2,
            Self::NoResults { .. } => 3,
            Self::ReportFailed { .. } => 4,
            Self::PermissionDenied { .. } => 10,
            Self::ValidationError { .. } => 12,
            Self::InternalError { .. } => 14,
        }
    }
}

impl From<ReportError> for CliError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::ResultsDirNotFound { path } | ReportError::NotADirectory { path } => {
                Self::results_not_found(PathBuf::from(path))
            }
            ReportError::ConfigNotFound { ref path } | ReportError::ConfigParse { ref path, .. } => {
                Self::configuration_error(&err.to_string(), Some(PathBuf::from(path)))
            }
            ReportError::InvalidConfiguration { .. } | ReportError::UnknownInstanceType { .. } => {
                Self::configuration_error(&err.to_string(), None)
            }
            other => Self::report_failed(&other.to_string()),
        }
    }
}

/// Helper trait for converting standard errors to CLI errors with context
pub trait CliErrorExt<T> {
    fn with_cli_context(self, context: &str) -> Result<T, CliError>;
}

impl<T, E> CliErrorExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_cli_context(self, context: &str) -> Result<T, CliError> {
        self.map_err(|e| CliError::InternalError {
            message: e.to_string(),
            context: context.to_string(),
            remediation: "Run with --verbose for more details or report this issue".to_string(),
        })
    }
}

/// Validation helpers for CLI arguments
pub mod validation {
    use super::CliError;
    use crate::config::MAX_RETENTION_DAYS;
    use crate::rates::RateTable;
    use std::path::Path;

    /// Validate retention period (1-3650 days)
    pub fn validate_retention_days(days: u32) -> Result<(), CliError> {
        if days < 1 || days > MAX_RETENTION_DAYS {
            Err(CliError::validation_error(
                "retention-days",
                "value out of range",
                &days.to_string(),
                "1-3650 days"
            ))
        } else {
            Ok(())
        }
    }

    /// Validate the instance type has a price
    pub fn validate_instance_type(instance_type: &str) -> Result<(), CliError> {
        let rates = RateTable::default();
        if rates.compute_rate(instance_type).is_some() {
            return Ok(());
        }
        Err(CliError::validation_error(
            "instance-type",
            "no price for instance type",
            instance_type,
            &rates.instance_types().collect::<Vec<_>>().join(", ")
        ))
    }

    /// Validate output directory is writable
    pub fn validate_output_path(path: &Path) -> Result<(), CliError> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => return Ok(()), // Current directory
        };

        if !parent.exists() {
            return Err(CliError::PermissionDenied {
                path: path.to_path_buf(),
                operation: "write report".to_string(),
                remediation: format!("Create the output directory '{}' first", parent.display()),
            });
        }

        // Try to create a temporary file to test writability
        match tempfile::NamedTempFile::new_in(parent) {
            Ok(_) => Ok(()),
            Err(e) => Err(CliError::PermissionDenied {
                path: parent.to_path_buf(),
                operation: "write report".to_string(),
                remediation: format!("Check directory permissions: {}", e),
            }),
        }
    }
}
