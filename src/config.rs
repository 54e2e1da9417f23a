//! Configuration file support
//!
//! The file is optional. Values it sets are defaults that command-line flags
//! override.
//!
//! ```toml
//! [analysis]
//! retention_days = 30
//! instance_type = "hpc7a.96xlarge"
//!
//! [output]
//! format = "text"
//! charts = false
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    error::{ReportError, Result},
    rates::{RateTable, DEFAULT_INSTANCE_TYPE},
    types::{OutputFormat, DEFAULT_RETENTION_DAYS},
};

/// Directory under the platform config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "compression-report";

/// Longest retention accepted, ten years
pub const MAX_RETENTION_DAYS: u32 = 3650;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Days the written output stays on the storage tier
    pub retention_days: u32,
    /// Compute instance type used to price node-hours
    pub instance_type: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            retention_days: DEFAULT_RETENTION_DAYS,
            instance_type: DEFAULT_INSTANCE_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Also write chart pages next to the results
    pub charts: bool,
}

impl ReportConfig {
    /// Platform default location of the configuration file
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join("config.toml")
    }

    /// Load from `path`, or from [`default_path`](Self::default_path) when
    /// `path` is `None`. A missing default file yields the defaults; a
    /// missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !config_path.exists() {
            if explicit {
                return Err(ReportError::ConfigNotFound {
                    path: config_path.display().to_string(),
                });
            }
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(&config_path).map_err(|e| {
            ReportError::io_error(format!("read config file {}", config_path.display()), e)
        })?;
        let config = Self::from_toml(&config_str).map_err(|e| match e {
            ReportError::ConfigParse { source, .. } => ReportError::ConfigParse {
                path: config_path.display().to_string(),
                source,
            },
            other => other,
        })?;

        debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| ReportError::ConfigParse {
            path: "<inline>".to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let days = self.analysis.retention_days;
        if days == 0 || days > MAX_RETENTION_DAYS {
            return Err(ReportError::InvalidConfiguration {
                parameter: "analysis.retention_days".to_string(),
                value: days.to_string(),
                reason: format!("must be between 1 and {}", MAX_RETENTION_DAYS),
            });
        }

        let rates = RateTable::default();
        if rates.compute_rate(&self.analysis.instance_type).is_none() {
            return Err(ReportError::UnknownInstanceType {
                name: self.analysis.instance_type.clone(),
                known: rates.instance_types().collect::<Vec<_>>().join(", "),
            });
        }

        Ok(())
    }
}
