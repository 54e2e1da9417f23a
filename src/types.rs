//! Core data types and constants for the cost report
//!
//! Raw benchmark records are kept as loosely-typed JSON objects because the
//! result files were written by several generations of the benchmark harness.
//! Field access goes through fixed alias lists and falls back to documented
//! defaults, so a partial record never fails to load.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};

/// Bytes per gigabyte used for every size conversion (binary GB)
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Scenario identifier used when a record does not name one
pub const BASELINE_SCENARIO: &str = "baseline";

/// Node count assumed when a record does not report one
pub const DEFAULT_NODES: f64 = 10.0;

/// Storage retention used when the caller does not choose one
pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// Accepted field names for the node count, in lookup order
pub const NODES_FIELDS: &[&str] = &["nodes", "nodes_used"];

/// Accepted field names for the wall-clock runtime, in lookup order
pub const RUNTIME_FIELDS: &[&str] = &["runtime_seconds", "total_runtime_seconds"];

/// Accepted field names for the logical output size, in lookup order
pub const OUTPUT_BYTES_FIELDS: &[&str] = &["output_size_bytes", "total_output_bytes"];

/// One benchmark result as written by the harness
///
/// The record is read-only input: accessors never mutate the underlying map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawBenchmarkRecord {
    fields: Map<String, Value>,
    #[serde(skip)]
    source_dir: Option<PathBuf>,
}

impl RawBenchmarkRecord {
    /// Wrap an already-parsed JSON object
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            source_dir: None,
        }
    }

    /// Build a record from any JSON value; only objects qualify
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::new(fields)),
            _ => None,
        }
    }

    /// Attach the directory the record was loaded from
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    /// Directory the record was loaded from, if it came from disk
    pub fn source_dir(&self) -> Option<&Path> {
        self.source_dir.as_deref()
    }

    /// Raw field access
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Scenario identifier, `"baseline"` when absent
    pub fn scenario(&self) -> &str {
        self.fields
            .get("scenario")
            .and_then(Value::as_str)
            .unwrap_or(BASELINE_SCENARIO)
    }

    /// Number of compute nodes, [`DEFAULT_NODES`] when absent
    pub fn nodes(&self) -> f64 {
        self.first_number(NODES_FIELDS).unwrap_or(DEFAULT_NODES)
    }

    /// Wall-clock runtime in seconds, zero when absent
    pub fn runtime_seconds(&self) -> f64 {
        self.first_number(RUNTIME_FIELDS).unwrap_or(0.0)
    }

    /// Total logical bytes written, zero when absent
    pub fn output_bytes(&self) -> f64 {
        self.first_number(OUTPUT_BYTES_FIELDS).unwrap_or(0.0)
    }

    /// First alias holding a JSON number; non-numeric values count as absent
    fn first_number(&self, aliases: &[&str]) -> Option<f64> {
        aliases
            .iter()
            .find_map(|name| self.fields.get(*name).and_then(Value::as_f64))
    }
}

impl From<Map<String, Value>> for RawBenchmarkRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Per-scenario cost and size figures derived from one raw record
///
/// Values are rounded once when the record is built: currency, sizes and
/// hours to two decimals, the overhead percentage to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedCostRecord {
    pub scenario: String,
    pub compute_cost: f64,
    pub storage_cost: f64,
    pub total_cost: f64,
    pub compression_ratio: f64,
    pub output_gb: f64,
    pub physical_gb: f64,
    pub runtime_hours: f64,
    pub cpu_overhead_pct: f64,
}

impl DerivedCostRecord {
    /// True when compression adds no compute time for this scenario
    pub fn is_zero_overhead(&self) -> bool {
        self.cpu_overhead_pct == 0.0
    }
}

impl fmt::Display for DerivedCostRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (${:.2} total, {:.1}x compression)",
            self.scenario, self.total_cost, self.compression_ratio
        )
    }
}

/// Artifact produced by the report command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl OutputFormat {
    /// File name used when no explicit output path is given
    pub fn default_file_name(self) -> Option<&'static str> {
        match self {
            Self::Text => None,
            Self::Html => Some("report.html"),
            Self::Json => Some("analysis.json"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Round half away from zero to `places` decimals.
///
/// Values that round to zero come back as `+0.0`, never `-0.0`.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
