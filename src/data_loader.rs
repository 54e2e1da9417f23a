use crate::error::{ReportError, Result};
use crate::types::RawBenchmarkRecord;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Preferred result file in each scenario directory
pub const METRICS_FILE: &str = "metrics.json";

/// Fallback result file, written by older harness versions
pub const SUMMARY_FILE: &str = "summary.json";

/// Benchmark records found under a results directory
#[derive(Debug, Clone, Default)]
pub struct LoadedResults {
    pub records: Vec<RawBenchmarkRecord>,
    pub results_dir: PathBuf,
    /// Result files that existed but could not be used
    pub skipped: Vec<PathBuf>,
}

impl LoadedResults {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Load every scenario's result file from `results_dir`
///
/// Each immediate subdirectory is one scenario run and contributes its
/// `metrics.json`, or `summary.json` when there is no metrics file.
/// Subdirectories are visited in lexical order so the input order (and
/// therefore tie-breaking in the report) is reproducible.
///
/// Unparseable result files are skipped with a warning; only a missing or
/// unreadable results directory is an error.
pub fn load_results(results_dir: &Path) -> Result<LoadedResults> {
    if !results_dir.exists() {
        return Err(ReportError::ResultsDirNotFound {
            path: results_dir.display().to_string(),
        });
    }

    if !results_dir.is_dir() {
        return Err(ReportError::NotADirectory {
            path: results_dir.display().to_string(),
        });
    }

    let mut loaded = LoadedResults {
        results_dir: results_dir.to_path_buf(),
        ..Default::default()
    };

    for scenario_dir in scenario_dirs(results_dir)? {
        let Some(result_file) = result_file(&scenario_dir) else {
            debug!("No result file in {}", scenario_dir.display());
            continue;
        };

        match load_record(&result_file) {
            Ok(record) => loaded.records.push(record.with_source_dir(&scenario_dir)),
            Err(e) => {
                // Log warning but continue with other scenarios
                warn!("Skipping {}: {}", result_file.display(), e);
                loaded.skipped.push(result_file);
            }
        }
    }

    info!(
        "Loaded {} benchmark results from {} ({} skipped)",
        loaded.records.len(),
        results_dir.display(),
        loaded.skipped.len()
    );

    Ok(loaded)
}

/// Immediate, non-hidden subdirectories in lexical order
fn scenario_dirs(results_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(results_dir).map_err(|e| {
        ReportError::io_error(format!("read directory {}", results_dir.display()), e)
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            ReportError::io_error(format!("read entry in {}", results_dir.display()), e)
        })?;
        let path = entry.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or(false, |name| name.starts_with('.'));
        if path.is_dir() && !hidden {
            dirs.push(path);
        }
    }

    dirs.sort();
    Ok(dirs)
}

fn result_file(scenario_dir: &Path) -> Option<PathBuf> {
    [METRICS_FILE, SUMMARY_FILE]
        .iter()
        .map(|name| scenario_dir.join(name))
        .find(|path| path.is_file())
}

/// Parse one result file into a record
pub fn load_record(path: &Path) -> Result<RawBenchmarkRecord> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ReportError::io_error(format!("read {}", path.display()), e))?;

    let value: serde_json::Value =
        serde_json::from_str(&contents).map_err(|e| ReportError::RecordParse {
            path: path.display().to_string(),
            source: e,
        })?;

    RawBenchmarkRecord::from_value(value).ok_or_else(|| ReportError::RecordNotObject {
        path: path.display().to_string(),
    })
}
