//! # Compression Cost Report
//!
//! Turns per-scenario benchmark results from compressed WRF output runs into a
//! cost comparison: compute cost inflated by compression CPU overhead, storage
//! cost shrunk by the compression ratio, and a ranked report with
//! recommendations.
//!
//! ## Pipeline
//!
//! - **Load**: [`data_loader`] reads one result file per scenario directory
//! - **Estimate**: [`estimator::CostEstimator`] prices each raw record using
//!   the [`rates`] and [`profiles`] tables
//! - **Report**: [`report::build_report`] anchors savings on the baseline and
//!   ranks scenarios; [`decision`] picks the recommendations
//! - **Render**: [`formatter`] (text, JSON), [`html`] and [`charts`]

pub mod error;
pub mod types;
pub mod rates;
pub mod profiles;
pub mod estimator;
pub mod decision;
pub mod report;
pub mod formatter;
pub mod html;
pub mod charts;
pub mod data_loader;
pub mod config;
pub mod cli_error;

// Re-export commonly used types
pub use error::{ReportError, Result};
pub use types::{
    DerivedCostRecord, OutputFormat, RawBenchmarkRecord,
    BASELINE_SCENARIO, BYTES_PER_GB, DEFAULT_NODES, DEFAULT_RETENTION_DAYS,
};
pub use rates::{RateTable, DEFAULT_INSTANCE_TYPE};
pub use profiles::{CompressionProfile, ProfileTable};
pub use estimator::CostEstimator;
pub use decision::{recommend, Recommendation, RecommendationKind};
pub use report::{build_report, resolve_anchor, CostReport, RankedEntry, Savings};
pub use formatter::{format_json, format_text, save_report};
pub use html::render_html;
pub use charts::write_charts;
pub use data_loader::{load_record, load_results, LoadedResults};
pub use config::ReportConfig;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        error::{ReportError, Result},
        types::{DerivedCostRecord, OutputFormat, RawBenchmarkRecord, DEFAULT_RETENTION_DAYS},
        rates::RateTable,
        profiles::{CompressionProfile, ProfileTable},
        estimator::CostEstimator,
        decision::{Recommendation, RecommendationKind},
        report::{build_report, CostReport, Savings},
        formatter::{format_json, format_text, save_report},
        html::render_html,
        charts::write_charts,
        data_loader::{load_results, LoadedResults},
        config::ReportConfig,
    };
}
