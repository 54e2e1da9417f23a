//! Interactive chart generation
//!
//! Charts are written as standalone plotly HTML pages next to the results
//! they describe:
//! - `cost_comparison.html`: stacked compute/storage cost per scenario
//! - `compression_ratio.html`: compression ratio colored by CPU overhead

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use plotly::{
    common::Marker,
    layout::{Axis, BarMode, Layout},
    Bar, Plot,
};

use crate::{
    error::{ReportError, Result},
    report::CostReport,
    types::DerivedCostRecord,
};

pub const COST_CHART_FILE: &str = "cost_comparison.html";
pub const RATIO_CHART_FILE: &str = "compression_ratio.html";

const COMPUTE_COLOR: &str = "#232f3e";
const STORAGE_COLOR: &str = "#ec7211";
const NO_OVERHEAD_COLOR: &str = "#28a745";
const LOW_OVERHEAD_COLOR: &str = "#ffc107";
const HIGH_OVERHEAD_COLOR: &str = "#dc3545";

/// Overhead percentage below which a scenario counts as low overhead
pub const LOW_OVERHEAD_PCT: f64 = 20.0;

/// Bar color for a scenario's CPU overhead band
pub fn overhead_color(cpu_overhead_pct: f64) -> &'static str {
    if cpu_overhead_pct == 0.0 {
        NO_OVERHEAD_COLOR
    } else if cpu_overhead_pct < LOW_OVERHEAD_PCT {
        LOW_OVERHEAD_COLOR
    } else {
        HIGH_OVERHEAD_COLOR
    }
}

/// Stacked compute + storage bars, cheapest scenario first
pub fn cost_chart(report: &CostReport) -> Plot {
    let ranked: Vec<&DerivedCostRecord> = report.ranking.iter().map(|e| &e.record).collect();
    let scenarios: Vec<String> = ranked.iter().map(|c| c.scenario.clone()).collect();
    let compute: Vec<f64> = ranked.iter().map(|c| c.compute_cost).collect();
    let storage: Vec<f64> = ranked.iter().map(|c| c.storage_cost).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Bar::new(scenarios.clone(), compute)
            .name("Compute")
            .marker(Marker::new().color(COMPUTE_COLOR)),
    );
    plot.add_trace(
        Bar::new(scenarios, storage)
            .name("Storage")
            .marker(Marker::new().color(STORAGE_COLOR)),
    );
    plot.set_layout(
        Layout::new()
            .title(
                format!(
                    "Total Cost by Compression Strategy ({}-day retention)",
                    report.retention_days
                )
                .as_str(),
            )
            .bar_mode(BarMode::Stack)
            .x_axis(Axis::new().title("Compression Scenario"))
            .y_axis(Axis::new().title("Cost ($)")),
    );
    plot
}

/// Compression ratio bars in ranking order, colored by overhead band
pub fn ratio_chart(report: &CostReport) -> Plot {
    let ranked: Vec<&DerivedCostRecord> = report.ranking.iter().map(|e| &e.record).collect();
    let scenarios: Vec<String> = ranked.iter().map(|c| c.scenario.clone()).collect();
    let ratios: Vec<f64> = ranked.iter().map(|c| c.compression_ratio).collect();
    let colors: Vec<&str> = ranked.iter().map(|c| overhead_color(c.cpu_overhead_pct)).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Bar::new(scenarios, ratios)
            .name("Compression ratio (green: 0% CPU overhead, amber: <20%, red: >=20%)")
            .marker(Marker::new().color_array(colors)),
    );
    plot.set_layout(
        Layout::new()
            .title("Compression Ratio by Strategy")
            .x_axis(Axis::new().title("Compression Scenario"))
            .y_axis(Axis::new().title("Compression Ratio"))
            .show_legend(true),
    );
    plot
}

/// Write both charts into `output_dir`, returning the written paths
pub fn write_charts(report: &CostReport, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let charts = [
        (COST_CHART_FILE, cost_chart(report)),
        (RATIO_CHART_FILE, ratio_chart(report)),
    ];

    let mut written = Vec::with_capacity(charts.len());
    for (file_name, plot) in charts {
        let path = output_dir.join(file_name);
        fs::write(&path, plot.to_html())
            .map_err(|e| ReportError::io_error(format!("write chart {}", path.display()), e))?;
        written.push(path);
    }

    info!("Charts saved to: {}", output_dir.display());
    Ok(written)
}
