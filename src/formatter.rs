// Formatter for cost reports: fixed-width text and JSON
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ReportError, Result};
use crate::report::CostReport;
use crate::types::DerivedCostRecord;

/// Width of the `=` and `-` rule lines
pub const RULE_WIDTH: usize = 70;

pub const REPORT_TITLE: &str = "WRF Compression Benchmark Results";

fn section(lines: &mut Vec<String>, title: String) {
    lines.push(String::new());
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(title);
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(String::new());
}

pub fn format_text(report: &CostReport) -> String {
    let mut lines = vec![
        "=".repeat(RULE_WIDTH),
        REPORT_TITLE.to_string(),
        "=".repeat(RULE_WIDTH),
        String::new(),
        format!("Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S")),
        format!("Scenarios tested: {}", report.scenario_count()),
    ];

    section(
        &mut lines,
        format!("Cost Comparison ({}-day storage retention)", report.retention_days),
    );
    lines.push(format!(
        "{:<20} {:>10} {:>10} {:>10} {:>10}",
        "Scenario", "Compute", "Storage", "Total", "Savings"
    ));
    lines.push(format!(
        "{} {} {} {} {}",
        "_".repeat(20),
        "_".repeat(10),
        "_".repeat(10),
        "_".repeat(10),
        "_".repeat(10)
    ));
    for entry in &report.ranking {
        let c = &entry.record;
        lines.push(format!(
            "{:<20} ${:>9.2} ${:>9.2} ${:>9.2} {:>10}",
            c.scenario,
            c.compute_cost,
            c.storage_cost,
            c.total_cost,
            entry.savings.to_string()
        ));
    }

    section(&mut lines, "Compression Analysis".to_string());
    lines.push(format!(
        "{:<20} {:>8} {:>12} {:>12} {:>8}",
        "Scenario", "Ratio", "Output GB", "Physical GB", "CPU OH"
    ));
    lines.push(format!(
        "{} {} {} {} {}",
        "_".repeat(20),
        "_".repeat(8),
        "_".repeat(12),
        "_".repeat(12),
        "_".repeat(8)
    ));
    for c in &report.records {
        lines.push(format!(
            "{:<20} {:>7.1}x {:>11.1} {:>11.1} {:>7.1}%",
            c.scenario, c.compression_ratio, c.output_gb, c.physical_gb, c.cpu_overhead_pct
        ));
    }

    section(&mut lines, "Recommendations".to_string());
    for rec in &report.recommendations {
        lines.push(rec.summary());
    }

    lines.push(String::new());
    lines.push("=".repeat(RULE_WIDTH));

    lines.join("\n")
}

/// Derived records as a pretty-printed JSON array
pub fn format_json(records: &[DerivedCostRecord]) -> Result<String> {
    serde_json::to_string_pretty(records)
        .map_err(|e| ReportError::serialization_error("derived cost records", e))
}

pub fn save_report(path: &Path, report: &str) -> Result<()> {
    let mut file = File::create(path)
        .map_err(|e| ReportError::io_error(format!("create {}", path.display()), e))?;
    file.write_all(report.as_bytes())
        .map_err(|e| ReportError::io_error(format!("write {}", path.display()), e))?;
    Ok(())
}
