//! Standalone HTML rendering of a cost report
//!
//! The document is self-contained (inline CSS, no scripts) so it can be
//! attached to a ticket or dropped into a blog draft as-is.

use std::fmt::Write as _;

use crate::{
    decision::RecommendationKind,
    estimator::CostEstimator,
    formatter::REPORT_TITLE,
    rates::RateTable,
    report::{CostReport, Savings},
};

const STYLE: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
               margin: 40px; line-height: 1.6; }
        h1 { color: #232f3e; }
        h2 { color: #545b64; border-bottom: 2px solid #ec7211; padding-bottom: 5px; }
        table { border-collapse: collapse; width: 100%; margin: 20px 0; }
        th, td { border: 1px solid #ddd; padding: 12px; text-align: right; }
        th { background-color: #232f3e; color: white; }
        tr:nth-child(even) { background-color: #f9f9f9; }
        tr:hover { background-color: #fff3e0; }
        .scenario { text-align: left; font-weight: bold; }
        .best { background-color: #d4edda !important; }
        .metric { font-size: 24px; font-weight: bold; color: #232f3e; }
        .metric-label { font-size: 14px; color: #545b64; }
        .metrics-row { display: flex; gap: 40px; margin: 20px 0; }
        .metric-box { padding: 20px; background: #f5f5f5; border-radius: 8px; text-align: center; }
        .recommendation { background: #e8f4fd; padding: 15px; border-left: 4px solid #0073bb; margin: 20px 0; }
"#;

/// Escape text for element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn metric_box(html: &mut String, value: &str, label: &str) {
    let _ = write!(
        html,
        r#"
        <div class="metric-box">
            <div class="metric">{value}</div>
            <div class="metric-label">{label}</div>
        </div>"#
    );
}

/// Render `report` as an HTML document.
///
/// `estimator` and `rates` feed the methodology section so the page states
/// exactly which prices produced its numbers.
pub fn render_html(report: &CostReport, estimator: &CostEstimator, rates: &RateTable) -> String {
    let optimal = report.optimal();
    let best_ratio = report
        .recommendation(RecommendationKind::BestCompression)
        .map(|rec| rec.record.compression_ratio)
        .unwrap_or(optimal.compression_ratio);
    let max_savings = match report.max_savings() {
        Savings::Percent(pct) => format!("{:.1}%", pct),
        other => other.to_string(),
    };

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{STYLE}    </style>
</head>
<body>
    <h1>{title}</h1>
    <p>Generated: {generated}</p>

    <h2>Key Metrics</h2>
    <div class="metrics-row">"#,
        title = REPORT_TITLE,
        generated = report.generated_at.format("%Y-%m-%d %H:%M:%S"),
    );

    metric_box(&mut html, &report.scenario_count().to_string(), "Scenarios Tested");
    metric_box(&mut html, &format!("{:.1}x", best_ratio), "Best Compression");
    metric_box(&mut html, &max_savings, "Max Savings");
    metric_box(&mut html, &format!("${:.0}", optimal.total_cost), "Optimal Cost");

    let _ = write!(
        html,
        r#"
    </div>

    <h2>Cost Comparison ({days}-day retention)</h2>
    <table>
        <tr>
            <th>Scenario</th>
            <th>Compute Cost</th>
            <th>Storage Cost</th>
            <th>Total Cost</th>
            <th>vs Baseline</th>
        </tr>"#,
        days = report.retention_days
    );

    for entry in &report.ranking {
        let c = &entry.record;
        let row_class = if entry.is_optimal { "best" } else { "" };
        let _ = write!(
            html,
            r#"
        <tr class="{row_class}">
            <td class="scenario">{scenario}</td>
            <td>${compute:.2}</td>
            <td>${storage:.2}</td>
            <td>${total:.2}</td>
            <td>{savings}</td>
        </tr>"#,
            scenario = escape_html(&c.scenario),
            compute = c.compute_cost,
            storage = c.storage_cost,
            total = c.total_cost,
            savings = entry.savings,
        );
    }

    html.push_str(
        r#"
    </table>

    <h2>Compression Analysis</h2>
    <table>
        <tr>
            <th>Scenario</th>
            <th>Compression Ratio</th>
            <th>Logical Size (GB)</th>
            <th>Physical Size (GB)</th>
            <th>CPU Overhead</th>
        </tr>"#,
    );

    for c in &report.records {
        let _ = write!(
            html,
            r#"
        <tr>
            <td class="scenario">{scenario}</td>
            <td>{ratio:.1}x</td>
            <td>{output:.1}</td>
            <td>{physical:.1}</td>
            <td>{overhead:.1}%</td>
        </tr>"#,
            scenario = escape_html(&c.scenario),
            ratio = c.compression_ratio,
            output = c.output_gb,
            physical = c.physical_gb,
            overhead = c.cpu_overhead_pct,
        );
    }

    html.push_str(
        r#"
    </table>

    <h2>Recommendations</h2>
    <div class="recommendation">"#,
    );
    write_recommendations(&mut html, report);
    html.push_str("\n    </div>\n");

    write_methodology(&mut html, report, estimator, rates);

    html.push_str("</body>\n</html>\n");
    html
}

fn write_recommendations(html: &mut String, report: &CostReport) {
    for rec in &report.recommendations {
        let c = &rec.record;
        let scenario = escape_html(&c.scenario);
        let _ = match rec.kind {
            RecommendationKind::OptimalForCost => write!(
                html,
                "\n        <p><strong>Optimal for most workloads:</strong> {} (${:.2} total, {:.1}x compression)</p>",
                scenario, c.total_cost, c.compression_ratio
            ),
            RecommendationKind::BestCompression => write!(
                html,
                "\n        <p><strong>Best compression:</strong> {} provides {:.1}x compression with {:.0}% CPU overhead.</p>",
                scenario, c.compression_ratio, c.cpu_overhead_pct
            ),
            RecommendationKind::BestZeroOverhead => write!(
                html,
                "\n        <p><strong>For zero CPU overhead:</strong> {} provides {:.1}x compression with no impact on compute time.</p>",
                scenario, c.compression_ratio
            ),
        };
    }
}

fn write_methodology(html: &mut String, report: &CostReport, estimator: &CostEstimator, rates: &RateTable) {
    let _ = write!(
        html,
        r#"
    <h2>Methodology</h2>
    <p>Compute priced on {instance} at ${compute:.2} per node-hour, with compression CPU overhead
    applied as a proportional increase in runtime.</p>
    <p>Storage priced on {tier} at ${storage:.3} per GB-month (${storage_hourly:.6} per GB-hour)
    for {days} days of retention. The ${throughput:.3} per GB-month throughput surcharge
    (${throughput_hourly:.6} per GB-hour) is not included in the totals.</p>
"#,
        instance = estimator.instance_type(),
        compute = estimator.compute_rate(),
        tier = rates.storage_tier(),
        storage = rates.storage_rate_per_gb_month(),
        storage_hourly = rates.storage_rate_per_gb_hour(),
        days = report.retention_days,
        throughput = rates.throughput_rate_per_gb_month(),
        throughput_hourly = rates.throughput_rate_per_gb_hour(),
    );
}
