//! Cross-scenario comparison built from derived cost records
//!
//! The report anchors every savings figure on the baseline run, ranks the
//! scenarios by total cost and attaches the decision engine's
//! recommendations. It carries everything a renderer needs, so renderers do
//! no arithmetic of their own.

use chrono::{DateTime, Local};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    decision::{recommend, Recommendation, RecommendationKind},
    error::{ReportError, Result},
    types::{DerivedCostRecord, BASELINE_SCENARIO},
};

/// Savings of one scenario relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum Savings {
    /// The row is the anchor itself
    NotApplicable,
    /// The anchor costs nothing, so no percentage exists
    Undefined,
    /// Signed percentage; positive means cheaper than the anchor
    Percent(f64),
}

impl Savings {
    fn relative_to(anchor_total: f64, total: f64) -> Self {
        if anchor_total == 0.0 {
            Self::Undefined
        } else {
            Self::Percent((anchor_total - total) / anchor_total * 100.0)
        }
    }

    pub fn percent(self) -> Option<f64> {
        match self {
            Self::Percent(pct) => Some(pct),
            Self::NotApplicable | Self::Undefined => None,
        }
    }
}

impl fmt::Display for Savings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => write!(f, "-"),
            Self::Undefined => write!(f, "n/a"),
            Self::Percent(pct) => write!(f, "{:+.1}%", pct),
        }
    }
}

/// One row of the cost ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub record: DerivedCostRecord,
    /// Position of the record in the input list
    pub input_index: usize,
    pub savings: Savings,
    pub is_anchor: bool,
    pub is_optimal: bool,
}

/// Complete comparison across all scenarios of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub generated_at: DateTime<Local>,
    pub retention_days: u32,
    /// Derived records in input order
    pub records: Vec<DerivedCostRecord>,
    /// Index into `records` of the savings anchor
    pub anchor_index: usize,
    /// Records sorted ascending by total cost, ties in input order
    pub ranking: Vec<RankedEntry>,
    pub recommendations: Vec<Recommendation>,
}

impl CostReport {
    pub fn anchor(&self) -> &DerivedCostRecord {
        &self.records[self.anchor_index]
    }

    pub fn scenario_count(&self) -> usize {
        self.records.len()
    }

    pub fn recommendation(&self, kind: RecommendationKind) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.kind == kind)
    }

    /// Cheapest scenario
    pub fn optimal(&self) -> &DerivedCostRecord {
        match self.recommendation(RecommendationKind::OptimalForCost) {
            Some(rec) => &rec.record,
            None => &self.ranking[0].record,
        }
    }

    /// Savings of the cheapest scenario against the anchor
    pub fn max_savings(&self) -> Savings {
        Savings::relative_to(self.anchor().total_cost, self.optimal().total_cost)
    }
}

/// Locate the savings anchor: the first baseline record, else the first record
pub fn resolve_anchor(records: &[DerivedCostRecord]) -> Option<usize> {
    if records.is_empty() {
        return None;
    }
    Some(
        records
            .iter()
            .position(|r| r.scenario == BASELINE_SCENARIO)
            .unwrap_or(0),
    )
}

/// Build the comparison report.
///
/// Fails only when `records` is empty.
pub fn build_report(records: Vec<DerivedCostRecord>, retention_days: u32) -> Result<CostReport> {
    let anchor_index = resolve_anchor(&records).ok_or(ReportError::EmptyInput)?;
    let anchor_total = records[anchor_index].total_cost;
    if anchor_total == 0.0 {
        warn!(
            "anchor scenario '{}' has zero total cost, savings are undefined",
            records[anchor_index].scenario
        );
    }

    let recommendations = recommend(&records);
    let optimal_index = recommendations
        .iter()
        .find(|r| r.kind == RecommendationKind::OptimalForCost)
        .and_then(|r| records.iter().position(|candidate| *candidate == r.record));

    let mut order: Vec<usize> = (0..records.len()).collect();
    // sort_by is stable, equal totals keep input order
    order.sort_by(|&a, &b| records[a].total_cost.total_cmp(&records[b].total_cost));

    let ranking = order
        .into_iter()
        .map(|index| {
            let record = &records[index];
            let is_anchor = index == anchor_index;
            RankedEntry {
                record: record.clone(),
                input_index: index,
                savings: if is_anchor {
                    Savings::NotApplicable
                } else {
                    Savings::relative_to(anchor_total, record.total_cost)
                },
                is_anchor,
                is_optimal: Some(index) == optimal_index,
            }
        })
        .collect();

    Ok(CostReport {
        generated_at: Local::now(),
        retention_days,
        records,
        anchor_index,
        ranking,
        recommendations,
    })
}
