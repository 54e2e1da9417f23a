// Decision engine: pick the scenarios worth recommending from a set of derived records
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::DerivedCostRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    OptimalForCost,
    BestCompression,
    BestZeroOverhead,
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptimalForCost => write!(f, "Optimal for cost"),
            Self::BestCompression => write!(f, "Best compression"),
            Self::BestZeroOverhead => write!(f, "Best zero-overhead"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub record: DerivedCostRecord,
}

impl Recommendation {
    /// One-line summary: cost for the cost pick, ratio for the others
    pub fn summary(&self) -> String {
        match self.kind {
            RecommendationKind::OptimalForCost => {
                format!("{}: {} (${:.2})", self.kind, self.record.scenario, self.record.total_cost)
            }
            RecommendationKind::BestCompression | RecommendationKind::BestZeroOverhead => format!(
                "{}: {} ({:.1}x)",
                self.kind, self.record.scenario, self.record.compression_ratio
            ),
        }
    }
}

/// Apply rules, each independently of the others and of any ranking:
/// 1. Optimal for cost: lowest total cost
/// 2. Best compression: highest compression ratio
/// 3. Best zero-overhead: lowest storage cost among records with no CPU overhead,
///    omitted when every record pays some overhead
///
/// Ties go to the earliest record. Empty input yields no recommendations.
pub fn recommend(records: &[DerivedCostRecord]) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(3);

    if let Some(optimal) = first_min_by(records.iter(), |r| r.total_cost) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::OptimalForCost,
            record: optimal.clone(),
        });
    }

    if let Some(best) = first_min_by(records.iter(), |r| -r.compression_ratio) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::BestCompression,
            record: best.clone(),
        });
    }

    let zero_overhead = records.iter().filter(|r| r.is_zero_overhead());
    if let Some(best_zero) = first_min_by(zero_overhead, |r| r.storage_cost) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::BestZeroOverhead,
            record: best_zero.clone(),
        });
    }

    recommendations
}

/// Minimum by key where the first of several equal keys wins
fn first_min_by<'a, I, F>(records: I, key: F) -> Option<&'a DerivedCostRecord>
where
    I: Iterator<Item = &'a DerivedCostRecord>,
    F: Fn(&DerivedCostRecord) -> f64,
{
    records.fold(None, |best, candidate| match best {
        Some(current) if key(candidate) >= key(current) => Some(current),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derived(scenario: &str, total: f64, ratio: f64, overhead_pct: f64, storage: f64) -> DerivedCostRecord {
        DerivedCostRecord {
            scenario: scenario.to_string(),
            compute_cost: total - storage,
            storage_cost: storage,
            total_cost: total,
            compression_ratio: ratio,
            output_gb: 10.0,
            physical_gb: 10.0 / ratio,
            runtime_hours: 1.0,
            cpu_overhead_pct: overhead_pct,
        }
    }

    #[test]
    fn test_first_occurrence_wins_ties() {
        let records = vec![
            derived("a", 50.0, 4.0, 15.0, 1.0),
            derived("b", 50.0, 4.0, 15.0, 1.0),
        ];
        let recs = recommend(&records);
        assert_eq!(recs[0].record.scenario, "a");
        assert_eq!(recs[1].record.scenario, "a");
    }

    #[test]
    fn test_summary_lines() {
        let optimal = Recommendation {
            kind: RecommendationKind::OptimalForCost,
            record: derived("lustre_lz4", 91.38, 2.5, 0.0, 0.58),
        };
        assert_eq!(optimal.summary(), "Optimal for cost: lustre_lz4 ($91.38)");

        let best = Recommendation {
            kind: RecommendationKind::BestCompression,
            record: derived("netcdf_4", 131.92, 5.5, 45.0, 0.26),
        };
        assert_eq!(best.summary(), "Best compression: netcdf_4 (5.5x)");
    }
}
