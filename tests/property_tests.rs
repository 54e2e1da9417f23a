//! Property-based tests for cost estimation and report shaping
//!
//! Validates, over generated benchmark records:
//! - Cost figures are non-negative and add up
//! - Compression never grows the stored footprint
//! - Unknown scenarios price exactly like the baseline
//! - Ranking is sorted, stable and a permutation of the input
//! - Recommendations agree with the ranking

use compression_cost_report::prelude::*;
use proptest::prelude::*;
use serde_json::json;

// === Property Test Generators ===

fn known_scenario_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ProfileTable::BUILTIN.scenarios().collect::<Vec<_>>())
}

/// Plausible benchmark record for a built-in scenario
fn raw_record_strategy() -> impl Strategy<Value = RawBenchmarkRecord> {
    (
        known_scenario_strategy(),
        1u32..=512,
        0u32..=86_400,
        0u64..=(500u64 * 1024 * 1024 * 1024),
    )
        .prop_map(|(scenario, nodes, runtime, bytes)| {
            RawBenchmarkRecord::from_value(json!({
                "scenario": scenario,
                "nodes": nodes,
                "runtime_seconds": runtime,
                "output_size_bytes": bytes,
            }))
            .unwrap()
        })
}

fn derived_strategy() -> impl Strategy<Value = DerivedCostRecord> {
    (0u8..4, 0u32..=400, 1u8..=6, prop::bool::ANY).prop_map(|(name, cents, ratio, overhead)| {
        DerivedCostRecord {
            scenario: format!("s{}", name),
            compute_cost: f64::from(cents) / 4.0,
            storage_cost: f64::from(cents) / 4.0,
            total_cost: f64::from(cents) / 2.0,
            compression_ratio: f64::from(ratio),
            output_gb: 1.0,
            physical_gb: 1.0 / f64::from(ratio),
            runtime_hours: 1.0,
            cpu_overhead_pct: if overhead { 15.0 } else { 0.0 },
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_costs_non_negative_and_consistent(
        record in raw_record_strategy(),
        days in 1u32..=3650,
    ) {
        let derived = CostEstimator::default().estimate(&record, days);

        prop_assert!(derived.compute_cost >= 0.0);
        prop_assert!(derived.storage_cost >= 0.0);
        // Each figure is rounded on its own, so the sum may drift by a cent
        prop_assert!((derived.compute_cost + derived.storage_cost - derived.total_cost).abs() <= 0.011);
    }

    #[test]
    fn prop_compression_never_grows_footprint(record in raw_record_strategy()) {
        let derived = CostEstimator::default().estimate(&record, 30);

        prop_assert!(derived.compression_ratio >= 1.0);
        prop_assert!(derived.physical_gb <= derived.output_gb);
        if derived.compression_ratio == 1.0 {
            prop_assert_eq!(derived.physical_gb, derived.output_gb);
        }
    }

    #[test]
    fn prop_zero_runtime_zero_compute(
        scenario in known_scenario_strategy(),
        nodes in 1u32..=512,
    ) {
        let record = RawBenchmarkRecord::from_value(json!({ "scenario": scenario, "nodes": nodes })).unwrap();
        prop_assert_eq!(CostEstimator::default().estimate(&record, 30).compute_cost, 0.0);
    }

    #[test]
    fn prop_unknown_scenario_equals_baseline(
        name in "[a-z]{3,12}_x",
        nodes in 1u32..=64,
        runtime in 0u32..=36_000,
        bytes in 0u64..=(100u64 * 1024 * 1024 * 1024),
    ) {
        let estimator = CostEstimator::default();
        let fields = |scenario: &str| json!({
            "scenario": scenario,
            "nodes": nodes,
            "runtime_seconds": runtime,
            "output_size_bytes": bytes,
        });
        let unknown = estimator.estimate(&RawBenchmarkRecord::from_value(fields(name.as_str())).unwrap(), 30);
        let baseline = estimator.estimate(&RawBenchmarkRecord::from_value(fields("baseline")).unwrap(), 30);

        prop_assert_eq!(unknown.total_cost, baseline.total_cost);
        prop_assert_eq!(unknown.physical_gb, baseline.physical_gb);
        prop_assert_eq!(unknown.cpu_overhead_pct, 0.0);
    }

    #[test]
    fn prop_ranking_sorted_stable_permutation(records in prop::collection::vec(derived_strategy(), 1..20)) {
        let report = build_report(records.clone(), 30).unwrap();

        prop_assert_eq!(report.ranking.len(), records.len());
        for pair in report.ranking.windows(2) {
            prop_assert!(pair[0].record.total_cost <= pair[1].record.total_cost);
            if pair[0].record.total_cost == pair[1].record.total_cost {
                prop_assert!(pair[0].input_index < pair[1].input_index);
            }
        }

        let mut indices: Vec<usize> = report.ranking.iter().map(|e| e.input_index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..records.len()).collect::<Vec<_>>());
        prop_assert_eq!(report.ranking.iter().filter(|e| e.is_anchor).count(), 1);
    }

    #[test]
    fn prop_recommendations_agree_with_ranking(records in prop::collection::vec(derived_strategy(), 1..20)) {
        let report = build_report(records.clone(), 30).unwrap();

        let optimal = report.recommendation(RecommendationKind::OptimalForCost).unwrap();
        prop_assert_eq!(&optimal.record, &report.ranking[0].record);
        prop_assert!(report.ranking[0].is_optimal);

        let best = report.recommendation(RecommendationKind::BestCompression).unwrap();
        prop_assert!(records.iter().all(|r| r.compression_ratio <= best.record.compression_ratio));

        let any_zero = records.iter().any(|r| r.cpu_overhead_pct == 0.0);
        prop_assert_eq!(report.recommendation(RecommendationKind::BestZeroOverhead).is_some(), any_zero);
    }
}
