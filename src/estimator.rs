//! Cost estimation for a single benchmark run
//!
//! The estimator is a pure function of one raw record, the rate table and the
//! profile table. It holds no cross-record state, so a slice of records can be
//! estimated in any order (or in parallel) with identical results.

use log::debug;

use crate::{
    error::{ReportError, Result},
    profiles::ProfileTable,
    rates::{RateTable, DEFAULT_INSTANCE_TYPE},
    types::{round_to, DerivedCostRecord, RawBenchmarkRecord, BYTES_PER_GB, SECONDS_PER_HOUR},
};

/// Converts raw benchmark records into derived cost records
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEstimator {
    instance_type: &'static str,
    compute_rate: f64,
    storage_rate_per_gb_hour: f64,
    profiles: ProfileTable,
}

impl CostEstimator {
    /// Estimator pricing compute at `instance_type`
    pub fn new(rates: &RateTable, instance_type: &str) -> Result<Self> {
        let (instance_type, compute_rate) = rates
            .instance_types()
            .find(|name| *name == instance_type)
            .and_then(|name| rates.compute_rate(name).map(|rate| (name, rate)))
            .ok_or_else(|| ReportError::UnknownInstanceType {
                name: instance_type.to_string(),
                known: rates.instance_types().collect::<Vec<_>>().join(", "),
            })?;

        Ok(Self {
            instance_type,
            compute_rate,
            storage_rate_per_gb_hour: rates.storage_rate_per_gb_hour(),
            profiles: ProfileTable::BUILTIN,
        })
    }

    pub fn instance_type(&self) -> &'static str {
        self.instance_type
    }

    /// Dollars per node-hour
    pub fn compute_rate(&self) -> f64 {
        self.compute_rate
    }

    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Derive costs for one record kept for `retention_days` days.
    ///
    /// Never fails: absent fields and unknown scenarios fall back to their
    /// defaults, and negative inputs are applied to the formula as-is.
    pub fn estimate(&self, record: &RawBenchmarkRecord, retention_days: u32) -> DerivedCostRecord {
        let scenario = record.scenario();
        let nodes = record.nodes();
        let runtime_seconds = record.runtime_seconds();
        let output_bytes = record.output_bytes();

        if !self.profiles.is_known(scenario) {
            debug!("scenario '{}' has no compression profile, using baseline figures", scenario);
        }
        let profile = self.profiles.profile(scenario);

        let runtime_hours = runtime_seconds / SECONDS_PER_HOUR;
        let base_compute_cost = nodes * self.compute_rate * runtime_hours;
        // Compression runs inline with the simulation and stretches wall-clock time
        let compute_cost = base_compute_cost * (1.0 + profile.cpu_overhead);

        let physical_bytes = output_bytes / profile.ratio;
        let physical_gb = physical_bytes / BYTES_PER_GB;
        let storage_hours = f64::from(retention_days) * 24.0;
        let storage_cost = physical_gb * self.storage_rate_per_gb_hour * storage_hours;

        let total_cost = compute_cost + storage_cost;

        DerivedCostRecord {
            scenario: scenario.to_string(),
            compute_cost: round_to(compute_cost, 2),
            storage_cost: round_to(storage_cost, 2),
            total_cost: round_to(total_cost, 2),
            compression_ratio: profile.ratio,
            output_gb: round_to(output_bytes / BYTES_PER_GB, 2),
            physical_gb: round_to(physical_gb, 2),
            runtime_hours: round_to(runtime_hours, 2),
            cpu_overhead_pct: round_to(profile.cpu_overhead_pct(), 1),
        }
    }

    /// Estimate every record, preserving input order
    pub fn estimate_all(&self, records: &[RawBenchmarkRecord], retention_days: u32) -> Vec<DerivedCostRecord> {
        records
            .iter()
            .map(|record| self.estimate(record, retention_days))
            .collect()
    }
}

impl Default for CostEstimator {
    fn default() -> Self {
        let rates = RateTable::AWS_US_EAST_2;
        Self {
            instance_type: DEFAULT_INSTANCE_TYPE,
            compute_rate: rates.compute_rate(DEFAULT_INSTANCE_TYPE).unwrap_or(9.08),
            storage_rate_per_gb_hour: rates.storage_rate_per_gb_hour(),
            profiles: ProfileTable::BUILTIN,
        }
    }
}
