//! Unit prices for the resources a benchmark run consumes
//!
//! Prices are us-east-2 list prices. Storage is published per GB-month and
//! converted to GB-hour with a flat 30-day month.

/// Hours in the flat billing month used for storage conversions
pub const HOURS_PER_MONTH: f64 = 30.0 * 24.0;

/// Hardware class assumed when none is configured
pub const DEFAULT_INSTANCE_TYPE: &str = "hpc7a.96xlarge";

/// Process-wide price list, never mutated after construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    /// Instance type → dollars per node-hour
    compute: &'static [(&'static str, f64)],
    /// Storage tier name, for reports
    storage_tier: &'static str,
    /// Dollars per GB-month of persistent storage
    storage_per_gb_month: f64,
    /// Dollars per GB-month of provisioned throughput
    throughput_per_gb_month: f64,
}

impl RateTable {
    /// HPC7a instances with FSx for Lustre persistent-2 SSD storage
    pub const AWS_US_EAST_2: RateTable = RateTable {
        compute: &[("hpc7a.96xlarge", 9.08), ("hpc7a.48xlarge", 7.20)],
        storage_tier: "fsx_lustre_persistent2_ssd",
        storage_per_gb_month: 0.145,
        throughput_per_gb_month: 0.030,
    };

    /// Dollars per node-hour for `instance_type`
    pub fn compute_rate(&self, instance_type: &str) -> Option<f64> {
        self.compute
            .iter()
            .find(|(name, _)| *name == instance_type)
            .map(|(_, rate)| *rate)
    }

    /// Names of every priced instance type
    pub fn instance_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.compute.iter().map(|(name, _)| *name)
    }

    pub fn storage_tier(&self) -> &'static str {
        self.storage_tier
    }

    /// Dollars per GB-hour of persistent storage
    pub fn storage_rate_per_gb_hour(&self) -> f64 {
        self.storage_per_gb_month / HOURS_PER_MONTH
    }

    /// Dollars per GB-hour of throughput surcharge.
    ///
    /// Reported alongside the storage rate but not part of the cost formula.
    pub fn throughput_rate_per_gb_hour(&self) -> f64 {
        self.throughput_per_gb_month / HOURS_PER_MONTH
    }

    pub fn storage_rate_per_gb_month(&self) -> f64 {
        self.storage_per_gb_month
    }

    pub fn throughput_rate_per_gb_month(&self) -> f64 {
        self.throughput_per_gb_month
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::AWS_US_EAST_2
    }
}
