//! Expected compression behaviour per benchmark scenario
//!
//! Ratios and CPU overheads are estimates measured once per codec/filesystem
//! combination; they stand in for the per-run figures the harness does not
//! record.

use crate::types::BASELINE_SCENARIO;

/// Expected effect of one compression strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionProfile {
    /// Logical bytes per physical byte, always >= 1.0
    pub ratio: f64,
    /// Proportional increase in compute wall-clock time, always >= 0.0
    pub cpu_overhead: f64,
}

impl CompressionProfile {
    /// Uncompressed output with no CPU cost
    pub const UNCOMPRESSED: CompressionProfile = CompressionProfile {
        ratio: 1.0,
        cpu_overhead: 0.0,
    };

    pub const fn new(ratio: f64, cpu_overhead: f64) -> Self {
        Self { ratio, cpu_overhead }
    }

    /// Overhead as a percentage
    pub fn cpu_overhead_pct(self) -> f64 {
        self.cpu_overhead * 100.0
    }
}

impl Default for CompressionProfile {
    fn default() -> Self {
        Self::UNCOMPRESSED
    }
}

/// Scenario identifier → expected profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileTable {
    entries: &'static [(&'static str, CompressionProfile)],
}

impl ProfileTable {
    /// Profiles measured for the WRF output benchmarks
    pub const BUILTIN: ProfileTable = ProfileTable {
        entries: &[
            (BASELINE_SCENARIO, CompressionProfile::UNCOMPRESSED),
            // Lustre-side LZ4 is transparent to the application
            ("lustre_lz4", CompressionProfile::new(2.5, 0.0)),
            ("netcdf_1", CompressionProfile::new(4.0, 0.15)),
            ("netcdf_2", CompressionProfile::new(4.5, 0.25)),
            ("netcdf_4", CompressionProfile::new(5.5, 0.45)),
            ("netcdf_1_lustre", CompressionProfile::new(4.2, 0.15)),
        ],
    };

    /// Profile for `scenario`; unknown scenarios are treated as uncompressed
    pub fn profile(&self, scenario: &str) -> CompressionProfile {
        match self.get(scenario) {
            Some(profile) => profile,
            None => CompressionProfile::UNCOMPRESSED,
        }
    }

    /// Profile for `scenario` only if the table knows it
    pub fn get(&self, scenario: &str) -> Option<CompressionProfile> {
        self.entries
            .iter()
            .find(|(name, _)| *name == scenario)
            .map(|(_, profile)| *profile)
    }

    pub fn is_known(&self, scenario: &str) -> bool {
        self.get(scenario).is_some()
    }

    pub fn scenarios(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::BUILTIN
    }
}
