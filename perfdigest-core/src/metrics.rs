//! Metric Derivation
//!
//! Turns measurement rows into one [`DerivedMetrics`] per implementation:
//! latencies copied from the first row carrying that name, a target pass/fail
//! flag and a closed-form GFLOP/s estimate.

use crate::config::AnalysisConfig;
use crate::record::MeasurementRecord;
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

/// Metrics for a single implementation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Fastest observed run (ms)
    pub min_ms: f64,
    /// Slowest observed run (ms)
    pub max_ms: f64,
    /// Mean run time (ms)
    pub avg_ms: f64,
    /// `avg_ms < target_ms`
    pub target_met: bool,
    /// Estimated throughput in GFLOP/s (serialized as `flops`)
    #[serde(rename = "flops", alias = "estimated_gflops")]
    pub estimated_gflops: f64,
}

impl DerivedMetrics {
    /// Derive metrics for one record
    pub fn from_record(record: &MeasurementRecord, config: &AnalysisConfig) -> Self {
        Self {
            min_ms: record.min_ms,
            max_ms: record.max_ms,
            avg_ms: record.avg_ms,
            target_met: config.meets_target(record.avg_ms),
            estimated_gflops: estimate_gflops(config.flop_count(), record.avg_ms),
        }
    }
}

/// GFLOP/s achieved when `flop_count` operations take `avg_ms` milliseconds
pub fn estimate_gflops(flop_count: f64, avg_ms: f64) -> f64 {
    flop_count / (avg_ms * 1e-3) / 1e9
}

/// Implementation name → metrics, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    entries: IndexMap<String, DerivedMetrics>,
}

impl AnalysisResult {
    /// Empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of implementations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no implementation was analyzed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Metrics for `name`
    pub fn get(&self, name: &str) -> Option<&DerivedMetrics> {
        self.entries.get(name)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DerivedMetrics)> {
        self.entries.iter().map(|(name, m)| (name.as_str(), m))
    }

    /// Implementation names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Insert `metrics` unless `name` is already present.
    ///
    /// Returns `false` when an earlier entry was kept.
    pub fn insert_first(&mut self, name: &str, metrics: DerivedMetrics) -> bool {
        match self.entries.entry(name.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(metrics);
                true
            }
        }
    }
}

impl<'a> IntoIterator for &'a AnalysisResult {
    type Item = (&'a String, &'a DerivedMetrics);
    type IntoIter = indexmap::map::Iter<'a, String, DerivedMetrics>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Derive metrics for every distinct implementation in `records`.
///
/// Only the first row of each implementation is used; later duplicates are
/// ignored rather than aggregated. An empty input yields an empty result.
pub fn derive<'a, I>(records: I, config: &AnalysisConfig) -> AnalysisResult
where
    I: IntoIterator<Item = &'a MeasurementRecord>,
{
    let mut result = AnalysisResult::new();

    for record in records {
        let name = record.implementation_name.as_str();
        if result.entries.contains_key(name) {
            tracing::debug!(implementation = name, "ignoring duplicate row");
            continue;
        }
        result.insert_first(name, DerivedMetrics::from_record(record, config));
    }

    tracing::debug!(implementations = result.len(), "derived metrics");
    result
}
