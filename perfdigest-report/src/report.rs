//! Report Context
//!
//! Static descriptive configuration shared by every renderer. None of it is
//! derived from measurements.

use crate::template::ReportTemplate;
use chrono::{DateTime, Utc};
use perfdigest_core::AnalysisConfig;
use serde::{Deserialize, Serialize, Serializer};

/// Everything a renderer needs besides the analysis itself
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext {
    /// Clock reading stamped into the artifacts
    pub generated_at: DateTime<Utc>,
    /// Problem size, target latency and FLOP model used for the analysis
    pub analysis: AnalysisConfig,
    /// Description of what was measured
    pub target: TargetSpec,
    /// Hardware description
    pub hardware: HardwareSpec,
    /// Static prose sections
    pub template: ReportTemplate,
}

impl ReportContext {
    /// Context with default descriptive configuration
    pub fn new(generated_at: DateTime<Utc>, analysis: AnalysisConfig) -> Self {
        Self {
            generated_at,
            analysis,
            target: TargetSpec::default(),
            hardware: HardwareSpec::default(),
            template: ReportTemplate::default(),
        }
    }

    /// Target latency rendered without a trailing `.0` (e.g. `5`, `2.5`)
    pub(crate) fn target_label(&self) -> String {
        format!("{}", self.analysis.target_ms)
    }
}

/// Description of the benchmarked workload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetSpec {
    /// Target device name
    pub gpu: String,
    /// Data-type label, snake_case (e.g. `complex_symmetric`)
    pub matrix_type: String,
    /// Long-form matrix description
    pub matrix_description: String,
    /// Numeric precision
    pub precision: String,
    /// What the timings cover
    pub timing_scope: String,
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self {
            gpu: "AMD MI100/AI100".to_string(),
            matrix_type: "complex_symmetric".to_string(),
            matrix_description: "Complex Hermitian (Symmetric)".to_string(),
            precision: "Single (complex<float>)".to_string(),
            timing_scope: "GPU execution only".to_string(),
        }
    }
}

impl TargetSpec {
    /// `matrix_type` with underscores turned into spaces
    pub fn matrix_type_label(&self) -> String {
        self.matrix_type.replace('_', " ")
    }
}

/// Fixed hardware constants emitted into the reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardwareSpec {
    /// Compute unit count
    pub compute_units: u32,
    /// Peak FP32 throughput (TFLOPS)
    #[serde(serialize_with = "serialize_whole")]
    pub peak_flops_tflops: f64,
    /// Memory bandwidth (GB/s)
    #[serde(serialize_with = "serialize_whole")]
    pub memory_bandwidth_gb_s: f64,
    /// L1 cache per CU (KB)
    pub l1_cache_kb: u32,
    /// L2 cache (MB)
    pub l2_cache_mb: u32,
    /// Local data share per CU (KB)
    pub lds_per_cu_kb: u32,
    /// Wavefront width (threads)
    pub wavefront_size: u32,
}

impl Default for HardwareSpec {
    fn default() -> Self {
        Self {
            compute_units: 120,
            peak_flops_tflops: 40.0,
            memory_bandwidth_gb_s: 900.0,
            l1_cache_kb: 16,
            l2_cache_mb: 4,
            lds_per_cu_kb: 96,
            wavefront_size: 64,
        }
    }
}

impl HardwareSpec {
    /// (property, value) rows for the hardware table
    pub fn table_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Compute Units", self.compute_units.to_string()),
            (
                "Peak FP32 Performance",
                format!("{} TFLOPS", self.peak_flops_tflops),
            ),
            (
                "Memory Bandwidth",
                format!("{} GB/s", self.memory_bandwidth_gb_s),
            ),
            ("L1 Cache (per CU)", format!("{} KB", self.l1_cache_kb)),
            ("L2 Cache", format!("{} MB", self.l2_cache_mb)),
            ("LDS (per CU)", format!("{} KB", self.lds_per_cu_kb)),
            (
                "Max Wavefront Size",
                format!("{} threads", self.wavefront_size),
            ),
        ]
    }
}

/// Writes `40.0` as `40`; fractional values stay floats.
fn serialize_whole<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
