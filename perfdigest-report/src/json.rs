//! JSON Output

use crate::report::{HardwareSpec, ReportContext};
use chrono::{DateTime, Utc};
use perfdigest_core::{AnalysisResult, BestPick};
use serde::{Deserialize, Serialize};

/// Machine-readable export of an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredReport {
    /// Generation time (ISO-8601)
    pub timestamp: DateTime<Utc>,
    /// Target device name
    pub gpu: String,
    /// Problem size N
    pub matrix_size: u64,
    /// Data-type label
    pub matrix_type: String,
    /// Target latency (ms)
    pub target_time_ms: f64,
    /// Fastest implementation, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_implementation: Option<String>,
    /// Per-implementation metrics in input order
    pub implementations: AnalysisResult,
    /// Static hardware description
    pub hardware: HardwareSpec,
}

impl StructuredReport {
    /// Assemble the export from an analysis and its context
    pub fn new(result: &AnalysisResult, best: Option<&BestPick>, ctx: &ReportContext) -> Self {
        Self {
            timestamp: ctx.generated_at,
            gpu: ctx.target.gpu.clone(),
            matrix_size: ctx.analysis.problem_size,
            matrix_type: ctx.target.matrix_type.clone(),
            target_time_ms: ctx.analysis.target_ms,
            best_implementation: best.map(|b| b.name.clone()),
            implementations: result.clone(),
            hardware: ctx.hardware.clone(),
        }
    }
}

/// Generate a prettified (2-space indented) JSON report.
pub fn generate_json_report(
    result: &AnalysisResult,
    best: Option<&BestPick>,
    ctx: &ReportContext,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&StructuredReport::new(result, best, ctx))
}

/// Parse a previously generated JSON report.
pub fn parse_json_report(json: &str) -> Result<StructuredReport, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use perfdigest_core::{AnalysisConfig, MeasurementRecord, derive, pick_best};

    fn fixed_ctx() -> ReportContext {
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        ReportContext::new(at, AnalysisConfig::default())
    }

    #[test]
    fn test_top_level_layout() {
        let result = derive(
            &[MeasurementRecord::new("Hybrid", 1.5, 1.8, 1.6)],
            &AnalysisConfig::default(),
        );
        let best = pick_best(&result).unwrap();
        let json = generate_json_report(&result, Some(&best), &fixed_ctx()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["timestamp"], "2026-01-15T09:30:00Z");
        assert_eq!(value["gpu"], "AMD MI100/AI100");
        assert_eq!(value["matrix_size"], 341);
        assert_eq!(value["matrix_type"], "complex_symmetric");
        assert_eq!(value["target_time_ms"], 5.0);
        assert_eq!(value["best_implementation"], "Hybrid");
        assert_eq!(value["implementations"]["Hybrid"]["avg_ms"], 1.6);
        assert_eq!(value["implementations"]["Hybrid"]["target_met"], true);
        assert!(value["implementations"]["Hybrid"]["flops"].is_f64());
        assert_eq!(value["hardware"]["compute_units"], 120);
        assert_eq!(value["hardware"]["wavefront_size"], 64);

        assert!(json.contains("\"peak_flops_tflops\": 40,"));
        assert!(json.contains("\"memory_bandwidth_gb_s\": 900,"));

        // two-space indentation
        assert!(json.starts_with("{\n  \"timestamp\""));
    }

    #[test]
    fn test_empty_result() {
        let json = generate_json_report(&AnalysisResult::new(), None, &fixed_ctx()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["implementations"].as_object().unwrap().is_empty());
        assert!(value.get("best_implementation").is_none());
    }

    #[test]
    fn test_round_trip() {
        let records = [
            MeasurementRecord::new("RocSOLVER", 2.1, 2.4, 2.3),
            MeasurementRecord::new("Hybrid", 1.5, 1.8, 1.6),
            MeasurementRecord::new("Naive", 7.0, 11.0, 9.125),
        ];
        let result = derive(&records, &AnalysisConfig::default());
        let best = pick_best(&result).unwrap();
        let json = generate_json_report(&result, Some(&best), &fixed_ctx()).unwrap();

        let parsed = parse_json_report(&json).unwrap();
        assert_eq!(parsed.timestamp, fixed_ctx().generated_at);
        assert_eq!(
            parsed.implementations.names().collect::<Vec<_>>(),
            vec!["RocSOLVER", "Hybrid", "Naive"]
        );
        for (name, original) in result.iter() {
            let restored = parsed.implementations.get(name).unwrap();
            assert_eq!(restored.min_ms, original.min_ms);
            assert_eq!(restored.max_ms, original.max_ms);
            assert_eq!(restored.avg_ms, original.avg_ms);
            assert_eq!(restored.target_met, original.target_met);
            let rel = (restored.estimated_gflops - original.estimated_gflops).abs()
                / original.estimated_gflops;
            assert!(rel < 1e-9);
        }
    }
}
