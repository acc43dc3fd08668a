//! Console Output
//!
//! Plain-text summary for the terminal: one block per implementation in input
//! order, followed by the best pick, framed by `=` rules.

use crate::check_mark;
use crate::report::ReportContext;
use perfdigest_core::{AnalysisResult, BestPick};

const RULE_WIDTH: usize = 70;

/// Format the console summary.
///
/// An empty `result` prints a "no data" line instead of a best pick.
pub fn format_console_summary(
    result: &AnalysisResult,
    best: Option<&BestPick>,
    ctx: &ReportContext,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut output = String::new();

    output.push('\n');
    output.push_str(&rule);
    output.push_str("\nPROFILING SUMMARY\n");
    output.push_str(&rule);
    output.push_str("\n\n");

    if result.is_empty() {
        output.push_str("✗ No profiling data available\n");
        return output;
    }

    for (name, metrics) in result.iter() {
        output.push_str(&format!("{}:\n", name));
        output.push_str(&format!("  Min:     {:.4} ms\n", metrics.min_ms));
        output.push_str(&format!("  Max:     {:.4} ms\n", metrics.max_ms));
        output.push_str(&format!("  Avg:     {:.4} ms\n", metrics.avg_ms));
        output.push_str(&format!(
            "  Status:  {}\n",
            check_mark(metrics.target_met, "Target Met", "Target Not Met")
        ));
        output.push_str(&format!("  GFLOPs:  {:.2}\n\n", metrics.estimated_gflops));
    }

    if let Some(best) = best {
        output.push_str(&rule);
        output.push('\n');
        output.push_str(&format!("Best Implementation: {}\n", best.name));
        output.push_str(&format!("Best Time: {:.4} ms\n", best.metrics.avg_ms));
        output.push_str(&format!(
            "Target (<{} ms): {}\n",
            ctx.target_label(),
            check_mark(best.metrics.target_met, "ACHIEVED", "NOT MET")
        ));
        output.push_str(&rule);
        output.push_str("\n\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use perfdigest_core::{AnalysisConfig, MeasurementRecord, derive, pick_best};

    fn ctx() -> ReportContext {
        ReportContext::new(Utc::now(), AnalysisConfig::default())
    }

    #[test]
    fn test_summary_layout() {
        let result = derive(
            &[
                MeasurementRecord::new("RocSOLVER", 2.1, 2.4, 2.3),
                MeasurementRecord::new("Hybrid", 1.5, 1.8, 1.6),
            ],
            &AnalysisConfig::default(),
        );
        let best = pick_best(&result).unwrap();
        let out = format_console_summary(&result, Some(&best), &ctx());

        assert!(out.starts_with(&format!("\n{}\nPROFILING SUMMARY\n", "=".repeat(70))));
        assert!(out.contains("RocSOLVER:\n  Min:     2.1000 ms\n  Max:     2.4000 ms\n"));
        assert!(out.contains("  Status:  ✓ Target Met\n"));
        assert!(out.contains("  GFLOPs:  33.04\n"));
        assert!(out.contains("Best Implementation: Hybrid\n"));
        assert!(out.contains("Best Time: 1.6000 ms\n"));
        assert!(out.contains("Target (<5 ms): ✓ ACHIEVED\n"));

        let roc = out.find("RocSOLVER:").unwrap();
        let hybrid = out.find("Hybrid:").unwrap();
        assert!(roc < hybrid);
    }

    #[test]
    fn test_target_missed() {
        let result = derive(
            &[MeasurementRecord::new("Slow", 5.0, 5.0, 5.0)],
            &AnalysisConfig::default(),
        );
        let best = pick_best(&result).unwrap();
        let out = format_console_summary(&result, Some(&best), &ctx());

        assert!(out.contains("  Status:  ✗ Target Not Met\n"));
        assert!(out.contains("Target (<5 ms): ✗ NOT MET\n"));
    }

    #[test]
    fn test_no_data() {
        let out = format_console_summary(&AnalysisResult::new(), None, &ctx());
        assert!(out.contains("✗ No profiling data available"));
        assert!(!out.contains("Best Implementation"));
    }
}
