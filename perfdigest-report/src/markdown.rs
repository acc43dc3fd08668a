//! Markdown Output
//!
//! Layout:
//! - title and generation time
//! - executive summary: target specification, key results
//! - one metrics table per implementation
//! - technical details from [`ReportTemplate`](crate::ReportTemplate) and the hardware table
//! - references and footer
//!
//! Only the key results and per-implementation tables depend on the data.

use crate::check_mark;
use crate::report::ReportContext;
use chrono::SecondsFormat;
use perfdigest_core::{AnalysisResult, BestPick, DerivedMetrics};

/// Generate the narrative markdown report.
///
/// An empty `result` produces the full document with a "no data" note in
/// place of the key results.
pub fn generate_markdown_report(
    result: &AnalysisResult,
    best: Option<&BestPick>,
    ctx: &ReportContext,
) -> String {
    let mut output = String::new();
    let target = ctx.target_label();

    output.push_str(&format!("# {}\n\n", ctx.template.title));
    output.push_str(&format!(
        "**Generated:** {}\n\n",
        ctx.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output.push_str("## Executive Summary\n\n");
    write_target_specification(&mut output, ctx);

    if result.is_empty() {
        output.push_str("### Key Results\n\n");
        output.push_str("_No profiling data available._\n\n");
    } else {
        if let Some(best) = best {
            write_key_results(&mut output, best);
        }

        output.push_str("## Detailed Performance Analysis\n\n");
        for (name, metrics) in result.iter() {
            write_implementation_table(&mut output, name, metrics, &target);
        }
    }

    write_technical_details(&mut output, ctx);

    output.push_str("## References\n\n");
    for reference in &ctx.template.references {
        output.push_str(&format!("- [{}]({})\n", reference.title, reference.url));
    }
    output.push('\n');

    output.push_str(&format!(
        "---\n**Report Generated:** {}\n",
        ctx.generated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    ));

    output
}

fn write_target_specification(output: &mut String, ctx: &ReportContext) {
    let n = ctx.analysis.problem_size;
    let spec = &ctx.target;

    output.push_str("### Target Specification\n");
    output.push_str(&format!(
        "- **Matrix Size:** {n}×{n} {}\n",
        spec.matrix_type_label()
    ));
    output.push_str(&format!("- **GPU:** {}\n", spec.gpu));
    output.push_str(&format!(
        "- **Target Time:** <{} milliseconds ({})\n",
        ctx.target_label(),
        spec.timing_scope
    ));
    output.push_str(&format!("- **Matrix Type:** {}\n", spec.matrix_description));
    output.push_str(&format!("- **Precision:** {}\n\n", spec.precision));
}

fn write_key_results(output: &mut String, best: &BestPick) {
    output.push_str("### Key Results\n\n");
    output.push_str(&format!("**Best Implementation:** {}\n", best.name));
    output.push_str(&format!("- **Average Time:** {:.4} ms\n", best.metrics.avg_ms));
    output.push_str(&format!(
        "- **Target Met:** {}\n",
        check_mark(best.metrics.target_met, "Yes", "No")
    ));
    output.push_str(&format!(
        "- **Estimated Performance:** {:.2} GFLOPs\n\n",
        best.metrics.estimated_gflops
    ));
}

fn write_implementation_table(
    output: &mut String,
    name: &str,
    metrics: &DerivedMetrics,
    target: &str,
) {
    output.push_str(&format!("### {}\n\n", name));
    output.push_str("| Metric | Value |\n");
    output.push_str("|--------|-------|\n");
    output.push_str(&format!("| Min Time | {:.4} ms |\n", metrics.min_ms));
    output.push_str(&format!("| Max Time | {:.4} ms |\n", metrics.max_ms));
    output.push_str(&format!("| Avg Time | {:.4} ms |\n", metrics.avg_ms));
    output.push_str(&format!(
        "| Target (<{} ms) | {} |\n",
        target,
        check_mark(metrics.target_met, "Met", "Not Met")
    ));
    output.push_str(&format!(
        "| Estimated GFLOPs | {:.2} |\n\n",
        metrics.estimated_gflops
    ));
}

fn write_technical_details(output: &mut String, ctx: &ReportContext) {
    let template = &ctx.template;

    output.push_str("## Technical Details\n\n");

    output.push_str("### Algorithm Overview\n\n");
    output.push_str(template.algorithm_overview.trim_end());
    output.push_str("\n\n");

    output.push_str(&format!(
        "### GPU Hardware Specifications ({})\n\n",
        ctx.target.gpu
    ));
    output.push_str("| Property | Value |\n");
    output.push_str("|----------|-------|\n");
    for (property, value) in ctx.hardware.table_rows() {
        output.push_str(&format!("| {} | {} |\n", property, value));
    }
    output.push('\n');

    output.push_str("### Performance Bottleneck Analysis\n\n");
    output.push_str(template.bottleneck_analysis.trim_end());
    output.push_str("\n\n");

    output.push_str("### Recommendations\n\n");
    for (idx, item) in template.recommendations.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", idx + 1, item));
    }
    output.push('\n');

    output.push_str("### Known Limitations\n\n");
    for item in &template.limitations {
        output.push_str(&format!("- {}\n", item));
    }
    output.push('\n');
}
