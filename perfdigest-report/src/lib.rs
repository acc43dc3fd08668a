#![warn(missing_docs)]
//! perfdigest Report - Rendering
//!
//! Turns an [`AnalysisResult`] and its [`BestPick`] into output artifacts:
//! - Markdown (narrative report, `profiling_report.md`)
//! - JSON (machine-readable export, `profiling_data.json`)
//! - Console (plain-text summary for stdout)
//!
//! Renderers are pure functions of their inputs. The clock reading and all
//! static descriptive text travel in a [`ReportContext`], so identical inputs
//! always produce identical bytes.

mod console;
mod json;
mod markdown;
mod report;
mod template;

pub use console::format_console_summary;
pub use json::{StructuredReport, generate_json_report, parse_json_report};
pub use markdown::generate_markdown_report;
pub use report::{HardwareSpec, ReportContext, TargetSpec};
pub use template::{Reference, ReportTemplate};

use perfdigest_core::{AnalysisResult, BestPick};

/// File name of the markdown artifact
pub const MARKDOWN_FILE_NAME: &str = "profiling_report.md";

/// File name of the JSON artifact
pub const JSON_FILE_NAME: &str = "profiling_data.json";

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Narrative markdown report
    Markdown,
    /// Structured JSON export
    Json,
    /// Human-readable terminal summary
    Console,
}

impl OutputFormat {
    /// Artifact file name for file-backed formats
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            OutputFormat::Markdown => Some(MARKDOWN_FILE_NAME),
            OutputFormat::Json => Some(JSON_FILE_NAME),
            OutputFormat::Console => None,
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" | "structured-data" => Ok(OutputFormat::Json),
            "console" | "human" | "text" => Ok(OutputFormat::Console),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Render `result` in the given format.
///
/// Only the JSON path can fail (serialization).
pub fn render(
    format: OutputFormat,
    result: &AnalysisResult,
    best: Option<&BestPick>,
    ctx: &ReportContext,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Markdown => Ok(generate_markdown_report(result, best, ctx)),
        OutputFormat::Json => generate_json_report(result, best, ctx),
        OutputFormat::Console => Ok(format_console_summary(result, best, ctx)),
    }
}

/// Pass/fail marker shared by the text renderers
pub(crate) fn check_mark(passed: bool, yes: &str, no: &str) -> String {
    if passed {
        format!("✓ {}", yes)
    } else {
        format!("✗ {}", no)
    }
}
