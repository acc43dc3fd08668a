#![warn(missing_docs)]
//! # perfdigest
//!
//! Latency table analysis for competing implementations of one computation.
//!
//! perfdigest reads a CSV of `Implementation, Min_ms, Max_ms, Avg_ms` rows and
//! turns it into:
//! - **Derived metrics**: pass/fail against a target latency and an estimated
//!   GFLOPs figure from a closed-form FLOP model
//! - **Best pick**: the implementation with the lowest average latency
//! - **Reports**: a narrative markdown document, a JSON export and a console
//!   summary
//!
//! ## Quick Start
//!
//! ```no_run
//! use perfdigest::prelude::*;
//!
//! # fn main() -> perfdigest::Result<()> {
//! let store = RecordStore::load("results.csv")?;
//! let config = AnalysisConfig::default();
//! let result = derive(&store, &config);
//! let best = pick_best(&result).ok();
//!
//! let ctx = ReportContext::new(chrono::Utc::now(), config);
//! print!("{}", format_console_summary(&result, best.as_ref(), &ctx));
//! # Ok(())
//! # }
//! ```
//!
//! ## Command Line
//!
//! ```text
//! perfdigest results.csv                 # markdown + JSON into .
//! perfdigest results.csv -j -o reports   # JSON only, into reports/
//! perfdigest --print-config > perfdigest.toml
//! ```

// Re-export analysis types
pub use perfdigest_core::{
    AnalysisConfig, AnalysisResult, BestPick, DEFAULT_PROBLEM_SIZE, DEFAULT_TARGET_MS,
    DerivedMetrics, DigestError, FlopModel, MeasurementRecord, REQUIRED_COLUMNS, RecordStore,
    Result, SecondaryTable, derive, estimate_gflops, pick_best,
};

// Re-export renderers
pub use perfdigest_report::{
    HardwareSpec, JSON_FILE_NAME, MARKDOWN_FILE_NAME, OutputFormat, Reference, ReportContext,
    ReportTemplate, StructuredReport, TargetSpec, format_console_summary, generate_json_report,
    generate_markdown_report, parse_json_report, render,
};

// Re-export CLI configuration
pub use perfdigest_cli::{Cli, DigestConfig, DigestOutcome, OutputConfig};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        AnalysisConfig, AnalysisResult, BestPick, MeasurementRecord, RecordStore, ReportContext,
        derive, format_console_summary, generate_json_report, generate_markdown_report,
        pick_best,
    };
}

/// Run the perfdigest CLI.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() {
///     perfdigest::run().unwrap();
/// }
/// ```
pub use perfdigest_cli::run;
