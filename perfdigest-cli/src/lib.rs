#![warn(missing_docs)]
//! perfdigest CLI Library
//!
//! Command-line driver for the analysis pipeline. Use `perfdigest_cli::run()`
//! (or `perfdigest::run()`) in a `main` function to get the full CLI:
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = perfdigest_cli::run() {
//!         eprintln!("Error: {e:#}");
//!         std::process::exit(1);
//!     }
//! }
//! ```
//!
//! A run loads the primary table, derives metrics, picks the best
//! implementation, writes the selected report files into the output directory
//! and prints the console summary.

mod config;

pub use config::*;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use perfdigest_core::{
    AnalysisResult, BestPick, DigestError, RecordStore, SecondaryTable, derive, pick_best,
};
use perfdigest_report::{OutputFormat, format_console_summary, render};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// perfdigest CLI arguments
#[derive(Parser, Debug)]
#[command(name = "perfdigest")]
#[command(author, version, about = "perfdigest - latency table analysis and reporting")]
pub struct Cli {
    /// CSV file with profiling results (Implementation, Min_ms, Max_ms, Avg_ms)
    #[arg(value_name = "CSV_FILE", required_unless_present = "print_config")]
    pub csv_file: Option<PathBuf>,

    /// Secondary per-kernel table (loaded and counted, not analyzed)
    #[arg(long, value_name = "PATH")]
    pub rocprof: Option<PathBuf>,

    /// Generate the markdown report
    #[arg(short, long)]
    pub markdown: bool,

    /// Generate the JSON report
    #[arg(short, long)]
    pub json: bool,

    /// Output directory for report files (created if absent)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Configuration file (default: discover perfdigest.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Problem size N for the FLOP estimate
    #[arg(long, value_name = "N")]
    pub problem_size: Option<u64>,

    /// Target latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub target_ms: Option<f64>,

    /// Print the default perfdigest.toml and exit
    #[arg(long)]
    pub print_config: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything one run produced
#[derive(Debug)]
pub struct DigestOutcome {
    /// Per-implementation metrics
    pub result: AnalysisResult,
    /// Fastest implementation, absent for an empty result
    pub best: Option<BestPick>,
    /// Secondary table, when given and found
    pub secondary: Option<SecondaryTable>,
    /// Report files written, in write order
    pub written: Vec<PathBuf>,
    /// Console summary text
    pub console: String,
}

/// Run the perfdigest CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if the primary input (or an
/// explicit configuration file) cannot be loaded, or a report cannot be written.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the perfdigest CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    if cli.print_config {
        print!("{}", DigestConfig::default_toml());
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    let outcome = generate(&cli, &config, Utc::now())?;

    for path in &outcome.written {
        println!("Report written to: {}", path.display());
    }
    print!("{}", outcome.console);

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "perfdigest=debug"
    } else {
        "perfdigest=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Already installed when embedded in a host binary or test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Layer configuration: defaults → config file → CLI flags.
///
/// An explicit `--config` must load; a discovered file that fails to parse is
/// skipped with a warning.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<DigestConfig> {
    let mut config = match &cli.config {
        Some(path) => DigestConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DigestConfig::discover().unwrap_or_default(),
    };

    if let Some(n) = cli.problem_size {
        config.analysis.problem_size = n;
    }
    if let Some(ms) = cli.target_ms {
        config.analysis.target_ms = ms;
    }
    if let Some(ref dir) = cli.output {
        config.output.directory = dir.clone();
    }

    Ok(config)
}

/// File-backed formats to write for the given flags.
///
/// Markdown runs with `--markdown` or when neither `--json` nor `--rocprof`
/// is given; JSON likewise with `--json`. No flags at all selects both.
pub fn selected_formats(cli: &Cli) -> Vec<OutputFormat> {
    let secondary = cli.rocprof.is_some();
    let mut formats = Vec::new();
    if cli.markdown || (!cli.json && !secondary) {
        formats.push(OutputFormat::Markdown);
    }
    if cli.json || (!cli.markdown && !secondary) {
        formats.push(OutputFormat::Json);
    }
    formats
}

/// Run the pipeline without touching stdout.
///
/// Every selected report is rendered before the first file is written, and
/// nothing is written when the primary table fails to load.
pub fn generate(
    cli: &Cli,
    config: &DigestConfig,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<DigestOutcome> {
    let csv_file = cli.csv_file.as_deref().context("No CSV file given")?;
    let store = RecordStore::load(csv_file)?;
    tracing::info!(rows = store.len(), "Loaded results from {}", csv_file.display());

    let secondary = match cli.rocprof {
        Some(ref path) => load_secondary(path)?,
        None => None,
    };

    let result = derive(&store, &config.analysis);
    let best = pick_best(&result).ok();
    if result.is_empty() {
        tracing::warn!("No implementations found in {}", csv_file.display());
    }

    let ctx = config.report_context(generated_at);

    let mut rendered = Vec::new();
    for format in selected_formats(cli) {
        if let Some(file_name) = format.file_name() {
            let contents = render(format, &result, best.as_ref(), &ctx)
                .with_context(|| format!("Failed to render {:?} report", format))?;
            rendered.push((file_name, contents));
        }
    }

    let mut written = Vec::new();
    if !rendered.is_empty() {
        let output_dir = config.output.directory.as_path();
        std::fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory {}", output_dir.display())
        })?;
        for (file_name, contents) in &rendered {
            written.push(write_artifact(output_dir, file_name, contents)?);
        }
    }

    let console = format_console_summary(&result, best.as_ref(), &ctx);

    Ok(DigestOutcome {
        result,
        best,
        secondary,
        written,
        console,
    })
}

/// Load the secondary table; a missing file is only a warning.
fn load_secondary(path: &Path) -> anyhow::Result<Option<SecondaryTable>> {
    match SecondaryTable::load(path) {
        Ok(table) => {
            tracing::info!(rows = table.len(), "Loaded secondary table from {}", path.display());
            Ok(Some(table))
        }
        Err(DigestError::InputNotFound { .. }) => {
            tracing::warn!("Secondary table not found: {}", path.display());
            Ok(None)
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to load secondary table {}", path.display()))
        }
    }
}

/// Write through a temp file in `dir` and rename into place.
fn write_artifact(dir: &Path, file_name: &str, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(file_name);
    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.persist(&path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote report");
    Ok(path)
}
