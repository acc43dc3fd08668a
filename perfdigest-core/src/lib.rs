#![warn(missing_docs)]
//! perfdigest Core - Records, Metrics and Selection
//!
//! The analysis half of the pipeline:
//! - Loading latency tables into a [`RecordStore`]
//! - Deriving per-implementation [`DerivedMetrics`] against an [`AnalysisConfig`]
//! - Picking the fastest implementation with [`pick_best`]
//!
//! ```text
//! CSV table ──▶ RecordStore ──▶ derive() ──▶ AnalysisResult ──▶ pick_best()
//! ```
//!
//! Everything here is plain value passing; nothing holds a "current analysis".

mod config;
mod error;
mod metrics;
mod record;
mod select;

pub use config::{AnalysisConfig, FlopModel};
pub use error::{DigestError, Result};
pub use metrics::{AnalysisResult, DerivedMetrics, derive, estimate_gflops};
pub use record::{MeasurementRecord, REQUIRED_COLUMNS, RecordStore, SecondaryTable};
pub use select::{BestPick, pick_best};

/// Default problem size (N) used by the FLOP model
pub const DEFAULT_PROBLEM_SIZE: u64 = 341;

/// Default target latency in milliseconds
pub const DEFAULT_TARGET_MS: f64 = 5.0;
