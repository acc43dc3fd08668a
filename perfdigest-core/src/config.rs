//! Analysis Configuration
//!
//! The problem size and FLOP formula define the unit of "work" behind the
//! throughput estimate; the target latency drives the pass/fail flag. All of
//! it is plain data so it can come from `perfdigest.toml` or CLI overrides.

use crate::{DEFAULT_PROBLEM_SIZE, DEFAULT_TARGET_MS};
use serde::{Deserialize, Serialize};

/// Parameters consumed by [`derive`](crate::derive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Problem size N fed to the FLOP model
    #[serde(default = "default_problem_size")]
    pub problem_size: u64,
    /// Target latency in milliseconds; `avg_ms` must be strictly below it
    #[serde(default = "default_target_ms")]
    pub target_ms: f64,
    /// Closed-form FLOP count as a function of N
    #[serde(default)]
    pub flop_model: FlopModel,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            problem_size: default_problem_size(),
            target_ms: default_target_ms(),
            flop_model: FlopModel::default(),
        }
    }
}

impl AnalysisConfig {
    /// FLOP count for the configured problem size
    pub fn flop_count(&self) -> f64 {
        self.flop_model.flop_count(self.problem_size)
    }

    /// Whether an average latency meets the target
    pub fn meets_target(&self, avg_ms: f64) -> bool {
        avg_ms < self.target_ms
    }
}

fn default_problem_size() -> u64 {
    DEFAULT_PROBLEM_SIZE
}
fn default_target_ms() -> f64 {
    DEFAULT_TARGET_MS
}

/// FLOP count model: `scale * N^exponent / divisor`
///
/// The default (`4 * N^3 / 3`) is the operation count of a dense
/// LU-based matrix inversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlopModel {
    /// Leading coefficient
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Power applied to N
    #[serde(default = "default_exponent")]
    pub exponent: i32,
    /// Divisor applied after scaling
    #[serde(default = "default_divisor")]
    pub divisor: f64,
}

impl FlopModel {
    /// `4 * N^3 / 3`
    pub const MATRIX_INVERSION: Self = Self {
        scale: 4.0,
        exponent: 3,
        divisor: 3.0,
    };

    /// Number of floating point operations for problem size `n`
    pub fn flop_count(&self, n: u64) -> f64 {
        self.scale * (n as f64).powi(self.exponent) / self.divisor
    }
}

impl Default for FlopModel {
    fn default() -> Self {
        Self::MATRIX_INVERSION
    }
}

fn default_scale() -> f64 {
    FlopModel::MATRIX_INVERSION.scale
}
fn default_exponent() -> i32 {
    FlopModel::MATRIX_INVERSION.exponent
}
fn default_divisor() -> f64 {
    FlopModel::MATRIX_INVERSION.divisor
}
