//! Configuration loading from perfdigest.toml
//!
//! Configuration can be given explicitly with `--config` or placed in a
//! `perfdigest.toml` file, discovered by walking up from the current directory.
//! Every field has a default, so a partial file only overrides what it names.

use chrono::{DateTime, Utc};
use perfdigest_core::AnalysisConfig;
use perfdigest_report::{HardwareSpec, ReportContext, ReportTemplate, TargetSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the discovered configuration file
pub const CONFIG_FILE_NAME: &str = "perfdigest.toml";

/// perfdigest configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DigestConfig {
    /// Problem size, target latency and FLOP model
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Description of the benchmarked workload
    #[serde(default)]
    pub target: TargetSpec,
    /// Hardware constants for the reports
    #[serde(default)]
    pub hardware: HardwareSpec,
    /// Static prose of the markdown report
    #[serde(default)]
    pub template: ReportTemplate,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the report files
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl DigestConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => {
                        tracing::debug!(path = %config_path.display(), "using configuration");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            "ignoring invalid configuration: {e:#}"
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Build the renderer context for a given clock reading
    pub fn report_context(&self, generated_at: DateTime<Utc>) -> ReportContext {
        ReportContext {
            generated_at,
            analysis: self.analysis,
            target: self.target.clone(),
            hardware: self.hardware.clone(),
            template: self.template.clone(),
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# perfdigest configuration

[analysis]
# Problem size N fed to the FLOP model
problem_size = 341
# Target latency in milliseconds (avg must be strictly below)
target_ms = 5.0

[analysis.flop_model]
# FLOP count = scale * N^exponent / divisor (default: matrix inversion, 4N^3/3)
scale = 4.0
exponent = 3
divisor = 3.0

[target]
gpu = "AMD MI100/AI100"
matrix_type = "complex_symmetric"
matrix_description = "Complex Hermitian (Symmetric)"
precision = "Single (complex<float>)"
timing_scope = "GPU execution only"

[hardware]
compute_units = 120
peak_flops_tflops = 40.0
memory_bandwidth_gb_s = 900.0
l1_cache_kb = 16
l2_cache_mb = 4
lds_per_cu_kb = 96
wavefront_size = 64

[output]
# Directory receiving profiling_report.md and profiling_data.json
directory = "."

# Static report prose. Omitted keys keep the built-in text.
# [template]
# title = "GPU Matrix Inversion Profiling Report"
# algorithm_overview = '''
# #### My Approach
# - ...
# '''
# bottleneck_analysis = '''...'''
# recommendations = ["**Use Hybrid Approach** - GETRF + TRSM shows better performance"]
# limitations = ["Single matrix size (341×341) - may not generalize"]
# references = [{ title = "AMD rocSOLVER Documentation", url = "https://rocm.docs.amd.com/projects/rocSOLVER/" }]
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DigestConfig::default();
        assert_eq!(config.analysis.problem_size, 341);
        assert_eq!(config.analysis.target_ms, 5.0);
        assert_eq!(config.output.directory, Path::new("."));
        assert_eq!(config.hardware.compute_units, 120);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [analysis]
            target_ms = 2.5

            [target]
            gpu = "AMD MI250X"

            [template]
            recommendations = ["Profile with rocprof first"]
        "#;

        let config: DigestConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.analysis.target_ms, 2.5);
        assert_eq!(config.target.gpu, "AMD MI250X");
        assert_eq!(config.template.recommendations.len(), 1);
        // Defaults should still apply
        assert_eq!(config.analysis.problem_size, 341);
        assert_eq!(config.target.precision, "Single (complex<float>)");
        assert_eq!(config.template.limitations.len(), 3);
        assert_eq!(config.output.directory, Path::new("."));
    }

    #[test]
    fn test_default_toml_parses() {
        let config: DigestConfig = toml::from_str(&DigestConfig::default_toml()).unwrap();
        assert_eq!(config, DigestConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[analysis]\nproblem_size = 512\n").unwrap();

        let config = DigestConfig::load(&path).unwrap();
        assert_eq!(config.analysis.problem_size, 512);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[analysis]\nproblem_size = \"big\"\n").unwrap();

        assert!(DigestConfig::load(&path).is_err());
    }

    #[test]
    fn test_report_context() {
        let mut config = DigestConfig::default();
        config.analysis.target_ms = 1.0;
        config.hardware.compute_units = 220;

        let at = Utc::now();
        let ctx = config.report_context(at);
        assert_eq!(ctx.generated_at, at);
        assert_eq!(ctx.analysis.target_ms, 1.0);
        assert_eq!(ctx.hardware.compute_units, 220);
    }
}
