//! Configuration loading from pivot.toml
//!
//! PivotBench configuration can be specified in a `pivot.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.
//! Every field has a default, so an empty file is a valid configuration.

use pivotbench_core::{BenchmarkConfig, DEFAULT_MAX_VALUE, DEFAULT_SIZES, DEFAULT_TRIAL_COUNT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the discovered configuration file
pub const CONFIG_FILE_NAME: &str = "pivot.toml";

/// PivotBench configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PivotConfig {
    /// Sweep configuration
    #[serde(default)]
    pub sweep: SweepConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Sweep parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Input sizes, measured in this order
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,
    /// Timed trials per (size, strategy) pair
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Inclusive upper bound of generated values
    #[serde(default = "default_max_value")]
    pub max_value: u64,
    /// Seed for input generation
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            trials: default_trials(),
            max_value: default_max_value(),
            seed: None,
        }
    }
}

fn default_sizes() -> Vec<usize> {
    DEFAULT_SIZES.to_vec()
}
fn default_trials() -> usize {
    DEFAULT_TRIAL_COUNT
}
fn default_max_value() -> u64 {
    DEFAULT_MAX_VALUE
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Report file (stdout when unset)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl PivotConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for `pivot.toml`
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => {
                        tracing::debug!(path = %config_path.display(), "loaded configuration");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), error = %e, "ignoring unreadable configuration");
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

    /// Sweep configuration for the core runner
    pub fn benchmark_config(&self) -> BenchmarkConfig {
        BenchmarkConfig {
            sizes: self.sweep.sizes.clone(),
            trial_count: self.sweep.trials,
            max_value: self.sweep.max_value,
            seed: self.sweep.seed,
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# PivotBench Configuration

[sweep]
# Input sizes, measured in this order (duplicates are measured twice)
sizes = [10000, 50000, 100000, 500000]
# Timed trials per size and pivot strategy
trials = 5
# Generated values are drawn uniformly from 0..=max_value
max_value = 1000000
# Seed for input generation (uncomment for reproducible inputs)
# seed = 42

[output]
# Output format: human, json, csv
format = "human"
# Report file (uncomment to write to a file instead of stdout)
# path = "target/pivotbench/report.json"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PivotConfig::default();
        assert_eq!(config.sweep.sizes, vec![10_000, 50_000, 100_000, 500_000]);
        assert_eq!(config.sweep.trials, 5);
        assert_eq!(config.output.format, "human");
        assert_eq!(config.benchmark_config(), BenchmarkConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [sweep]
            sizes = [10, 20]
            seed = 7
        "#;

        let config: PivotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sweep.sizes, vec![10, 20]);
        assert_eq!(config.sweep.seed, Some(7));
        // Defaults should still apply
        assert_eq!(config.sweep.trials, 5);
        assert_eq!(config.sweep.max_value, 1_000_000);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_default_toml_parses() {
        let config: PivotConfig = toml::from_str(&PivotConfig::default_toml()).unwrap();
        assert_eq!(config, PivotConfig::default());
    }

    #[test]
    fn test_discover_walks_up() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[sweep]\ntrials = 2\n[output]\nformat = \"csv\"\n",
        )
        .unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = PivotConfig::discover_from(&nested).unwrap();
        assert_eq!(config.sweep.trials, 2);
        assert_eq!(config.output.format, "csv");
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[sweep]\ntrials = \"many\"\n").unwrap();
        assert!(PivotConfig::load(&path).is_err());
    }
}
