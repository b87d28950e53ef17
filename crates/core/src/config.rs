// Copyright 2025 LLM Observatory Contributors
// SPDX-License-Identifier: Apache-2.0

//! Run configuration for the benchmark harness.
//!
//! Values are layered, later sources winning:
//!
//! 1. Built-in defaults ([`BenchConfig::default`])
//! 2. An optional TOML file (`parsebench.toml` in the working directory, or
//!    an explicit path)
//! 3. `PARSEBENCH_*` environment variables, e.g. `PARSEBENCH_BASE_URL`,
//!    `PARSEBENCH_SIZES=100,500` or `PARSEBENCH_RULES__COMPLEXITY_THRESHOLD`
//!
//! Command-line flags are applied on top by the caller.
//!
//! # Example
//!
//! ```no_run
//! use parsebench_core::BenchConfig;
//!
//! let config = BenchConfig::load(None)?;
//! println!("Benchmarking {}", config.base_url);
//! # Ok::<(), parsebench_core::ConfigError>(())
//! ```

use crate::wire::RuleConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "PARSEBENCH";

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "parsebench";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration of a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Base address of the analysis service.
    pub base_url: String,
    /// Target line counts, swept in order.
    pub sizes: Vec<i64>,
    /// Pass threshold in milliseconds per 1000 lines.
    pub target_ms_per_1k: f64,
    /// Timeout of a single analysis call, in seconds.
    pub request_timeout_secs: u64,
    /// Timeout of the liveness probe, in seconds.
    pub health_timeout_secs: u64,
    /// Directory receiving the report files.
    pub output_dir: PathBuf,
    /// Analysis rules sent with every request.
    pub rules: RuleConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            sizes: vec![100, 500, 1000, 2000, 5000],
            target_ms_per_1k: 100.0,
            request_timeout_secs: 30,
            health_timeout_secs: 5,
            output_dir: PathBuf::from("benchmarks/output"),
            rules: RuleConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Load configuration from defaults, a config file and the environment.
    ///
    /// When `path` is given the file must exist; otherwise `parsebench.toml`
    /// is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("sizes");

        Self::build(path, Some(env))
    }

    /// Load configuration from defaults and a config file only.
    pub fn load_file(path: &Path) -> Result<Self> {
        Self::build(Some(path), None)
    }

    fn build(path: Option<&Path>, env: Option<Environment>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file);
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a runnable sweep.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".to_string()));
        }
        if self.sizes.is_empty() {
            return Err(ConfigError::Invalid("sizes must not be empty".to_string()));
        }
        if let Some(size) = self.sizes.iter().find(|s| **s <= 0) {
            return Err(ConfigError::Invalid(format!(
                "sizes must be positive, got {size}"
            )));
        }
        if !(self.target_ms_per_1k > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "target_ms_per_1k must be positive, got {}",
                self.target_ms_per_1k
            )));
        }
        if self.request_timeout_secs == 0 || self.health_timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeouts must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Timeout of a single analysis call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Timeout of the liveness probe.
    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    /// Base address without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_config(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("parsebench-{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_standard_sweep() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes, vec![100, 500, 1000, 2000, 5000]);
        assert_eq!(config.target_ms_per_1k, 100.0);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.health_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = temp_config(
            r#"
base_url = "http://analyzer:9000/"
sizes = [100, 500]

[rules]
complexity_threshold = 15
"#,
        );

        let config = BenchConfig::load_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.base_url(), "http://analyzer:9000");
        assert_eq!(config.sizes, vec![100, 500]);
        assert_eq!(config.rules.complexity_threshold, 15);
        assert_eq!(config.rules.max_function_length, 50);
        assert_eq!(config.target_ms_per_1k, 100.0);
    }

    #[test]
    fn test_environment_overrides_file_and_defaults() {
        let path = temp_config(
            r#"
base_url = "http://analyzer:9000"
sizes = [1000]
"#,
        );
        // The only test in this crate that reads the environment.
        std::env::set_var("PARSEBENCH_SIZES", "100,500");
        std::env::set_var("PARSEBENCH_TARGET_MS_PER_1K", "250");
        std::env::set_var("PARSEBENCH_RULES__COMPLEXITY_THRESHOLD", "15");

        let loaded = BenchConfig::load(Some(&path));

        std::env::remove_var("PARSEBENCH_SIZES");
        std::env::remove_var("PARSEBENCH_TARGET_MS_PER_1K");
        std::env::remove_var("PARSEBENCH_RULES__COMPLEXITY_THRESHOLD");
        fs::remove_file(&path).ok();

        let config = loaded.unwrap();
        assert_eq!(config.base_url(), "http://analyzer:9000");
        assert_eq!(config.sizes, vec![100, 500]);
        assert_eq!(config.target_ms_per_1k, 250.0);
        assert_eq!(config.rules.complexity_threshold, 15);
        assert_eq!(config.rules.max_function_length, 50);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("parsebench-does-not-exist.toml");
        assert!(matches!(
            BenchConfig::load_file(&path),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_sweeps() {
        let mut config = BenchConfig::default();
        config.sizes.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = BenchConfig::default();
        config.sizes = vec![100, 0];
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = BenchConfig::default();
        config.target_ms_per_1k = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = BenchConfig::default();
        config.request_timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
