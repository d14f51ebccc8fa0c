//! Default values and configuration presets

use super::{BatchConfig, Config, OutputConfig, TargetConfig, Variant};
use std::path::PathBuf;
use std::time::Duration;

/// Default configuration values
pub struct Defaults;

impl Defaults {
    pub const TARGET_URL: &'static str = "https://jsonplaceholder.typicode.com/posts/1";
    pub const PRIMARY_REQUESTS: usize = 1000;
    pub const LIGHTWEIGHT_REQUESTS: usize = 50;
    pub const TIMEOUT_SECONDS: u64 = 10;
    pub const POOL_MAX_IDLE_PER_HOST: usize = 50;
    pub const LABEL: &'static str = "rust";
    pub const OUTPUT_FILE: &'static str = "api_results.json";
}

impl Config {
    /// Build a configuration for the given preset against `target_url`
    pub fn for_variant(target_url: String, variant: Variant) -> Self {
        Self {
            target: TargetConfig {
                url: target_url,
                insecure: false,
                headers: vec![],
            },
            batch: BatchConfig {
                requests: variant.request_count(),
                timeout: Duration::from_secs(Defaults::TIMEOUT_SECONDS),
                pool_max_idle_per_host: Defaults::POOL_MAX_IDLE_PER_HOST,
            },
            output: OutputConfig {
                label: Defaults::LABEL.to_string(),
                path: PathBuf::from(Defaults::OUTPUT_FILE),
                verbose: false,
            },
        }
    }

    /// Create the full-size benchmark configuration
    pub fn primary(target_url: String) -> Self {
        Self::for_variant(target_url, Variant::Primary)
    }

    /// Create the lightweight benchmark configuration
    pub fn lightweight(target_url: String) -> Self {
        Self::for_variant(target_url, Variant::Lightweight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_config() {
        let config = Config::primary(Defaults::TARGET_URL.to_string());
        assert_eq!(config.batch.requests, Defaults::PRIMARY_REQUESTS);
        assert_eq!(config.batch.timeout.as_secs(), Defaults::TIMEOUT_SECONDS);
        assert_eq!(config.batch.pool_max_idle_per_host, 50);
        assert_eq!(config.output.label, "rust");
        assert_eq!(config.output.path, PathBuf::from("api_results.json"));
    }

    #[test]
    fn test_lightweight_config() {
        let config = Config::lightweight("http://localhost:8080".to_string());
        assert_eq!(config.batch.requests, 50);
        assert_eq!(config.batch.timeout, Duration::from_secs(10));
        assert!(!config.target.insecure);
    }
}
