//! Command-line argument parsing for Barrage configuration

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::Defaults;
use super::{BatchConfig, Config, OutputConfig, TargetConfig, Variant};
use crate::errors::{BarrageError, Result};

/// Benchmark preset for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// 1000 concurrent requests
    Primary,
    /// 50 concurrent requests
    Lightweight,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Primary => Variant::Primary,
            VariantArg::Lightweight => Variant::Lightweight,
        }
    }
}

/// Raw configuration from command line arguments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "barrage",
    version,
    about = "Fires a batch of concurrent GET requests and reports latency percentiles",
    long_about = None
)]
pub struct RawConfig {
    /// Target URL for the benchmark
    #[arg(
        short = 't',
        long = "target",
        value_name = "URL",
        default_value = Defaults::TARGET_URL,
        help = "Target URL to benchmark (HTTP/HTTPS)"
    )]
    pub target: String,

    /// Benchmark preset
    #[arg(
        long = "variant",
        value_enum,
        default_value = "primary",
        help = "Batch size preset (primary = 1000 requests, lightweight = 50)"
    )]
    pub variant: VariantArg,

    /// Request count override
    #[arg(
        short = 'n',
        long = "requests",
        value_name = "COUNT",
        help = "Number of concurrent requests (overrides --variant)"
    )]
    pub requests: Option<usize>,

    /// Per-request timeout
    #[arg(
        long = "timeout",
        value_name = "DURATION",
        default_value = "10s",
        help = "Per-request timeout (e.g., '10', '10s', '500ms', '1m')"
    )]
    pub timeout: String,

    /// Idle connection pool size
    #[arg(
        long = "pool-max-idle",
        value_name = "COUNT",
        default_value_t = Defaults::POOL_MAX_IDLE_PER_HOST,
        help = "Maximum idle connections kept per host"
    )]
    pub pool_max_idle: usize,

    /// Custom headers
    #[arg(
        short = 'H',
        long = "header",
        value_name = "HEADER",
        action = clap::ArgAction::Append,
        help = "Custom headers in 'Key: Value' format (can be used multiple times)"
    )]
    pub headers: Vec<String>,

    /// Allow insecure connections
    #[arg(
        long = "insecure",
        help = "Allow insecure TLS connections (skip certificate verification)"
    )]
    pub insecure: bool,

    /// Report label
    #[arg(
        short = 'l',
        long = "label",
        value_name = "LABEL",
        default_value = Defaults::LABEL,
        help = "Identifier written to the report's 'language' field"
    )]
    pub label: String,

    /// Output artifact path
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = Defaults::OUTPUT_FILE,
        help = "Path of the JSON report (overwritten on each run)"
    )]
    pub output: PathBuf,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,
}

impl RawConfig {
    /// Parse from command line arguments
    pub fn parse_from_args() -> Result<Self> {
        Ok(Self::parse())
    }

    /// Parse duration string with time suffixes (ms/s/m)
    fn parse_duration(duration_str: &str) -> Result<Duration> {
        let duration_str = duration_str.trim();

        if duration_str.is_empty() {
            return Err(BarrageError::config("Duration cannot be empty"));
        }

        let lower = duration_str.to_ascii_lowercase();
        let (number_part, unit_ms) = if let Some(number) = lower.strip_suffix("ms") {
            (number, 1)
        } else if let Some(number) = lower.strip_suffix('s') {
            (number, 1_000)
        } else if let Some(number) = lower.strip_suffix('m') {
            (number, 60_000)
        } else {
            // No suffix, assume seconds
            (lower.as_str(), 1_000)
        };

        let value = number_part.trim().parse::<u64>().map_err(|_| {
            BarrageError::config(format!(
                "Invalid duration format: '{}' - expected a whole number with optional ms/s/m suffix",
                duration_str
            ))
        })?;

        value
            .checked_mul(unit_ms)
            .map(Duration::from_millis)
            .ok_or_else(|| BarrageError::config(format!("Duration '{}' is too large", duration_str)))
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = BarrageError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let timeout = RawConfig::parse_duration(&raw.timeout)?;
        let variant = Variant::from(raw.variant);
        let requests = raw.requests.unwrap_or_else(|| variant.request_count());

        Ok(Config {
            target: TargetConfig {
                url: raw.target,
                insecure: raw.insecure,
                headers: raw.headers,
            },
            batch: BatchConfig {
                requests,
                timeout,
                pool_max_idle_per_host: raw.pool_max_idle,
            },
            output: OutputConfig {
                label: raw.label,
                path: raw.output,
                verbose: raw.verbose,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let raw = RawConfig::try_parse_from(std::iter::once("barrage").chain(args.iter().copied()))
            .expect("arguments should parse");
        Config::try_from(raw).expect("conversion should succeed")
    }

    #[test]
    fn test_defaults_match_primary_variant() {
        let config = parse(&[]);
        assert_eq!(config.target.url, Defaults::TARGET_URL);
        assert_eq!(config.batch.requests, 1000);
        assert_eq!(config.batch.timeout, Duration::from_secs(10));
        assert_eq!(config.output.label, "rust");
        assert_eq!(config.output.path, PathBuf::from("api_results.json"));
    }

    #[test]
    fn test_lightweight_variant() {
        let config = parse(&["--variant", "lightweight"]);
        assert_eq!(config.batch.requests, 50);
    }

    #[test]
    fn test_request_count_overrides_variant() {
        let config = parse(&["--variant", "lightweight", "-n", "7"]);
        assert_eq!(config.batch.requests, 7);
    }

    #[test]
    fn test_repeated_headers_are_collected() {
        let config = parse(&["-H", "Accept: text/plain", "-H", "X-Run: 1"]);
        assert_eq!(config.target.headers.len(), 2);
    }

    #[test]
    fn test_parse_duration_suffixes() {
        assert_eq!(
            RawConfig::parse_duration("250ms").unwrap(),
            Duration::from_millis(250)
        );
        assert_eq!(
            RawConfig::parse_duration("10s").unwrap(),
            Duration::from_secs(10)
        );
        assert_eq!(
            RawConfig::parse_duration("2m").unwrap(),
            Duration::from_secs(120)
        );
        assert_eq!(
            RawConfig::parse_duration(" 15 ").unwrap(),
            Duration::from_secs(15)
        );
        assert_eq!(
            RawConfig::parse_duration("3S").unwrap(),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(RawConfig::parse_duration("").is_err());
        assert!(RawConfig::parse_duration("ten").is_err());
        assert!(RawConfig::parse_duration("5h").is_err());
        assert!(RawConfig::parse_duration("-1s").is_err());
    }
}
