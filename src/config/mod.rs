//! Configuration management for the Barrage benchmark harness
//!
//! This module provides a layered approach to configuration:
//! - Core structures and enums
//! - CLI argument parsing
//! - Configuration validation
//! - Default value management and presets

pub mod defaults;
pub mod parser;
pub mod validation;

use crate::errors::{BarrageError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Benchmark size preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Full-size batch (1000 requests)
    Primary,
    /// Small batch for quick checks (50 requests)
    Lightweight,
}

impl Variant {
    /// Number of requests dispatched by this preset
    pub fn request_count(&self) -> usize {
        match self {
            Variant::Primary => defaults::Defaults::PRIMARY_REQUESTS,
            Variant::Lightweight => defaults::Defaults::LIGHTWEIGHT_REQUESTS,
        }
    }
}

/// Target configuration
#[derive(Debug, Clone)]
pub struct TargetConfig {
    pub url: String,
    pub insecure: bool,
    pub headers: Vec<String>,
}

/// Batch configuration, shared read-only by every request in a run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub requests: usize,
    pub timeout: Duration,
    pub pool_max_idle_per_host: usize,
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub label: String,
    pub path: PathBuf,
    pub verbose: bool,
}

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    pub target: TargetConfig,
    pub batch: BatchConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Parse and validate configuration from command line arguments
    pub fn from_args() -> Result<Self> {
        let raw_config = parser::RawConfig::parse_from_args()?;
        let config = raw_config.try_into()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Get custom headers as key-value pairs
    pub fn custom_headers(&self) -> Result<Vec<(String, String)>> {
        let mut headers = Vec::new();
        for header in &self.target.headers {
            if let Some((key, value)) = header.split_once(':') {
                headers.push((key.trim().to_string(), value.trim().to_string()));
            } else {
                return Err(BarrageError::config(format!(
                    "Invalid header format '{}'. Use 'Key: Value' format",
                    header
                )));
            }
        }
        Ok(headers)
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        self.batch.timeout
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        println!("Barrage Benchmark Configuration:");
        println!("   Target:           {}", self.target.url);
        println!("   Requests:         {}", self.batch.requests);
        println!("   Timeout:          {:.2}s", self.batch.timeout.as_secs_f64());
        println!(
            "   Idle Pool:        {} connections per host",
            self.batch.pool_max_idle_per_host
        );
        println!("   Label:            {}", self.output.label);
        println!("   Output:           {}", self.output.path.display());

        if !self.target.headers.is_empty() {
            println!("   Custom Headers:   {}", self.target.headers.len());
            for header in &self.target.headers {
                println!("                     {}", header);
            }
        }

        if self.target.insecure {
            println!("   Security:         Insecure mode enabled");
        }

        println!();
    }
}
