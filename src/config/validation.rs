//! Configuration validation logic

use super::Config;
use crate::constants::MAX_REQUESTS_LIMIT;
use crate::errors::{BarrageError, Result};
use url::Url;

/// Validate the configuration
pub fn validate(config: &Config) -> Result<()> {
    validate_target(config)?;
    validate_batch_config(config)?;
    validate_output(config)?;
    validate_headers(config)?;
    Ok(())
}

/// Validate target configuration
fn validate_target(config: &Config) -> Result<()> {
    let url = Url::parse(&config.target.url).map_err(|e| {
        BarrageError::config(format!("Invalid target URL '{}': {}", config.target.url, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(BarrageError::config(format!(
            "Invalid URL scheme '{}'. Only 'http' and 'https' are supported",
            scheme
        ))),
    }
}

/// Validate batch configuration
fn validate_batch_config(config: &Config) -> Result<()> {
    if config.batch.requests == 0 {
        return Err(BarrageError::config(
            "Number of requests must be greater than 0",
        ));
    }

    if config.batch.requests > MAX_REQUESTS_LIMIT {
        return Err(BarrageError::config(format!(
            "Number of requests cannot exceed {}",
            MAX_REQUESTS_LIMIT
        )));
    }

    if config.batch.timeout.is_zero() {
        return Err(BarrageError::config("Timeout must be greater than 0"));
    }

    if config.batch.pool_max_idle_per_host == 0 {
        return Err(BarrageError::config(
            "Idle pool size must be greater than 0",
        ));
    }

    Ok(())
}

/// Validate output configuration
fn validate_output(config: &Config) -> Result<()> {
    if config.output.label.trim().is_empty() {
        return Err(BarrageError::config("Report label cannot be empty"));
    }

    if config.output.path.as_os_str().is_empty() {
        return Err(BarrageError::config("Output path cannot be empty"));
    }

    Ok(())
}

/// Validate custom headers format
fn validate_headers(config: &Config) -> Result<()> {
    for header in &config.target.headers {
        if !header.contains(':') {
            return Err(BarrageError::config(format!(
                "Invalid header format '{}'. Use 'Key: Value' format",
                header
            )));
        }
    }
    Ok(())
}
