//! HTTP transport for the benchmark batch

use crate::client::RequestExecutor;
use crate::common::RequestId;
use crate::config::Config;
use crate::errors::{ErrorContext, Result};
use crate::outcome::RequestOutcome;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Instant;
use tracing::debug;
use url::Url;

/// GET client shared by every request of a batch.
///
/// Holds only immutable configuration and the connection pool; cloning is
/// cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    pub(crate) http_client: reqwest::Client,
    pub(crate) url: Url,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self> {
        let url = Url::parse(&config.target.url)?;
        let headers = Self::build_default_headers(config)?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .pool_max_idle_per_host(config.batch.pool_max_idle_per_host)
            .default_headers(headers)
            .danger_accept_invalid_certs(config.target.insecure)
            .build()
            .with_transport_context("Failed to create HTTP client")?;

        Ok(Self { http_client, url })
    }

    fn build_default_headers(config: &Config) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (key, value) in config.custom_headers()? {
            let name = HeaderName::from_bytes(key.as_bytes())
                .with_config_context(&format!("Invalid header name '{}'", key))?;
            let value = HeaderValue::from_str(&value)
                .with_config_context(&format!("Invalid value for header '{}'", key))?;
            headers.append(name, value);
        }
        Ok(headers)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl RequestExecutor for HttpClient {
    async fn execute(&self, id: RequestId, batch_start: Instant) -> RequestOutcome {
        let sent_at = Instant::now();

        let response = match self.http_client.get(self.url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                let failed_at = Instant::now();
                let description = describe_error(&e);
                debug!("Request {} failed: {}", id, description);
                return RequestOutcome::transport_failure(
                    id,
                    description,
                    sent_at,
                    failed_at,
                    batch_start,
                );
            }
        };

        let status = response.status();

        // The body is unused but must be fully received before the clock stops
        match response.bytes().await {
            Ok(_) => {
                let completed_at = Instant::now();
                if status != StatusCode::OK {
                    debug!("Request {} received HTTP status {}", id, status);
                }
                RequestOutcome::responded(id, status.as_u16(), sent_at, completed_at, batch_start)
            }
            Err(e) => {
                let failed_at = Instant::now();
                let description = describe_error(&e);
                debug!("Request {} failed while reading body: {}", id, description);
                RequestOutcome::transport_failure(id, description, sent_at, failed_at, batch_start)
            }
        }
    }
}

/// Flatten an error and its source chain into one line.
///
/// reqwest keeps the interesting part (timeout, refused, DNS) in the sources.
fn describe_error(error: &(dyn std::error::Error + 'static)) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !description.contains(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_describe_error_includes_sources() {
        let error = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert_eq!(
            describe_error(&error),
            "error sending request: connection refused"
        );
    }

    #[test]
    fn test_new_rejects_bad_header_name() {
        let mut config = Config::lightweight("http://localhost:8080".to_string());
        config.target.headers = vec!["Bad Header: value".to_string()];
        assert!(HttpClient::new(&config).is_err());
    }

    #[test]
    fn test_new_keeps_target_url() {
        let mut config = Config::lightweight("http://127.0.0.1:9/posts/1".to_string());
        config.target.headers = vec!["Accept: application/json".to_string()];
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.url().path(), "/posts/1");
    }
}
