//! Benchmark runner that drives one batch from dispatch to artifact

use crate::client::{Dispatcher, HttpClient};
use crate::config::Config;
use crate::errors::Result;
use crate::metrics::{MetricsAggregator, MetricsReport};

use std::sync::Arc;
use tracing::{info, warn};

/// Builds the transport from configuration, runs the batch and publishes the report
pub struct BenchmarkRunner {
    config: Config,
}

impl BenchmarkRunner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the benchmark, write the JSON artifact and print the console report
    pub async fn run(&self) -> Result<MetricsReport> {
        let report = self.measure().await?;

        report.write_json(&self.config.output.path)?;
        report.print_report();

        Ok(report)
    }

    /// Dispatch and aggregate without any output side effects
    pub async fn measure(&self) -> Result<MetricsReport> {
        let client = HttpClient::new(&self.config)?;
        info!(
            "Starting benchmark: {} requests to {}",
            self.config.batch.requests,
            client.url()
        );

        let dispatcher = Dispatcher::new(Arc::new(client), self.config.batch.requests)
            .with_progress(!self.config.output.verbose);

        let batch = dispatcher.dispatch().await?;
        let report = MetricsAggregator::new(self.config.output.label.as_str()).aggregate(&batch);

        if report.successful_requests == 0 && report.total_requests > 0 {
            warn!(
                "All {} requests failed; latency summary is empty",
                report.total_requests
            );
        }

        Ok(report)
    }
}
