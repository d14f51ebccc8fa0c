//! Reduction of a finished batch into a `MetricsReport`

use crate::client::Batch;
use crate::constants::{MILLIS_PRECISION, TIMESTAMP_PRECISION};
use crate::metrics::report::{MetricsReport, ResponseTimes, TimeseriesPoint};
use crate::metrics::stats::{mean, percentile, round_to};
use crate::outcome::RequestOutcome;

use std::time::Duration;

/// Turns per-request outcomes into summary statistics
#[derive(Debug, Clone)]
pub struct MetricsAggregator {
    label: String,
}

impl MetricsAggregator {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn aggregate(&self, batch: &Batch) -> MetricsReport {
        self.aggregate_outcomes(&batch.outcomes, batch.elapsed)
    }

    /// Build the report from outcomes in the order they were collected.
    ///
    /// With no successful request the latency summary is absent, the
    /// timeseries is empty and the request rate is reported as 0.
    pub fn aggregate_outcomes(&self, outcomes: &[RequestOutcome], elapsed: Duration) -> MetricsReport {
        let successful: Vec<&RequestOutcome> = outcomes.iter().filter(|o| o.success).collect();
        let total_requests = outcomes.len();
        let successful_requests = successful.len();
        let total_time = elapsed.as_secs_f64();

        let requests_per_second = if successful_requests > 0 && total_time > 0.0 {
            round_to(total_requests as f64 / total_time, MILLIS_PRECISION)
        } else {
            0.0
        };

        let timeseries = successful
            .iter()
            .map(|outcome| TimeseriesPoint {
                timestamp: round_to(outcome.timestamp, TIMESTAMP_PRECISION),
                response_time_ms: round_to(outcome.response_time_ms, MILLIS_PRECISION),
            })
            .collect();

        MetricsReport {
            label: self.label.clone(),
            total_requests,
            successful_requests,
            failed_requests: total_requests - successful_requests,
            total_time_seconds: round_to(total_time, MILLIS_PRECISION),
            requests_per_second,
            response_times: Self::summarize(&successful),
            timeseries,
        }
    }

    fn summarize(successful: &[&RequestOutcome]) -> Option<ResponseTimes> {
        let mut times: Vec<f64> = successful.iter().map(|o| o.response_time_ms).collect();
        times.sort_by(f64::total_cmp);

        let ms = |value: f64| round_to(value, MILLIS_PRECISION);

        Some(ResponseTimes {
            min_ms: ms(*times.first()?),
            max_ms: ms(*times.last()?),
            average_ms: ms(mean(&times)?),
            median_ms: ms(percentile(&times, 0.50)?),
            p95_ms: ms(percentile(&times, 0.95)?),
            p99_ms: ms(percentile(&times, 0.99)?),
        })
    }
}
