//! Concurrent HTTP latency benchmark.
//!
//! Fires a batch of GET requests at one endpoint all at once, records the
//! outcome and timing of each, and reduces them into a report with
//! nearest-rank percentiles and a completion-ordered timeseries.

pub mod client;
pub mod common;
pub mod config;
pub mod constants;
pub mod errors;
pub mod metrics;
pub mod outcome;
pub mod runner;

pub use client::{Batch, Dispatcher, HttpClient, RequestExecutor};
pub use common::RequestId;
pub use config::Config;
pub use errors::{BarrageError, Result};
pub use metrics::{MetricsAggregator, MetricsReport};
pub use outcome::RequestOutcome;
pub use runner::BenchmarkRunner;
