//! Metrics aggregation and reporting for the Barrage benchmark harness
//!
//! - Nearest-rank percentile and rounding helpers
//! - Reduction of a finished batch into a report
//! - The JSON artifact and console output

pub mod aggregate;
pub mod report;
pub mod reporting;
pub mod stats;

// Re-export public types for easier access
pub use aggregate::MetricsAggregator;
pub use report::{MetricsReport, ResponseTimes, TimeseriesPoint};
