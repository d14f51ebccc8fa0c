//! Report structures and the JSON artifact

use crate::errors::Result;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Latency summary over successful requests, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimes {
    pub min_ms: f64,
    pub max_ms: f64,
    pub average_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesPoint {
    pub timestamp: f64,
    pub response_time_ms: f64,
}

/// Summary of one benchmark run.
///
/// `response_times` is `None` when nothing succeeded and is written as an
/// empty JSON object in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    #[serde(rename = "language")]
    pub label: String,
    pub total_requests: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    pub total_time_seconds: f64,
    pub requests_per_second: f64,
    #[serde(with = "empty_when_absent", default)]
    pub response_times: Option<ResponseTimes>,
    pub timeseries: Vec<TimeseriesPoint>,
}

impl MetricsReport {
    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the report to `path`, replacing any previous run
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        info!("Results saved to {}", path.display());
        Ok(())
    }
}

mod empty_when_absent {
    use super::ResponseTimes;

    use serde::de::Error as _;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<ResponseTimes>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(times) => times.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ResponseTimes>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let absent = match &value {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if absent {
            return Ok(None);
        }
        ResponseTimes::deserialize(value)
            .map(Some)
            .map_err(D::Error::custom)
    }
}
