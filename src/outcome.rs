use crate::common::RequestId;

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Terminal state of one dispatched request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestOutcome {
    pub id: RequestId,
    pub success: bool,
    pub response_time_ms: f64,
    /// Seconds since the batch started, captured at completion
    pub timestamp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RequestOutcome {
    /// Outcome for a request that received a full response with `status`.
    ///
    /// Only `200` counts as success. Other statuses are failures without an
    /// error description.
    pub fn responded(
        id: RequestId,
        status: u16,
        sent_at: Instant,
        completed_at: Instant,
        batch_start: Instant,
    ) -> Self {
        Self {
            id,
            success: status == 200,
            response_time_ms: elapsed_ms(sent_at, completed_at),
            timestamp: completed_at.saturating_duration_since(batch_start).as_secs_f64(),
            error: None,
        }
    }

    /// Outcome for a request that broke at the transport level
    pub fn transport_failure(
        id: RequestId,
        error: impl Into<String>,
        sent_at: Instant,
        failed_at: Instant,
        batch_start: Instant,
    ) -> Self {
        Self {
            id,
            success: false,
            response_time_ms: elapsed_ms(sent_at, failed_at),
            timestamp: failed_at.saturating_duration_since(batch_start).as_secs_f64(),
            error: Some(error.into()),
        }
    }
}

#[inline]
fn elapsed_ms(from: Instant, to: Instant) -> f64 {
    to.saturating_duration_since(from).as_secs_f64() * 1000.0
}
