//! Client module for the benchmark batch
//!
//! - A trait abstraction for anything that can execute one timed request
//! - The reqwest-backed HTTP implementation
//! - The dispatcher that fans a batch out and collects every outcome

pub mod dispatcher;
pub mod http;

// Re-export public types for easier access
pub use dispatcher::{Batch, Dispatcher};
pub use http::HttpClient;

use crate::common::RequestId;
use crate::outcome::RequestOutcome;

use async_trait::async_trait;
use std::time::Instant;

/// Executes a single request and reports its terminal state.
///
/// Implementations absorb every per-request failure into the returned
/// outcome; nothing is propagated past this boundary.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, id: RequestId, batch_start: Instant) -> RequestOutcome;
}
