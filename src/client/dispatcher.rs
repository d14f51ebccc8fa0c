//! Fan-out/fan-in dispatch of one benchmark batch

use crate::client::RequestExecutor;
use crate::common::RequestId;
use crate::constants::*;
use crate::errors::{BarrageError, ErrorContext, Result};
use crate::outcome::RequestOutcome;

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Every outcome of a batch in completion order, plus the wall-clock time
/// the batch took
#[derive(Debug, Clone)]
pub struct Batch {
    pub outcomes: Vec<RequestOutcome>,
    pub elapsed: Duration,
}

impl Batch {
    pub fn empty() -> Self {
        Self {
            outcomes: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }
}

/// Launches every request of a batch at once and waits for all of them.
///
/// Tasks never touch a shared collection: each one sends its outcome over a
/// channel and a single collector appends to the final list.
pub struct Dispatcher {
    executor: Arc<dyn RequestExecutor>,
    requests: usize,
    show_progress: bool,
}

impl Dispatcher {
    pub fn new(executor: Arc<dyn RequestExecutor>, requests: usize) -> Self {
        Self {
            executor,
            requests,
            show_progress: false,
        }
    }

    /// Print progress dots on stdout while the batch is in flight
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the batch to completion
    pub async fn dispatch(&self) -> Result<Batch> {
        if self.requests == 0 {
            debug!("Empty batch, nothing to dispatch");
            return Ok(Batch::empty());
        }

        info!("Dispatching {} concurrent requests", self.requests);

        let (outcome_tx, outcome_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE.min(self.requests));
        let batch_start = Instant::now();

        let handles = self.spawn_all_requests(outcome_tx, batch_start);
        let outcomes = if self.show_progress {
            self.collect_with_progress_dots(outcome_rx).await
        } else {
            self.collect_outcomes(outcome_rx).await
        };
        let elapsed = batch_start.elapsed();

        Self::join_all_requests(handles).await?;
        self.verify_outcomes(&outcomes)?;

        info!(
            "Batch completed: {} outcomes in {:.2}s",
            outcomes.len(),
            elapsed.as_secs_f64()
        );

        Ok(Batch { outcomes, elapsed })
    }

    /// Spawn one task per request; the sender is dropped once all are out
    fn spawn_all_requests(
        &self,
        outcome_tx: mpsc::Sender<RequestOutcome>,
        batch_start: Instant,
    ) -> Vec<JoinHandle<()>> {
        let mut handles = Vec::with_capacity(self.requests);

        for index in 0..self.requests {
            let id = RequestId::new(index);
            let executor = Arc::clone(&self.executor);
            let outcome_tx = outcome_tx.clone();

            handles.push(tokio::spawn(async move {
                let outcome = executor.execute(id, batch_start).await;
                // Receiver lives until every sender is gone
                let _ = outcome_tx.send(outcome).await;
            }));
        }

        handles
    }

    async fn collect_outcomes(
        &self,
        mut outcome_rx: mpsc::Receiver<RequestOutcome>,
    ) -> Vec<RequestOutcome> {
        let mut outcomes = Vec::with_capacity(self.requests);

        while let Some(outcome) = outcome_rx.recv().await {
            outcomes.push(outcome);
            if outcomes.len() % DEBUG_LOG_INTERVAL == 0 {
                debug!("{}/{} requests completed", outcomes.len(), self.requests);
            }
        }

        outcomes
    }

    /// Collect outcomes with progress dots in non-verbose mode
    async fn collect_with_progress_dots(
        &self,
        outcome_rx: mpsc::Receiver<RequestOutcome>,
    ) -> Vec<RequestOutcome> {
        print!("Progress: ");
        let _ = std::io::stdout().flush();

        let mut dot_interval = progress_interval();

        tokio::select! {
            outcomes = self.collect_outcomes(outcome_rx) => {
                println!();
                outcomes
            }
            _ = async {
                loop {
                    dot_interval.tick().await;
                    print!(".");
                    let _ = std::io::stdout().flush();
                }
            } => unreachable!("progress loop never completes"),
        }
    }

    async fn join_all_requests(handles: Vec<JoinHandle<()>>) -> Result<()> {
        for joined in futures_util::future::join_all(handles).await {
            joined.with_execution_context("Request task terminated abnormally")?;
        }

        Ok(())
    }

    /// Exactly one outcome per dispatched id
    fn verify_outcomes(&self, outcomes: &[RequestOutcome]) -> Result<()> {
        if outcomes.len() != self.requests {
            return Err(BarrageError::execution(format!(
                "Expected {} outcomes, collected {}",
                self.requests,
                outcomes.len()
            )));
        }

        let mut seen = vec![false; self.requests];
        for outcome in outcomes {
            let index = outcome.id.get();
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(BarrageError::execution(format!(
                        "Duplicate outcome for request {}",
                        outcome.id
                    )));
                }
                None => {
                    return Err(BarrageError::execution(format!(
                        "Outcome id {} is outside the batch",
                        outcome.id
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Ticks every progress period; the first dot waits a full period
fn progress_interval() -> tokio::time::Interval {
    let period = Duration::from_millis(PROGRESS_DOT_INTERVAL_MS);
    tokio::time::interval_at(tokio::time::Instant::now() + period, period)
}
