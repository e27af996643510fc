//! Periodic recovery scan.
//!
//! # Responsibilities
//! - Tick at a fixed interval
//! - Age excluded providers and re-admit those past the threshold
//! - Stop only on the shutdown signal

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time;

use crate::pool::registry::ProviderRegistry;

/// Background task that re-admits excluded providers after they have
/// sat out a threshold number of sweeps.
pub struct RecoveryScheduler {
    registry: Arc<ProviderRegistry>,
    interval: Duration,
    threshold: u32,
}

impl RecoveryScheduler {
    /// Create a scheduler over the shared registry.
    ///
    /// `threshold` is a sweep count: a provider is re-admitted on the
    /// first sweep where its counter exceeds it, so the default of 2
    /// means re-admission on the third sweep after exclusion.
    pub fn new(registry: Arc<ProviderRegistry>, interval: Duration, threshold: u32) -> Self {
        let interval = if interval.is_zero() {
            tracing::warn!("recovery interval must be positive, flooring to 1s");
            Duration::from_secs(1)
        } else {
            interval
        };

        Self {
            registry,
            interval,
            threshold,
        }
    }

    /// Spawn the scan loop onto the current runtime and return a handle
    /// that can stop it.
    pub fn spawn(self) -> RecoveryHandle {
        let (tx, rx) = broadcast::channel(1);
        let task = tokio::spawn(self.run(rx));
        RecoveryHandle {
            tx,
            task: Some(task),
        }
    }

    async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            threshold = self.threshold,
            "recovery scheduler starting"
        );

        let mut ticker = time::interval(self.interval);
        // The first interval tick completes immediately; consume it so
        // the first sweep lands one full period after startup.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.sweep();
                }
                _ = shutdown.recv() => {
                    tracing::info!("recovery scheduler received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    fn sweep(&self) {
        tracing::debug!("recovery sweep");
        for identifier in self.registry.sweep_excluded(self.threshold) {
            tracing::info!(provider = %identifier, "provider re-admitted after excluded checks");
        }
    }
}

/// Handle to a running recovery task.
///
/// Dropping the handle signals the loop to stop ticking; [`stop`]
/// additionally waits for the task to exit, letting an in-flight sweep
/// complete.
///
/// [`stop`]: RecoveryHandle::stop
#[derive(Debug)]
pub struct RecoveryHandle {
    tx: broadcast::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl RecoveryHandle {
    /// Signal the scan loop and wait for it to exit.
    pub async fn stop(mut self) {
        let _ = self.tx.send(());
        if let Some(task) = self.task.take() {
            if let Err(error) = task.await {
                tracing::warn!(%error, "recovery task ended abnormally");
            }
        }
    }
}

impl Drop for RecoveryHandle {
    fn drop(&mut self) {
        let _ = self.tx.send(());
    }
}
